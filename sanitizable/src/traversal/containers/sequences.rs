//! Traversal for ordered sequences and tuples.

use std::collections::{LinkedList, VecDeque};

use crate::{text::TextMapper, traversal::traits::SanitizableWithMapper};

impl<T> SanitizableWithMapper for [T]
where
    T: SanitizableWithMapper,
{
    fn sanitize_with<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        for item in self {
            item.sanitize_with(mapper);
        }
    }
}

impl<T, const N: usize> SanitizableWithMapper for [T; N]
where
    T: SanitizableWithMapper,
{
    fn sanitize_with<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        self.as_mut_slice().sanitize_with(mapper);
    }
}

impl<T> SanitizableWithMapper for Vec<T>
where
    T: SanitizableWithMapper,
{
    fn sanitize_with<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        self.as_mut_slice().sanitize_with(mapper);
    }
}

impl<T> SanitizableWithMapper for VecDeque<T>
where
    T: SanitizableWithMapper,
{
    fn sanitize_with<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        for item in self {
            item.sanitize_with(mapper);
        }
    }
}

impl<T> SanitizableWithMapper for LinkedList<T>
where
    T: SanitizableWithMapper,
{
    fn sanitize_with<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        for item in self {
            item.sanitize_with(mapper);
        }
    }
}

// =============================================================================
// Tuples (records with positional fields)
// =============================================================================

macro_rules! impl_sanitizable_tuple {
    ($($name:ident),+) => {
        impl<$($name),+> SanitizableWithMapper for ($($name,)+)
        where
            $($name: SanitizableWithMapper,)+
        {
            #[allow(non_snake_case)]
            fn sanitize_with<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
                let ($($name,)+) = self;
                $($name.sanitize_with(mapper);)+
            }
        }
    };
}

impl_sanitizable_tuple!(A);
impl_sanitizable_tuple!(A, B);
impl_sanitizable_tuple!(A, B, C);
impl_sanitizable_tuple!(A, B, C, D);
impl_sanitizable_tuple!(A, B, C, D, E);
impl_sanitizable_tuple!(A, B, C, D, E, F);
impl_sanitizable_tuple!(A, B, C, D, E, F, G);
impl_sanitizable_tuple!(A, B, C, D, E, F, G, H);
