//! Traversal through references and single-value wrappers.

use std::{any::type_name, rc::Rc, sync::Arc};

use crate::{text::TextMapper, traversal::traits::SanitizableWithMapper};

// =============================================================================
// Owning wrappers
// =============================================================================

impl<T> SanitizableWithMapper for Option<T>
where
    T: SanitizableWithMapper,
{
    fn sanitize_with<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        if let Some(value) = self {
            value.sanitize_with(mapper);
        }
    }
}

impl<T> SanitizableWithMapper for Box<T>
where
    T: SanitizableWithMapper + ?Sized,
{
    fn sanitize_with<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        (**self).sanitize_with(mapper);
    }
}

impl<T, E> SanitizableWithMapper for Result<T, E>
where
    T: SanitizableWithMapper,
    E: SanitizableWithMapper,
{
    fn sanitize_with<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        match self {
            Ok(value) => value.sanitize_with(mapper),
            Err(err) => err.sanitize_with(mapper),
        }
    }
}

// =============================================================================
// References
// =============================================================================

impl<T> SanitizableWithMapper for &mut T
where
    T: SanitizableWithMapper + ?Sized,
{
    fn sanitize_with<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        (**self).sanitize_with(mapper);
    }

    fn sanitize_map_value<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        (**self).sanitize_map_value(mapper);
    }
}

impl<T> SanitizableWithMapper for &T
where
    T: ?Sized,
{
    fn sanitize_with<M: TextMapper + ?Sized>(&mut self, _mapper: &M) {
        tracing::trace!(
            target_type = type_name::<T>(),
            "skipping shared reference: not exclusively borrowable"
        );
    }
}

// =============================================================================
// Reference-counted handles
// =============================================================================

impl<T> SanitizableWithMapper for Rc<T>
where
    T: SanitizableWithMapper + ?Sized,
{
    fn sanitize_with<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        match Rc::get_mut(self) {
            Some(value) => value.sanitize_with(mapper),
            None => tracing::trace!(
                target_type = type_name::<T>(),
                strong = Rc::strong_count(self),
                weak = Rc::weak_count(self),
                "skipping shared Rc"
            ),
        }
    }
}

impl<T> SanitizableWithMapper for Arc<T>
where
    T: SanitizableWithMapper + ?Sized,
{
    fn sanitize_with<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        match Arc::get_mut(self) {
            Some(value) => value.sanitize_with(mapper),
            None => tracing::trace!(
                target_type = type_name::<T>(),
                strong = Arc::strong_count(self),
                weak = Arc::weak_count(self),
                "skipping shared Arc"
            ),
        }
    }
}
