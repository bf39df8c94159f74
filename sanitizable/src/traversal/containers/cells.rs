//! Traversal for interior-mutability containers.
//!
//! All of these are reached through `&mut`, so their `get_mut` accessors give
//! exclusive access without locking or runtime borrow checks.

use std::{
    any::type_name,
    cell::{Cell, RefCell},
    sync::{Mutex, RwLock},
};

use crate::{text::TextMapper, traversal::traits::SanitizableWithMapper};

impl<T> SanitizableWithMapper for RefCell<T>
where
    T: SanitizableWithMapper + ?Sized,
{
    fn sanitize_with<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        self.get_mut().sanitize_with(mapper);
    }
}

impl<T> SanitizableWithMapper for Cell<T>
where
    T: SanitizableWithMapper + ?Sized,
{
    fn sanitize_with<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        self.get_mut().sanitize_with(mapper);
    }
}

impl<T> SanitizableWithMapper for Mutex<T>
where
    T: SanitizableWithMapper + ?Sized,
{
    fn sanitize_with<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        match self.get_mut() {
            Ok(value) => value.sanitize_with(mapper),
            Err(_) => tracing::trace!(
                target_type = type_name::<T>(),
                "skipping poisoned Mutex"
            ),
        }
    }
}

impl<T> SanitizableWithMapper for RwLock<T>
where
    T: SanitizableWithMapper + ?Sized,
{
    fn sanitize_with<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        match self.get_mut() {
            Ok(value) => value.sanitize_with(mapper),
            Err(_) => tracing::trace!(
                target_type = type_name::<T>(),
                "skipping poisoned RwLock"
            ),
        }
    }
}
