//! Escape hatch for values that must keep their exact text.

use std::ops::{Deref, DerefMut};

use crate::{text::TextMapper, traversal::traits::SanitizableWithMapper};

/// Wrapper that opts a value out of sanitization.
///
/// Traversal stops at this wrapper, so the inner value is never rewritten and
/// does not need to implement [`SanitizableWithMapper`]. This is the type-level
/// equivalent of `#[not_sanitized]`, useful inside containers
/// (`Vec<Unsanitized<String>>`) where a field attribute cannot reach.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "http", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "http", serde(transparent))]
pub struct Unsanitized<T>(pub T);

impl<T> Unsanitized<T> {
    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Unsanitized<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Deref for Unsanitized<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Unsanitized<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> SanitizableWithMapper for Unsanitized<T> {
    fn sanitize_with<M: TextMapper + ?Sized>(&mut self, _mapper: &M) {}
}
