//! Core traits for walking a value graph and cleaning its string leaves.
//!
//! - [`SanitizableWithMapper`]: per-type traversal, derived or implemented for std types
//! - [`Sanitizable`]: user-facing `.sanitize()` method
//! - [`sanitize_struct`]: free-function entrypoint

use crate::text::{TextMapper, XssScrubber};

// =============================================================================
// SanitizableWithMapper - per-type traversal
// =============================================================================

/// A type that participates in sanitization traversal.
///
/// Implemented by types that derive `Sanitize` or `NotSanitized`, and by
/// standard library types: strings rewrite themselves, containers forward to
/// their contents, scalars do nothing.
///
/// Traversal always holds an exclusive borrow of the node it visits, so every
/// reachable string is rewritten in place. Nodes that cannot be borrowed
/// exclusively (shared references, shared `Rc`/`Arc`, poisoned locks) are
/// skipped and reported at `trace` level.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `SanitizableWithMapper`",
    label = "this type cannot be walked for string leaves",
    note = "use `#[derive(Sanitize)]` on the type definition",
    note = "or mark the field `#[not_sanitized]` to leave it untouched"
)]
pub trait SanitizableWithMapper {
    /// Cleans every string reachable from `self` with `mapper`.
    fn sanitize_with<M: TextMapper + ?Sized>(&mut self, mapper: &M);

    /// Cleans `self` when it is stored as a map value.
    ///
    /// Map entries only clean string values; anything else stored in a map is
    /// left as-is. String leaves override this, every other type keeps the
    /// default no-op.
    #[doc(hidden)]
    fn sanitize_map_value<M: TextMapper + ?Sized>(&mut self, _mapper: &M) {}
}

// =============================================================================
// Sanitizable - user-facing .sanitize() method
// =============================================================================

/// Public entrypoint for sanitization on traversable types.
///
/// Blanket-implemented for every [`SanitizableWithMapper`] type; `sanitize`
/// runs the walk with [`XssScrubber`].
pub trait Sanitizable: SanitizableWithMapper {
    /// Cleans every reachable string in place.
    fn sanitize(&mut self) {
        self.sanitize_with(&XssScrubber);
    }
}

impl<T> Sanitizable for T where T: SanitizableWithMapper + ?Sized {}

/// Recursively sanitizes every reachable string field of `target`.
///
/// The target must be passed by exclusive reference; handing over a value
/// would make the mutation unobservable and does not compile. An absent
/// target is `None` and is left alone.
///
/// ```rust
/// use sanitizable::{Sanitize, sanitize_struct};
///
/// #[derive(Sanitize)]
/// struct Signup {
///     name: String,
///     bio: Option<String>,
///     age: u8,
/// }
///
/// let mut signup = Signup {
///     name: "  Ada<script>steal()</script> ".to_string(),
///     bio: Some("&lt;b&gt;hi&lt;/b&gt;".to_string()),
///     age: 36,
/// };
/// sanitize_struct(&mut signup);
///
/// assert_eq!(signup.name, "Ada");
/// assert_eq!(signup.bio.as_deref(), Some("<b>hi</b>"));
/// assert_eq!(signup.age, 36);
///
/// let mut missing: Option<Signup> = None;
/// sanitize_struct(&mut missing);
/// assert!(missing.is_none());
/// ```
pub fn sanitize_struct<T>(target: &mut T)
where
    T: SanitizableWithMapper + ?Sized,
{
    target.sanitize_with(&XssScrubber);
}

/// Like [`sanitize_struct`], with a caller-supplied leaf policy.
pub fn sanitize_struct_with<T, M>(target: &mut T, mapper: &M)
where
    T: SanitizableWithMapper + ?Sized,
    M: TextMapper + ?Sized,
{
    target.sanitize_with(mapper);
}
