//! Leaf policies applied to each string reached by traversal.

use super::xss::sanitize_string;

/// Maps one string leaf to its cleaned form.
///
/// Traversal is written against this trait, so the same derived walk can run
/// a different leaf policy (for example, a stricter scrubber in one service).
/// [`XssScrubber`] is the policy used by [`Sanitizable::sanitize`].
///
/// [`Sanitizable::sanitize`]: crate::Sanitizable::sanitize
pub trait TextMapper {
    /// Returns the cleaned form of `input`.
    fn map_text(&self, input: &str) -> String;

    /// Rewrites `value` in place. The string is only reassigned when the
    /// mapped text differs, so clean input keeps its allocation.
    fn map_in_place(&self, value: &mut String) {
        let mapped = self.map_text(value);
        if mapped != *value {
            *value = mapped;
        }
    }
}

impl<M: TextMapper + ?Sized> TextMapper for &M {
    fn map_text(&self, input: &str) -> String {
        (**self).map_text(input)
    }
}

/// Default leaf policy: [`sanitize_string`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct XssScrubber;

impl TextMapper for XssScrubber {
    fn map_text(&self, input: &str) -> String {
        sanitize_string(input)
    }
}
