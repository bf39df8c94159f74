//! String cleaning: the XSS pipeline and the leaf-policy seam.
//!
//! - **`xss`**: [`sanitize_string`], the four-step scrub applied to every leaf
//! - **`mapper`**: [`TextMapper`], the trait traversal calls on each leaf, and
//!   [`XssScrubber`], the default implementation

mod mapper;
mod xss;

pub use mapper::{TextMapper, XssScrubber};
pub use xss::{MAX_PASSES, SCRIPT_TAG_PATTERN, contains_script_block, sanitize_string};
