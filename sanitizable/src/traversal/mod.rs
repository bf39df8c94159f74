//! Sanitization traversal and entrypoints.
//!
//! - **`traits`**: core traits (`SanitizableWithMapper`, `Sanitizable`) and `sanitize_struct`
//! - **`containers`**: implementations for std strings, wrappers, sequences, maps, sets, cells
//! - **`json`**: runtime-shaped traversal of `serde_json::Value`
//! - **`unsanitized`**: the `Unsanitized<T>` escape hatch
//!
//! Text cleaning itself lives in `crate::text`.

mod containers;
#[cfg(feature = "json")]
mod json;
mod traits;
mod unsanitized;

pub use traits::{Sanitizable, SanitizableWithMapper, sanitize_struct, sanitize_struct_with};
pub use unsanitized::Unsanitized;
