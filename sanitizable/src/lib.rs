//! In-place XSS sanitization for structured request data.
//!
//! This crate separates:
//! - **Leaf cleaning**: what happens to one string (`sanitize_string`, the
//!   `TextMapper` seam).
//! - **Traversal**: how a value graph is walked to reach every string leaf
//!   (`SanitizableWithMapper`, derived with `#[derive(Sanitize)]`).
//!
//! The derive macro walks your data through an exclusive borrow and rewrites
//! each reachable string when you call `sanitize()` or `sanitize_struct`.
//!
//! What this crate does:
//! - removes script blocks, trims, decodes HTML entities, drops NUL bytes
//! - walks records, enums, std containers and `serde_json::Value`
//! - provides a request pipeline (parse, sanitize, validate, store) behind the
//!   `http` feature
//!
//! What it does not do:
//! - strip arbitrary HTML tags or attribute handlers
//! - encode output for a rendering context
//! - perform I/O
//!
//! The `Sanitize` and `NotSanitized` derive macros live in
//! `sanitizable-derive` and are re-exported from this crate.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use sanitizable_derive::{NotSanitized, Sanitize};

#[allow(unused_extern_crates)]
extern crate self as sanitizable;

// Module declarations
#[cfg(feature = "http")]
pub mod http;
mod text;
mod traversal;

// Re-exports from text module
pub use text::{
    MAX_PASSES, SCRIPT_TAG_PATTERN, TextMapper, XssScrubber, contains_script_block, sanitize_string,
};
// Re-exports from traversal module
pub use traversal::{
    Sanitizable, SanitizableWithMapper, Unsanitized, sanitize_struct, sanitize_struct_with,
};
