//! Parsing of the `#[not_sanitized]` field attribute.
//!
//! Fields are walked unless they opt out. This module turns field attributes
//! into a traversal decision and reports malformed forms with spans.

use syn::{Attribute, Meta, Result, spanned::Spanned};

/// How the derive treats a single field.
///
/// | Attribute          | Strategy | Behavior                                  |
/// |--------------------|----------|-------------------------------------------|
/// | None               | `Walk`   | Call `sanitize_with` on the field         |
/// | `#[not_sanitized]` | `Skip`   | Leave the field untouched, no trait bound |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Strategy {
    Walk,
    Skip,
}

pub(crate) fn parse_field_strategy(attrs: &[Attribute]) -> Result<Strategy> {
    let mut strategy = Strategy::Walk;
    let mut seen = false;

    for attr in attrs {
        if !attr.path().is_ident("not_sanitized") {
            continue;
        }
        if !matches!(attr.meta, Meta::Path(_)) {
            return Err(syn::Error::new(
                attr.span(),
                "#[not_sanitized] does not take arguments",
            ));
        }
        if seen {
            return Err(syn::Error::new(
                attr.span(),
                "duplicate #[not_sanitized] attribute on the same field",
            ));
        }
        seen = true;
        strategy = Strategy::Skip;
    }

    Ok(strategy)
}

/// Returns the first `#[not_sanitized]` attribute, if any.
///
/// Used by `NotSanitized`, where the attribute is redundant.
pub(crate) fn find_not_sanitized(attrs: &[Attribute]) -> Option<&Attribute> {
    attrs
        .iter()
        .find(|attr| attr.path().is_ident("not_sanitized"))
}
