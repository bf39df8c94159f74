//! Derive macros for `sanitizable`.
//!
//! This crate generates the traversal code behind `#[derive(Sanitize)]` and
//! `#[derive(NotSanitized)]`. It:
//! - reads `#[not_sanitized]` field attributes
//! - emits `SanitizableWithMapper` implementations that walk every field
//!   through an exclusive borrow
//!
//! It does **not** clean text. The string pipeline lives in the main
//! `sanitizable` crate and is applied at runtime through a `TextMapper`.

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
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Result, parse_macro_input, spanned::Spanned};

mod derive_enum;
mod derive_struct;
mod fields;
mod generics;
mod strategy;
mod types;

use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::{GenericUsage, add_traversal_bounds};
use strategy::find_not_sanitized;

/// Derives `sanitizable::SanitizableWithMapper` for structs and enums.
///
/// Every field is walked by default, so a single `sanitize()` call cleans every
/// string reachable from the value.
///
/// # Field Attributes
///
/// - **No annotation**: the field is walked with `SanitizableWithMapper`.
///   Bare primitives (`i32`, `bool`, `char`, ...) and `PhantomData<_>` are
///   skipped without requiring an impl.
/// - `#[not_sanitized]`: the field is left untouched and its type need not
///   implement `SanitizableWithMapper`. Use this for pre-rendered markup or
///   foreign types.
///
/// Generic parameters used by walked fields receive a
/// `SanitizableWithMapper` bound. Unions are rejected at compile time.
///
/// # Example
///
/// ```ignore
/// use sanitizable::{Sanitizable, Sanitize};
///
/// #[derive(Sanitize)]
/// struct Comment {
///     author: String,
///     body: String,
///     #[not_sanitized]
///     rendered: String,
///     votes: i64,
/// }
/// ```
#[proc_macro_derive(Sanitize, attributes(not_sanitized))]
pub fn derive_sanitize(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Derives a no-op `sanitizable::SanitizableWithMapper` implementation.
///
/// Use this for types that carry no text (status enums, id newtypes) but must
/// satisfy `Sanitizable` bounds or sit inside `Sanitize` types.
///
/// `#[not_sanitized]` attributes are rejected: the whole type is already
/// passed through. Unions are rejected at compile time.
#[proc_macro_derive(NotSanitized, attributes(not_sanitized))]
pub fn derive_not_sanitized(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_not_sanitized(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        ..
    } = input;

    let mut used_generics = GenericUsage::default();
    let body = match &data {
        Data::Struct(data) => derive_struct(data, &generics, &mut used_generics)?,
        Data::Enum(data) => derive_enum(data, &generics, &mut used_generics)?,
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Sanitize` cannot be derived for unions",
            ));
        }
    };

    let crate_root = crate_root();
    let bounded = add_traversal_bounds(generics, &used_generics);
    let (impl_generics, ty_generics, where_clause) = bounded.split_for_impl();

    Ok(quote! {
        impl #impl_generics #crate_root::SanitizableWithMapper for #ident #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn sanitize_with<M: #crate_root::TextMapper + ?Sized>(&mut self, mapper: &M) {
                #body
            }
        }
    })
}

fn expand_not_sanitized(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let redundant = |attr: &syn::Attribute| {
        syn::Error::new(
            attr.span(),
            "`#[not_sanitized]` is not needed on `NotSanitized` types (the entire type is already passed through)",
        )
    };

    if let Some(attr) = find_not_sanitized(&attrs) {
        return Err(redundant(attr));
    }
    match &data {
        Data::Struct(data) => {
            for field in &data.fields {
                if let Some(attr) = find_not_sanitized(&field.attrs) {
                    return Err(redundant(attr));
                }
            }
        }
        Data::Enum(data) => {
            for field in data.variants.iter().flat_map(|variant| &variant.fields) {
                if let Some(attr) = find_not_sanitized(&field.attrs) {
                    return Err(redundant(attr));
                }
            }
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`NotSanitized` cannot be derived for unions",
            ));
        }
    }

    let crate_root = crate_root();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics #crate_root::SanitizableWithMapper for #ident #ty_generics #where_clause {
            fn sanitize_with<M: #crate_root::TextMapper + ?Sized>(&mut self, _mapper: &M) {}
        }
    })
}

/// Returns the token stream to reference the sanitizable crate root.
///
/// Handles crate renaming (e.g., `scrub = { package = "sanitizable", ... }`)
/// and internal usage (when the derive is used inside the sanitizable crate).
fn crate_root() -> TokenStream {
    match crate_name("sanitizable") {
        // NOTE: `crate` would point at the doctest crate when expanding inside
        // sanitizable's doctests. The runtime crate declares
        // `extern crate self as sanitizable`, so the absolute path resolves
        // from its own modules as well.
        Ok(FoundCrate::Itself) => quote! { ::sanitizable },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::sanitizable },
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_ident = format_ident!("{}", item);
    quote! { #root::#item_ident }
}
