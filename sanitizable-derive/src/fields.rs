//! Per-field traversal shared by struct and enum derivation.

use proc_macro2::TokenStream;
use quote::{format_ident, quote, quote_spanned};
use syn::{Fields, Result, spanned::Spanned};

use crate::{
    crate_path,
    generics::{GenericUsage, collect_generics_from_type},
    strategy::{Strategy, parse_field_strategy},
    types::is_textless_type,
};

/// Destructuring pattern plus the calls that walk the bound fields.
///
/// The pattern binds only walked fields; everything else is `_` or `..`, so
/// skipped fields need no trait impl and produce no unused bindings.
pub(crate) struct FieldWalk {
    pub(crate) pattern: TokenStream,
    pub(crate) calls: Vec<TokenStream>,
}

pub(crate) fn walk_fields(
    fields: &Fields,
    generics: &syn::Generics,
    used_generics: &mut GenericUsage,
) -> Result<FieldWalk> {
    let trait_path = crate_path("SanitizableWithMapper");
    let mut calls = Vec::new();

    let pattern = match fields {
        Fields::Named(named) => {
            let mut bindings = Vec::new();
            for field in &named.named {
                if !is_walked(field)? {
                    continue;
                }
                let ident = field
                    .ident
                    .clone()
                    .ok_or_else(|| syn::Error::new(field.span(), "named field without a name"))?;
                collect_generics_from_type(&field.ty, generics, used_generics);
                calls.push(quote_spanned! { field.span() =>
                    #trait_path::sanitize_with(#ident, mapper);
                });
                bindings.push(ident);
            }
            quote! { { #(#bindings,)* .. } }
        }
        Fields::Unnamed(unnamed) => {
            let mut slots = Vec::new();
            for (index, field) in unnamed.unnamed.iter().enumerate() {
                if !is_walked(field)? {
                    slots.push(quote! { _ });
                    continue;
                }
                let ident = format_ident!("field_{index}");
                collect_generics_from_type(&field.ty, generics, used_generics);
                calls.push(quote_spanned! { field.span() =>
                    #trait_path::sanitize_with(#ident, mapper);
                });
                slots.push(quote! { #ident });
            }
            quote! { ( #(#slots),* ) }
        }
        Fields::Unit => TokenStream::new(),
    };

    Ok(FieldWalk { pattern, calls })
}

fn is_walked(field: &syn::Field) -> Result<bool> {
    let strategy = parse_field_strategy(&field.attrs)?;
    Ok(strategy == Strategy::Walk && !is_textless_type(&field.ty))
}
