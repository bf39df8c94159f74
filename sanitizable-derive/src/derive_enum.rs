//! Enum-specific `SanitizableWithMapper` derivation.
//!
//! Only the active variant is walked. Unit variants match and do nothing.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataEnum, Result};

use crate::{
    fields::{FieldWalk, walk_fields},
    generics::GenericUsage,
};

pub(crate) fn derive_enum(
    data: &DataEnum,
    generics: &syn::Generics,
    used_generics: &mut GenericUsage,
) -> Result<TokenStream> {
    if data.variants.is_empty() {
        return Ok(quote! { match *self {} });
    }

    let mut arms = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        let variant_ident = &variant.ident;
        let FieldWalk { pattern, calls } = walk_fields(&variant.fields, generics, used_generics)?;
        arms.push(quote! {
            Self::#variant_ident #pattern => {
                #(#calls)*
            }
        });
    }

    Ok(quote! {
        match self {
            #(#arms)*
        }
    })
}
