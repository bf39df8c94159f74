//! Struct-specific `SanitizableWithMapper` derivation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataStruct, Result};

use crate::{
    fields::{FieldWalk, walk_fields},
    generics::GenericUsage,
};

/// Generates the traversal body for a struct.
///
/// `self` is `&mut Self`, so the destructured bindings are exclusive borrows of
/// each field and every nested string is rewritten in place.
pub(crate) fn derive_struct(
    data: &DataStruct,
    generics: &syn::Generics,
    used_generics: &mut GenericUsage,
) -> Result<TokenStream> {
    let FieldWalk { pattern, calls } = walk_fields(&data.fields, generics, used_generics)?;
    if calls.is_empty() {
        return Ok(TokenStream::new());
    }
    Ok(quote! {
        let Self #pattern = self;
        #(#calls)*
    })
}
