//! Field type classification for the derive macro.

/// Returns `true` for field types that can never hold text.
///
/// These fields are skipped entirely, so they add no trait bound to the
/// generated impl. Covers bare primitive names, the unit type, and
/// `PhantomData<_>` (bare or path-qualified).
///
/// Qualified primitive paths (`std::primitive::i32`) and type aliases are not
/// recognized; they are walked through their `SanitizableWithMapper` impl,
/// which is a no-op for primitives anyway.
pub(crate) fn is_textless_type(ty: &syn::Type) -> bool {
    match ty {
        syn::Type::Tuple(tuple) => tuple.elems.is_empty(),
        syn::Type::Paren(paren) => is_textless_type(&paren.elem),
        syn::Type::Path(path) if path.qself.is_none() => {
            let Some(last) = path.path.segments.last() else {
                return false;
            };
            if last.ident == "PhantomData" {
                return matches!(last.arguments, syn::PathArguments::AngleBracketed(_));
            }
            path.path.leading_colon.is_none()
                && path.path.segments.len() == 1
                && last.arguments.is_empty()
                && is_primitive_name(&last.ident.to_string())
        }
        _ => false,
    }
}

fn is_primitive_name(name: &str) -> bool {
    matches!(
        name,
        "i8" | "i16"
            | "i32"
            | "i64"
            | "i128"
            | "isize"
            | "u8"
            | "u16"
            | "u32"
            | "u64"
            | "u128"
            | "usize"
            | "f32"
            | "f64"
            | "bool"
            | "char"
    )
}
