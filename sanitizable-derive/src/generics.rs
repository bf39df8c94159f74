//! Trait bounds for generic parameters reached by walked fields.
//!
//! Only type parameters that actually appear in a walked field get a
//! `SanitizableWithMapper` bound. Parameters that only show up inside
//! `PhantomData<_>` or in `#[not_sanitized]` fields stay unbounded, so
//! `struct TypedId<T> { id: String, _marker: PhantomData<T> }` works for any `T`.

use syn::{
    Ident, parse_quote,
    visit::{self, Visit},
};

use crate::crate_path;

/// Generic usage collected from walked fields.
///
/// `params` are bare type parameters (`T`, `Vec<T>`). `projections` are
/// associated types of a parameter (`T::Item`, `<T as Trait>::Out`); those are
/// bounded themselves, since a bound on `T` says nothing about `T::Item`.
#[derive(Default)]
pub(crate) struct GenericUsage {
    pub(crate) params: Vec<Ident>,
    pub(crate) projections: Vec<syn::Type>,
}

struct GenericCollector<'a> {
    generics: &'a syn::Generics,
    found: &'a mut GenericUsage,
}

impl GenericCollector<'_> {
    fn is_param(&self, ident: &Ident) -> bool {
        self.generics.type_params().any(|param| param.ident == *ident)
    }

    fn is_projection(&self, type_path: &syn::TypePath) -> bool {
        match &type_path.qself {
            Some(qself) => {
                let mut inner = GenericUsage::default();
                GenericCollector {
                    generics: self.generics,
                    found: &mut inner,
                }
                .visit_type(&qself.ty);
                !inner.params.is_empty() || !inner.projections.is_empty()
            }
            None => {
                type_path.path.leading_colon.is_none()
                    && type_path.path.segments.len() > 1
                    && self.is_param(&type_path.path.segments[0].ident)
            }
        }
    }
}

impl<'ast> Visit<'ast> for GenericCollector<'_> {
    fn visit_type_path(&mut self, type_path: &'ast syn::TypePath) {
        if self.is_projection(type_path) {
            let ty = syn::Type::Path(type_path.clone());
            if !self.found.projections.contains(&ty) {
                self.found.projections.push(ty);
            }
            return;
        }
        visit::visit_type_path(self, type_path);
    }

    fn visit_path(&mut self, path: &'ast syn::Path) {
        if path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "PhantomData")
        {
            return;
        }
        if let Some(first) = path.segments.first() {
            let ident = &first.ident;
            if self.is_param(ident) && !self.found.params.contains(ident) {
                self.found.params.push(ident.clone());
            }
        }
        visit::visit_path(self, path);
    }
}

/// Records every type parameter of `generics`, and every associated type of
/// one, that appears in `ty`.
pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    found: &mut GenericUsage,
) {
    GenericCollector { generics, found }.visit_type(ty);
}

/// Adds `SanitizableWithMapper` bounds to the collected parameters and
/// where-clause predicates for the collected projections.
pub(crate) fn add_traversal_bounds(
    mut generics: syn::Generics,
    used: &GenericUsage,
) -> syn::Generics {
    let trait_path = crate_path("SanitizableWithMapper");
    for param in generics.type_params_mut() {
        if used.params.contains(&param.ident) {
            param.bounds.push(parse_quote!(#trait_path));
        }
    }
    if !used.projections.is_empty() {
        let where_clause = generics.make_where_clause();
        for ty in &used.projections {
            where_clause
                .predicates
                .push(parse_quote!(#ty: #trait_path));
        }
    }
    generics
}
