//! `SanitizableWithMapper` implementations for standard library types.
//!
//! Strings are the only leaves that change. Wrappers and sequences forward to
//! their contents through exclusive borrows, so nested strings are rewritten in
//! place without rebuilding the container.
//!
//! ## Map Values Are Cleaned One Level Deep
//!
//! For map containers (`HashMap`, `BTreeMap`, JSON objects), keys are never
//! touched and only values that are themselves strings are cleaned. A map of
//! records, options, or nested maps is left exactly as it was. Callers that
//! need deep cleaning of map values should store a sanitizable wrapper list
//! (`Vec<(K, V)>`) or sanitize the values explicitly.
//!
//! ## Set Elements Are Re-inserted
//!
//! Set elements cannot be mutated in place without breaking hashing or
//! ordering, so sets are drained, cleaned, and rebuilt. Elements that clean
//! to the same text collapse into one.
//!
//! ## Shared Handles Are Skipped
//!
//! `&T`, and `Rc`/`Arc` values with other live handles, cannot be borrowed
//! exclusively. They are left untouched and reported at `trace` level.

mod cells;
mod maps;
mod passthrough;
mod sequences;
mod sets;
mod strings;
mod wrappers;

#[cfg(test)]
mod tests;

// =============================================================================
// Passthrough implementation helper
// =============================================================================

macro_rules! impl_sanitizable_passthrough {
    ($($ty:ty),* $(,)?) => {
        $(
            impl crate::traversal::traits::SanitizableWithMapper for $ty {
                fn sanitize_with<M: crate::text::TextMapper + ?Sized>(&mut self, _mapper: &M) {}
            }
        )*
    };
}

pub(super) use impl_sanitizable_passthrough;
