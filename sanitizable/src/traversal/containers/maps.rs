//! Traversal for map containers (string values only, keys unchanged).

use std::{
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

use crate::{text::TextMapper, traversal::traits::SanitizableWithMapper};

impl<K, V, S> SanitizableWithMapper for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: SanitizableWithMapper,
    S: BuildHasher,
{
    fn sanitize_with<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        // NOTE: keys are never rewritten, and non-string values are not walked.
        for value in self.values_mut() {
            value.sanitize_map_value(mapper);
        }
    }
}

impl<K, V> SanitizableWithMapper for BTreeMap<K, V>
where
    K: Ord,
    V: SanitizableWithMapper,
{
    fn sanitize_with<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        // NOTE: keys are never rewritten, and non-string values are not walked.
        for value in self.values_mut() {
            value.sanitize_map_value(mapper);
        }
    }
}
