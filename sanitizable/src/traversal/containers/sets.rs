//! Traversal for set containers.

use std::{
    collections::{BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
    mem,
};

use crate::{text::TextMapper, traversal::traits::SanitizableWithMapper};

impl<T, S> SanitizableWithMapper for HashSet<T, S>
where
    T: SanitizableWithMapper + Hash + Eq,
    S: BuildHasher,
{
    fn sanitize_with<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        // NOTE: cleaning can make distinct elements equal, shrinking the set.
        let drained: Vec<T> = self.drain().collect();
        for mut value in drained {
            value.sanitize_with(mapper);
            self.insert(value);
        }
    }
}

impl<T> SanitizableWithMapper for BTreeSet<T>
where
    T: SanitizableWithMapper + Ord,
{
    fn sanitize_with<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        // NOTE: cleaning can make distinct elements equal, shrinking the set.
        *self = mem::take(self)
            .into_iter()
            .map(|mut value| {
                value.sanitize_with(mapper);
                value
            })
            .collect();
    }
}
