//! String leaves: the only nodes traversal rewrites.

use std::borrow::Cow;

use crate::{text::TextMapper, traversal::traits::SanitizableWithMapper};

impl SanitizableWithMapper for String {
    fn sanitize_with<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        mapper.map_in_place(self);
    }

    fn sanitize_map_value<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        mapper.map_in_place(self);
    }
}

impl SanitizableWithMapper for Box<str> {
    fn sanitize_with<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        let mapped = mapper.map_text(self);
        if *mapped != **self {
            *self = mapped.into_boxed_str();
        }
    }

    fn sanitize_map_value<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        self.sanitize_with(mapper);
    }
}

impl SanitizableWithMapper for Cow<'_, str> {
    fn sanitize_with<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        // Borrowed text only becomes owned when cleaning changes it.
        let mapped = mapper.map_text(self);
        if *mapped != **self {
            *self = Cow::Owned(mapped);
        }
    }

    fn sanitize_map_value<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        self.sanitize_with(mapper);
    }
}
