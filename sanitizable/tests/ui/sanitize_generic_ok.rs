use std::marker::PhantomData;

use sanitizable::{Sanitize, sanitize_struct};

struct Opaque;

#[derive(Sanitize)]
struct Page<T, Tag> {
    items: Vec<T>,
    _tag: PhantomData<Tag>,
}

fn main() {
    // `Opaque` implements nothing; it is only used behind `PhantomData`.
    let mut page: Page<String, Opaque> = Page {
        items: vec![" a ".to_string()],
        _tag: PhantomData,
    };
    sanitize_struct(&mut page);
}
