use std::collections::HashMap;

use sanitizable::{Sanitizable, Sanitize};

#[derive(Sanitize)]
struct Inner {
    text: String,
}

#[derive(Sanitize)]
struct Outer {
    inner: Option<Box<Inner>>,
    list: Vec<Inner>,
    labels: HashMap<String, String>,
    count: usize,
}

fn main() {
    let mut outer = Outer {
        inner: None,
        list: Vec::new(),
        labels: HashMap::new(),
        count: 0,
    };
    outer.sanitize();
}
