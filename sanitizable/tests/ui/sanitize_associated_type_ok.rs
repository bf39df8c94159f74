use sanitizable::{Sanitize, sanitize_struct};

// The iterator itself implements nothing; only its items are walked.
struct Words;

impl Iterator for Words {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        None
    }
}

#[derive(Sanitize)]
struct Batch<I: Iterator> {
    items: Vec<I::Item>,
    #[not_sanitized]
    source: I,
}

fn main() {
    let mut batch: Batch<Words> = Batch {
        items: vec![" a ".to_string()],
        source: Words,
    };
    sanitize_struct(&mut batch);
    assert_eq!(batch.items, ["a"]);
}
