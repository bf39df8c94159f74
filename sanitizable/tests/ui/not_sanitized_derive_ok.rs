use sanitizable::{NotSanitized, Sanitize, sanitize_struct};

#[derive(NotSanitized)]
enum Status {
    Active,
    Suspended { reason: String },
}

#[derive(NotSanitized)]
struct Wrapper<T>(T);

#[derive(Sanitize)]
struct Account {
    name: String,
    status: Status,
    opaque: Wrapper<std::fs::File>,
}

fn main() {
    fn assert_sanitizable<T: sanitizable::Sanitizable>() {}
    assert_sanitizable::<Account>();
    assert_sanitizable::<Status>();

    let _ = |account: &mut Account| sanitize_struct(account);
    let _ = Status::Active;
    let _ = Status::Suspended { reason: String::new() };
}
