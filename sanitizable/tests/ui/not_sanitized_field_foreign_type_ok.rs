use sanitizable::{Sanitize, sanitize_struct};

struct ForeignHandle {
    _fd: i32,
}

#[derive(Sanitize)]
struct Connection {
    name: String,
    #[not_sanitized]
    handle: ForeignHandle,
}

fn main() {
    let mut connection = Connection {
        name: " db ".to_string(),
        handle: ForeignHandle { _fd: 3 },
    };
    sanitize_struct(&mut connection);
    let _ = connection.handle;
}
