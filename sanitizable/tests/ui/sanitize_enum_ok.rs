use sanitizable::{Sanitizable, Sanitize};

#[derive(Sanitize)]
enum Command {
    Say(String),
    Move { x: i32, y: i32 },
    Rename { from: String, to: String },
    Quit,
}

#[derive(Sanitize)]
enum Never {}

fn main() {
    let mut commands = vec![
        Command::Say(" hi ".to_string()),
        Command::Move { x: 1, y: 2 },
        Command::Rename {
            from: " a ".to_string(),
            to: " b ".to_string(),
        },
        Command::Quit,
    ];
    commands.sanitize();
    let _ = std::mem::size_of::<Never>();
}
