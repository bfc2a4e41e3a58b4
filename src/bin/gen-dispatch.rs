use relates_gen::{render_enum_dispatch, TYPES};

// Prints the enum_dispatch! macro that spatial-join checks in; the type
// registry is closed, so this only needs rerunning when it changes.
fn main() {
    print!("{}", render_enum_dispatch(&TYPES));
}
