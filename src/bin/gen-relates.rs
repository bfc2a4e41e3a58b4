use std::process::exit;

use relates_gen::{group_entries, relates_table, render_impls};

// Prints the Relates trait impl blocks that spatial-join checks in as
// relates_impl.rs. Run with output redirected, then rustfmt the result.
fn main() {
    let table = match relates_table() {
        Ok(table) => table,
        Err(err) => {
            eprintln!("gen-relates: {}", err);
            exit(1);
        }
    };
    print!("{}", render_impls(&group_entries(&table)));
}
