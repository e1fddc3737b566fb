//! Pattern 2: Generic Mechanics
//! Example: Trait Dispatch Instead of Overloads
//!
//! Run with: cargo run --example p2_overload

use generics_report::overload::list_to_string;

fn main() {
    println!("=== Integers ===");
    println!("{}", list_to_string(&[1, 2, 3]));

    println!("\n=== Strings ===");
    println!("{}", list_to_string(&["a", "b", "c"]));
}
