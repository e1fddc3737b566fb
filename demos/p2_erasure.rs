//! Pattern 2: Generic Mechanics
//! Example: Field Types After Monomorphization
//!
//! Run with: cargo run --example p2_erasure

use generics_report::erasure::{NumberWrapper, Wrapper};

fn main() {
    println!("=== Unbounded Parameter ===");
    let mut wrapper = Wrapper::new(String::new());
    wrapper.set("abc".to_string());
    println!("value field: {}", wrapper.field_type_name());

    println!("\n=== Bounded Parameter ===");
    let mut number = NumberWrapper::new(0.0_f64);
    number.set(123.0);
    println!("value field: {}", number.field_type_name());

    println!("\nEach instantiation keeps its argument; nothing is erased to the bound.");
}
