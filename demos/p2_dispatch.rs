//! Pattern 2: Generic Mechanics
//! Example: Static vs Dynamic Dispatch
//!
//! Run with: cargo run --example p2_dispatch

use generics_report::dispatch::{get_value, get_value_dyn, reference_sizes, A, B};

fn main() {
    let a = A { value: 1 };
    let b = B { content: 2 };

    println!("=== Static Dispatch ===");
    println!("get_value(&a) = {}", get_value(&a));
    println!("get_value(&b) = {}", get_value(&b));

    println!("\n=== Dynamic Dispatch ===");
    println!("get_value_dyn(&a) = {}", get_value_dyn(&a));
    println!("get_value_dyn(&b) = {}", get_value_dyn(&b));

    let (thin, fat) = reference_sizes();
    println!("\n&A is {} bytes, &dyn AcquireValue is {} bytes", thin, fat);
}
