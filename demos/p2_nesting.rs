//! Pattern 2: Generic Mechanics
//! Example: Nesting a Generic Type Inside Itself
//!
//! Run with: cargo run --example p2_nesting

use generics_report::nesting::{Layer, Nested};

fn main() {
    println!("=== Depth Known at Compile Time ===");
    let layered: Layer<Layer<Layer<i32>>> = Layer::new(1).nest().nest();
    println!("{:?}", layered);
    println!("innermost: {}", layered.get().get().get());

    println!("\n=== Depth Chosen at Runtime ===");
    let nested = Nested::new(1).nest(5);
    println!("depth: {}", nested.depth());
    println!("at depth 5: {:?}", nested.at_depth(5));
    println!("at depth 2: {:?}", nested.at_depth(2));
}
