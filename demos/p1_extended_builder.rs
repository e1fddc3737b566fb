//! Pattern 1: Self-Typed Builders
//! Example: Product and Book Builders Sharing Setters
//!
//! Run with: cargo run --example p1_extended_builder

use generics_report::prelude::*;

fn main() {
    println!("=== Base Builder ===");
    let water = Product::builder().name("Water").price(1000).build();
    println!("{}", water);

    println!("\n=== Specialized Builder ===");
    // `name` and `price` come from the Builder trait, yet `author` still
    // resolves after them: the chain stays typed as BookBuilder.
    let book = Book::builder()
        .name("Deep learning from scratch")
        .author("Seth Weidman")
        .price(3740)
        .build();
    println!("{}", book);
    println!("Author via accessor: {:?}", book.author());

    println!("\n=== Reusing a Builder ===");
    let mut builder = Book::builder();
    builder.name("Draft").author("Anonymous");
    let first = builder.build();
    builder.price(500);
    let second = builder.build();
    println!("First:  {}", first);
    println!("Second: {}", second);

    println!("\n=== Product View of a Book Builder ===");
    let product = builder.as_product_builder().build();
    println!("{}", product);

    println!("\n=== Unset Fields ===");
    println!("{}", Product::builder().build());
    println!("{}", Book::builder().build());

    println!("\n=== Checked Build ===");
    match Book::builder().name("No author yet").try_build() {
        Ok(book) => println!("Built: {}", book),
        Err(err) => println!("Rejected: {}", err),
    }
}
