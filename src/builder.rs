//! The shared builder surface.
//!
//! Setters are written once here and return `&mut Self`, so a call made on a
//! [`BookBuilder`](crate::BookBuilder) hands back a `&mut BookBuilder` and the
//! chain can continue with book-only setters. Each implementor only exposes
//! the [`ProductBuilder`] state it embeds.

use crate::error::BuildError;
use crate::product::ProductBuilder;

pub trait Builder {
    /// The entity produced by [`Builder::build`].
    type Output;

    /// Entity name used in validation errors.
    const ENTITY: &'static str;

    fn product_builder(&self) -> &ProductBuilder;

    fn product_builder_mut(&mut self) -> &mut ProductBuilder;

    fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.product_builder_mut().name = Some(name.into());
        self
    }

    fn price(&mut self, price: i32) -> &mut Self {
        self.product_builder_mut().price = price;
        self
    }

    /// Snapshots the pending fields into a new entity. Never fails.
    fn build(&self) -> Self::Output;

    /// Like [`Builder::build`], but rejects unset required text fields.
    /// Empty strings count as set.
    fn try_build(&self) -> Result<Self::Output, BuildError> {
        if self.product_builder().name.is_none() {
            return Err(BuildError::missing_field(Self::ENTITY, "name"));
        }
        Ok(self.build())
    }
}

/// Builds through any builder; the result type follows the builder's `Output`.
pub fn build_with<B: Builder>(builder: &B) -> B::Output {
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Book, Product};

    #[test]
    fn test_build_with_follows_output_type() {
        let mut builder = Book::builder();
        builder.name("Rust").author("Ferris");
        let book: Book = build_with(&builder);
        assert_eq!(book.author(), Some("Ferris"));

        let product: Product = build_with(builder.as_product_builder());
        assert_eq!(product.name(), Some("Rust"));
    }

    #[test]
    fn test_try_build_requires_name() {
        let err = Product::builder().price(10).try_build().unwrap_err();
        assert_eq!(err, BuildError::missing_field("Product", "name"));
    }

    #[test]
    fn test_try_build_accepts_empty_name() {
        let product = Product::builder().name("").try_build().unwrap();
        assert_eq!(product.name(), Some(""));
        assert_eq!(product.price(), 0);
    }
}
