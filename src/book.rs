use serde::Serialize;
use std::fmt::{self, Display};
use tracing::debug;

use crate::builder::Builder;
use crate::error::BuildError;
use crate::product::{or_null, Product, ProductBuilder};

/// A [`Product`] with an author.
///
/// The product part is embedded by value; the book adds fields after it and
/// never replaces the product's own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Book {
    #[serde(flatten)]
    product: Product,
    author: Option<String>,
}

impl Book {
    pub fn builder() -> BookBuilder {
        BookBuilder::new()
    }

    pub fn name(&self) -> Option<&str> {
        self.product.name()
    }

    pub fn price(&self) -> i32 {
        self.product.price()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn as_product(&self) -> &Product {
        &self.product
    }

    pub fn into_product(self) -> Product {
        self.product
    }
}

impl AsRef<Product> for Book {
    fn as_ref(&self) -> &Product {
        &self.product
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book{{name='{}', price='{}', author='{}'}}",
            or_null(self.name()),
            self.price(),
            or_null(self.author())
        )
    }
}

/// Builder for [`Book`]: the product fields plus `author`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use = "a builder does nothing unless you call `.build()`"]
pub struct BookBuilder {
    base: ProductBuilder,
    author: Option<String>,
}

impl BookBuilder {
    pub fn new() -> Self {
        BookBuilder {
            base: ProductBuilder::new(),
            author: None,
        }
    }

    pub fn author(&mut self, author: impl Into<String>) -> &mut Self {
        self.author = Some(author.into());
        self
    }

    /// The product-only view of this builder. Building through it yields a
    /// plain [`Product`].
    pub fn as_product_builder(&self) -> &ProductBuilder {
        &self.base
    }
}

impl Builder for BookBuilder {
    type Output = Book;

    const ENTITY: &'static str = "Book";

    fn product_builder(&self) -> &ProductBuilder {
        &self.base
    }

    fn product_builder_mut(&mut self) -> &mut ProductBuilder {
        &mut self.base
    }

    fn build(&self) -> Book {
        let book = Book {
            product: self.base.build(),
            author: self.author.clone(),
        };
        debug!(author = ?book.author, "built book");
        book
    }

    fn try_build(&self) -> Result<Book, BuildError> {
        if self.base.name.is_none() {
            return Err(BuildError::missing_field(Self::ENTITY, "name"));
        }
        if self.author.is_none() {
            return Err(BuildError::missing_field(Self::ENTITY, "author"));
        }
        Ok(self.build())
    }
}

impl From<BookBuilder> for ProductBuilder {
    fn from(builder: BookBuilder) -> Self {
        builder.base
    }
}
