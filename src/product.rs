use serde::Serialize;
use std::fmt::{self, Display};
use tracing::debug;

use crate::builder::Builder;

/// A product with a name and a price. Only a builder can create one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Product {
    name: Option<String>,
    price: i32,
}

impl Product {
    pub fn builder() -> ProductBuilder {
        ProductBuilder::new()
    }

    /// `None` when the builder never received a name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn price(&self) -> i32 {
        self.price
    }

    fn from_builder(builder: &ProductBuilder) -> Self {
        Product {
            name: builder.name.clone(),
            price: builder.price,
        }
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product{{name='{}', price='{}'}}",
            or_null(self.name()),
            self.price
        )
    }
}

// Unset text fields render as `null`.
pub(crate) fn or_null(value: Option<&str>) -> &str {
    value.unwrap_or("null")
}

/// Mutable accumulator for [`Product`] fields.
///
/// Setters come from [`Builder`] and take `&mut self`, so one builder can
/// be reused: every `build` is an independent snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use = "a builder does nothing unless you call `.build()`"]
pub struct ProductBuilder {
    pub(crate) name: Option<String>,
    pub(crate) price: i32,
}

impl ProductBuilder {
    pub fn new() -> Self {
        ProductBuilder {
            name: None,
            price: 0,
        }
    }
}

impl Builder for ProductBuilder {
    type Output = Product;

    const ENTITY: &'static str = "Product";

    fn product_builder(&self) -> &ProductBuilder {
        self
    }

    fn product_builder_mut(&mut self) -> &mut ProductBuilder {
        self
    }

    fn build(&self) -> Product {
        let product = Product::from_builder(self);
        debug!(name = ?product.name, price = product.price, "built product");
        product
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_build_water() {
        let product = Product::builder().name("Water").price(1000).build();
        assert_eq!(product.name(), Some("Water"));
        assert_eq!(product.price(), 1000);
        assert_eq!(product.to_string(), "Product{name='Water', price='1000'}");
    }

    #[test]
    fn test_setter_order_is_free() {
        let a = Product::builder().name("Tea").price(5).build();
        let b = Product::builder().price(5).name("Tea").build();
        assert_eq!(a, b);
    }

    #[test]
    fn test_last_write_wins() {
        let product = Product::builder().name("A").name("B").price(1).price(2).build();
        assert_eq!(product.name(), Some("B"));
        assert_eq!(product.price(), 2);
    }

    #[test]
    fn test_unset_fields_default() {
        let product = Product::builder().build();
        assert_eq!(product.name(), None);
        assert_eq!(product.price(), 0);
        assert_eq!(product.to_string(), "Product{name='null', price='0'}");
    }

    #[test]
    fn test_no_validation_on_build() {
        let product = Product::builder().name("").price(-40).build();
        assert_eq!(product.name(), Some(""));
        assert_eq!(product.price(), -40);
    }

    #[test]
    fn test_builds_are_snapshots() {
        let mut builder = Product::builder();
        builder.name("Water").price(1000);
        let first = builder.build();

        builder.price(1200);
        let second = builder.build();

        assert_eq!(first.price(), 1000);
        assert_eq!(second.price(), 1200);
        assert_eq!(first.name(), second.name());
    }

    #[test]
    fn test_structural_equality() {
        use std::collections::HashSet;

        let a = Product::builder().name("Salt").price(3).build();
        let b = Product::builder().price(3).name("Salt").build();
        let set: HashSet<Product> = [a.clone(), b].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert!(set.contains(&a));
    }

    #[test]
    fn test_serializes_fields() {
        let product = Product::builder().name("Water").price(1000).build();
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Water", "price": 1000}));
    }

    proptest! {
        #[test]
        fn test_build_snapshot_reflects_builder(name in ".*", price in any::<i32>(), later in any::<i32>()) {
            let mut builder = Product::builder();
            builder.name(name.clone()).price(price);
            let product = builder.build();
            builder.price(later);

            prop_assert_eq!(product.name(), Some(name.as_str()));
            prop_assert_eq!(product.price(), price);
        }
    }
}
