//! # Generics Report
//!
//! Examples for generics-related language mechanics, centered on a builder
//! whose inherited setters keep the concrete builder type.
//!
//! ## Patterns Covered
//!
//! 1. **Self-Typed Builders**
//!    - Setters declared once on the [`Builder`] trait, returning `&mut Self`
//!    - [`Book`] embeds [`Product`]; [`BookBuilder`] embeds [`ProductBuilder`]
//!    - `build` is total; `try_build` adds required-field checks
//!
//! 2. **Catalogs**
//!    - TOML entries materialized through the builders
//!    - Text or JSON reports
//!
//! 3. **Generic Mechanics**
//!    - Monomorphized field types (`erasure`)
//!    - Per-type behavior through a trait instead of overloads (`overload`)
//!    - Static and runtime nesting (`nesting`)
//!    - Static vs dynamic dispatch (`dispatch`)
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --example p1_extended_builder
//! cargo run --example p2_erasure
//! cargo run --example p2_overload
//! cargo run --example p2_nesting
//! cargo run --example p2_dispatch
//! cargo run --bin report -- --config demos/catalog.toml --format json
//! ```

pub mod book;
pub mod builder;
pub mod catalog;
pub mod dispatch;
pub mod erasure;
pub mod error;
pub mod nesting;
pub mod overload;
pub mod product;

pub use book::{Book, BookBuilder};
pub use builder::Builder;
pub use catalog::{CatalogEntry, Item, OutputFormat, Report, ReportConfig};
pub use error::{BuildError, ConfigError};
pub use product::{Product, ProductBuilder};

pub mod prelude {
    pub use crate::book::{Book, BookBuilder};
    pub use crate::builder::Builder;
    pub use crate::product::{Product, ProductBuilder};
}
