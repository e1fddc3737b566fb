//! TOML catalogs: entries describing products and books, materialized
//! through their builders.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::book::Book;
use crate::builder::Builder;
use crate::error::{BuildError, ConfigError, Result};
use crate::product::Product;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One `[[item]]` table. Absent fields leave the builder default in place.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CatalogEntry {
    Product {
        name: Option<String>,
        price: Option<i32>,
    },
    Book {
        name: Option<String>,
        price: Option<i32>,
        author: Option<String>,
    },
}

impl CatalogEntry {
    /// Drives the matching builder. With `strict`, goes through `try_build`.
    pub fn materialize(&self, strict: bool) -> Result<Item, BuildError> {
        match self {
            CatalogEntry::Product { name, price } => {
                let mut builder = Product::builder();
                apply_product_fields(&mut builder, name, *price);
                finish(&builder, strict).map(Item::Product)
            }
            CatalogEntry::Book {
                name,
                price,
                author,
            } => {
                let mut builder = Book::builder();
                apply_product_fields(&mut builder, name, *price);
                if let Some(author) = author {
                    builder.author(author.as_str());
                }
                finish(&builder, strict).map(Item::Book)
            }
        }
    }
}

fn apply_product_fields<B: Builder>(builder: &mut B, name: &Option<String>, price: Option<i32>) {
    if let Some(name) = name {
        builder.name(name.as_str());
    }
    if let Some(price) = price {
        builder.price(price);
    }
}

fn finish<B: Builder>(builder: &B, strict: bool) -> Result<B::Output, BuildError> {
    if strict {
        builder.try_build()
    } else {
        Ok(builder.build())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Item {
    Product(Product),
    Book(Book),
}

impl Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Product(product) => Display::fmt(product, f),
            Item::Book(book) => Display::fmt(book, f),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub strict: bool,
    #[serde(default, rename = "item")]
    pub items: Vec<CatalogEntry>,
}

impl ReportConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ReportConfig = toml::from_str(content)?;
        debug!(items = config.items.len(), "parsed catalog");
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| ConfigError::io(path, err))?;
        debug!(path = %path.display(), "loading catalog");
        Self::from_toml_str(&content)
    }

    /// Command-line flags win over file values. `strict` can only be
    /// switched on: an absent flag keeps the file's setting.
    pub fn apply_overrides(&mut self, format: Option<OutputFormat>, strict: bool) {
        if let Some(format) = format {
            self.format = format;
        }
        self.strict |= strict;
    }
}

impl Default for ReportConfig {
    /// The two entities of the builder walkthrough.
    fn default() -> Self {
        ReportConfig {
            format: OutputFormat::Text,
            strict: false,
            items: vec![
                CatalogEntry::Product {
                    name: Some("Water".to_string()),
                    price: Some(1000),
                },
                CatalogEntry::Book {
                    name: Some("Deep learning from scratch".to_string()),
                    price: Some(3740),
                    author: Some("Seth Weidman".to_string()),
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    items: Vec<Item>,
}

impl Report {
    /// Materializes every entry; the first rejected entry aborts the report.
    pub fn from_config(config: &ReportConfig) -> Result<Self> {
        let items = config
            .items
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                entry.materialize(config.strict).map_err(|err| {
                    warn!(index, error = %err, "catalog entry rejected");
                    ConfigError::build(index, err)
                })
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(count = items.len(), "materialized catalog");
        Ok(Report { items })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self
                .items
                .iter()
                .map(Item::to_string)
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&self.items)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
format = "json"
strict = false

[[item]]
kind = "product"
name = "Water"
price = 1000

[[item]]
kind = "book"
name = "Deep learning from scratch"
price = 3740
author = "Seth Weidman"
"#;

    #[test]
    fn test_parse_sample() {
        let config = ReportConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.strict);
        assert_eq!(config.items, ReportConfig::default().items);
    }

    #[test]
    fn test_default_report_text() {
        let report = Report::from_config(&ReportConfig::default()).unwrap();
        assert_eq!(
            report.render(OutputFormat::Text).unwrap(),
            "Product{name='Water', price='1000'}\n\
             Book{name='Deep learning from scratch', price='3740', author='Seth Weidman'}"
        );
    }

    #[test]
    fn test_report_json_is_tagged() {
        let report = Report::from_config(&ReportConfig::default()).unwrap();
        let rendered = report.render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value[0]["kind"], "product");
        assert_eq!(value[0]["price"], 1000);
        assert_eq!(value[1]["kind"], "book");
        assert_eq!(value[1]["author"], "Seth Weidman");
    }

    #[test]
    fn test_missing_fields_keep_defaults() {
        let config = ReportConfig::from_toml_str("[[item]]\nkind = \"book\"\nprice = -5\n").unwrap();
        assert_eq!(config.format, OutputFormat::Text);

        let report = Report::from_config(&config).unwrap();
        match &report.items()[0] {
            Item::Book(book) => {
                assert_eq!(book.name(), None);
                assert_eq!(book.author(), None);
                assert_eq!(book.price(), -5);
            }
            other => panic!("expected a book, got {other:?}"),
        }
    }

    #[test]
    fn test_strict_rejects_missing_author() {
        let config = ReportConfig::from_toml_str(
            "strict = true\n\n[[item]]\nkind = \"product\"\nname = \"Ok\"\n\n[[item]]\nkind = \"book\"\nname = \"No author\"\n",
        )
        .unwrap();

        let err = Report::from_config(&config).unwrap_err();
        match err {
            ConfigError::Build { index, source } => {
                assert_eq!(index, 1);
                assert_eq!(source, BuildError::missing_field("Book", "author"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_kind_fails_to_parse() {
        let err = ReportConfig::from_toml_str("[[item]]\nkind = \"magazine\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = ReportConfig::load(file.path()).unwrap();
        assert_eq!(config.items.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ReportConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_format_flag_overrides_file() {
        let mut config = ReportConfig::from_toml_str(SAMPLE).unwrap();
        config.apply_overrides(Some(OutputFormat::Text), false);
        assert_eq!(config.format, OutputFormat::Text);

        let mut config = ReportConfig::default();
        config.apply_overrides(Some(OutputFormat::Json), false);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_absent_format_flag_keeps_file() {
        let mut config = ReportConfig::from_toml_str(SAMPLE).unwrap();
        config.apply_overrides(None, false);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.strict);
    }

    #[test]
    fn test_strict_flag_turns_strict_on() {
        let mut config = ReportConfig::from_toml_str(SAMPLE).unwrap();
        config.apply_overrides(None, true);
        assert!(config.strict);
    }

    #[test]
    fn test_file_strict_survives_absent_flag() {
        let mut config = ReportConfig::from_toml_str("strict = true\n").unwrap();
        config.apply_overrides(Some(OutputFormat::Text), false);
        assert!(config.strict);
        assert_eq!(config.format, OutputFormat::Text);
    }
}
