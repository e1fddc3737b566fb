use std::path::PathBuf;
use thiserror::Error;

/// Raised only by `try_build`; `build` itself never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Missing required field: '{field}' for {entity}")]
    MissingRequiredField {
        entity: &'static str,
        field: &'static str,
    },
}

impl BuildError {
    pub fn missing_field(entity: &'static str, field: &'static str) -> Self {
        Self::MissingRequiredField { entity, field }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Catalog entry {index} rejected: {source}")]
    Build {
        index: usize,
        #[source]
        source: BuildError,
    },

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn build(index: usize, source: BuildError) -> Self {
        Self::Build { index, source }
    }
}

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
