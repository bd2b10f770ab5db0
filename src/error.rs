//! Error type for loading datasets and region tables.
//!
//! The pipeline itself never fails; only reading inputs from disk does.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AtlasError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode event dataset: {0}")]
    Dataset(#[from] simd_json::Error),

    #[error("failed to parse region table: {0}")]
    RegionTable(#[from] toml::de::Error),

    #[error("region {0:?} is declared more than once")]
    DuplicateRegion(String),
}

pub type Result<T> = std::result::Result<T, AtlasError>;
