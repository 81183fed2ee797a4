/// Error types for the viewer
///
/// None of these reach the user as a failure: each one is absorbed at the
/// boundary where it happens (empty catalog, placeholder image, default
/// config) and only surfaces as a log line.

use std::path::PathBuf;
use thiserror::Error;

/// The poster catalog could not be read
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file {path} could not be read: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A poster image could not be turned into pixels
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("no image path given")]
    NoPath,

    #[error("image {path} does not exist")]
    Missing { path: PathBuf },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// The optional config file could not be used
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {path} could not be read: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file {path} is malformed: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
