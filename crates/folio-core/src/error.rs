//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations.
///
/// Rendering never fails; only reading a catalog or config from disk does.
#[derive(Error, Debug)]
pub enum FolioError {
    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog JSON could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    /// Catalog parsed but violates the card input contract
    #[error("Invalid catalog: {0}")]
    Catalog(String),
}

impl From<toml::de::Error> for FolioError {
    fn from(err: toml::de::Error) -> Self {
        FolioError::Config(err.to_string())
    }
}
