//! Desktop configuration.
//!
//! Loaded in order of precedence:
//! 1. Command line flags (applied by the binary)
//! 2. Config file (`<config dir>/folio/config.toml`)
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Result;

/// Settings for the desktop window and catalog source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Catalog JSON path; the built-in sample catalog when unset
    pub catalog: Option<PathBuf>,
    /// Window title
    pub title: String,
    pub window_width: f64,
    pub window_height: f64,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            title: "Folio".to_string(),
            window_width: 1100.0,
            window_height: 900.0,
        }
    }
}

impl FolioConfig {
    /// Default config file location (`~/.config/folio/config.toml` on Linux)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
    }

    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(toml::from_str(toml)?)
    }

    /// Read a config file. A missing file is an error here.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Load an explicit path, or the default path if it exists, or defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "using default config file");
                Self::load(path)
            }
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FolioError;

    #[test]
    fn empty_file_is_defaults() {
        assert_eq!(FolioConfig::from_toml_str("").unwrap(), FolioConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = FolioConfig::from_toml_str(
            r#"
            catalog = "/srv/folio/catalog.json"
            window_width = 800.0
            "#,
        )
        .unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("/srv/folio/catalog.json")));
        assert_eq!(config.window_width, 800.0);
        assert_eq!(config.window_height, 900.0);
        assert_eq!(config.title, "Folio");
    }

    #[test]
    fn bad_toml_is_config_error() {
        let err = FolioConfig::from_toml_str("window_width = \"wide\"").unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn explicit_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = FolioConfig::resolve(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "title = \"Portfolio\"\n").unwrap();
        let config = FolioConfig::resolve(Some(path.as_path())).unwrap();
        assert_eq!(config.title, "Portfolio");
    }
}
