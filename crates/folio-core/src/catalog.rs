//! Project catalog.
//!
//! A catalog is the list of cards to show plus the detail store that
//! backs their overlays, read from a JSON document:
//!
//! ```json
//! {
//!   "projects": [
//!     { "title": "Folio", "description": "...", "technologies": "Rust,Dioxus",
//!       "link": "https://...", "github": "https://..." }
//!   ],
//!   "details": {
//!     "Folio": { "icon": "📚", "highlights": ["..."],
//!                "additionalLinks": [{ "title": "Docs", "url": "https://..." }] }
//!   }
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::detail::{DetailLookup, DetailStore};
use crate::error::FolioError;
use crate::types::{ProjectDetail, ProjectSummary};
use crate::Result;

const BUILTIN_CATALOG: &str = include_str!("../assets/catalog.json");

/// Cards plus their detail store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    projects: Vec<ProjectSummary>,
    #[serde(default)]
    details: DetailStore,
}

impl Catalog {
    /// Parse and validate a catalog document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read a catalog document from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            projects = catalog.projects.len(),
            details = catalog.details.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// The sample catalog compiled into the binary
    pub fn builtin() -> Self {
        match Self::from_json_str(BUILTIN_CATALOG) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!("Built-in catalog is invalid: {}", e);
                Self::default()
            }
        }
    }

    pub fn projects(&self) -> &[ProjectSummary] {
        &self.projects
    }

    pub fn details(&self) -> &DetailStore {
        &self.details
    }

    /// Every card paired with its detail record, in catalog order
    pub fn entries(&self) -> impl Iterator<Item = (&ProjectSummary, Option<&ProjectDetail>)> {
        self.projects
            .iter()
            .map(|p| (p, self.details.lookup(&p.title)))
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (index, project) in self.projects.iter().enumerate() {
            if project.title.is_empty() {
                return Err(FolioError::Catalog(format!(
                    "project at index {} has an empty title",
                    index
                )));
            }
            if !seen.insert(project.title.as_str()) {
                tracing::warn!(title = %project.title, "duplicate project title; both cards share one detail record");
            }
        }
        for title in self.details.titles() {
            if !seen.contains(title) {
                tracing::debug!(%title, "detail record without a matching project");
            }
        }
        Ok(())
    }
}

impl DetailLookup for Catalog {
    fn lookup(&self, title: &str) -> Option<&ProjectDetail> {
        self.details.lookup(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = Catalog::from_json_str(BUILTIN_CATALOG).unwrap();
        assert!(!catalog.projects().is_empty());
        assert_eq!(Catalog::builtin(), catalog);
    }

    #[test]
    fn builtin_has_a_project_without_details() {
        let catalog = Catalog::builtin();
        assert!(catalog.entries().any(|(_, detail)| detail.is_none()));
        assert!(catalog.entries().any(|(_, detail)| detail.is_some()));
    }

    #[test]
    fn empty_document_is_an_empty_catalog() {
        let catalog = Catalog::from_json_str("{}").unwrap();
        assert!(catalog.projects().is_empty());
        assert!(catalog.details().is_empty());
    }

    #[test]
    fn empty_title_is_rejected() {
        let err = Catalog::from_json_str(r#"{ "projects": [{ "title": "" }] }"#).unwrap_err();
        assert!(matches!(err, FolioError::Catalog(_)));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = Catalog::from_json_str("{ projects: ").unwrap_err();
        assert!(matches!(err, FolioError::Json(_)));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "projects": [{{ "title": "A", "technologies": "X,Y" }}],
                 "details": {{ "A": {{ "icon": "a" }} }} }}"#
        )
        .unwrap();
        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.projects().len(), 1);
        assert_eq!(catalog.lookup("A").and_then(|d| d.icon.as_deref()), Some("a"));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
    }
}
