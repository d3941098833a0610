//! Detail store lookup.
//!
//! The detail store is an external, read-only table of extended metadata
//! keyed by project title. Most titles have no entry; a miss is the normal
//! path, not an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::ProjectDetail;

/// Synchronous title → detail resolution.
pub trait DetailLookup {
    /// Resolve a title to its extended record, if the store has one
    fn lookup(&self, title: &str) -> Option<&ProjectDetail>;
}

/// In-memory detail store, deserialized as a plain `{ title: record }` map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetailStore {
    records: HashMap<String, ProjectDetail>,
}

impl DetailStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the record for a title
    pub fn insert(&mut self, title: impl Into<String>, detail: ProjectDetail) {
        self.records.insert(title.into(), detail);
    }

    pub fn with_detail(mut self, title: impl Into<String>, detail: ProjectDetail) -> Self {
        self.insert(title, detail);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Titles that carry a record, in no particular order
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }
}

impl DetailLookup for DetailStore {
    fn lookup(&self, title: &str) -> Option<&ProjectDetail> {
        self.records.get(title)
    }
}

impl<L: DetailLookup + ?Sized> DetailLookup for std::sync::Arc<L> {
    fn lookup(&self, title: &str) -> Option<&ProjectDetail> {
        (**self).lookup(title)
    }
}

impl FromIterator<(String, ProjectDetail)> for DetailStore {
    fn from_iter<T: IntoIterator<Item = (String, ProjectDetail)>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
