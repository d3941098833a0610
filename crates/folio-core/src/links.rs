//! Link aggregation for the detail view.

use serde::{Deserialize, Serialize};

use crate::types::AdditionalLink;

/// Label of the primary project link
pub const PROJECT_LABEL: &str = "View Project";
/// Label of the source repository link
pub const GITHUB_LABEL: &str = "View Github";

/// A labelled link as rendered in the card and overlay
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkEntry {
    pub label: String,
    pub url: String,
}

impl LinkEntry {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

impl From<&AdditionalLink> for LinkEntry {
    fn from(link: &AdditionalLink) -> Self {
        Self::new(link.title.clone(), link.url.clone())
    }
}

/// The two links every project has: project first, then source.
pub fn primary_links(link: &str, github: &str) -> Vec<LinkEntry> {
    vec![
        LinkEntry::new(PROJECT_LABEL, link),
        LinkEntry::new(GITHUB_LABEL, github),
    ]
}

/// Merge the primary links with the detail store's extra links.
///
/// Order is fixed: project, source, then every additional link in store
/// order. URLs are passed through untouched.
pub fn aggregate_links(
    link: &str,
    github: &str,
    additional: Option<&[AdditionalLink]>,
) -> Vec<LinkEntry> {
    let mut links = primary_links(link, github);
    if let Some(extra) = additional {
        links.extend(extra.iter().map(LinkEntry::from));
    }
    links
}
