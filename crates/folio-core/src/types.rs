//! Core types for Folio

use serde::{Deserialize, Serialize};

use crate::technologies::{parse_technologies, Technology};

/// Summary data for one catalog entry, as supplied to each card.
///
/// Immutable once loaded. The title is the entry's identity and the key
/// used against the detail store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Display title, also the detail store key
    pub title: String,
    /// Short description shown on the card and in the overlay
    #[serde(default)]
    pub description: String,
    /// Comma-delimited technology list, kept raw
    #[serde(default)]
    pub technologies: String,
    /// Primary project URL
    #[serde(default)]
    pub link: String,
    /// Source repository URL
    #[serde(default)]
    pub github: String,
}

impl ProjectSummary {
    /// Create a summary from its five fields
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        technologies: impl Into<String>,
        link: impl Into<String>,
        github: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            technologies: technologies.into(),
            link: link.into(),
            github: github.into(),
        }
    }

    /// The technology tags in their original order
    pub fn technology_tags(&self) -> Vec<Technology> {
        parse_technologies(&self.technologies)
    }
}

/// A supplementary link carried by a detail record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdditionalLink {
    pub title: String,
    pub url: String,
}

impl AdditionalLink {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Extended metadata for a project, keyed by title in the detail store.
///
/// Every field is optional. A missing field means the matching overlay
/// subsection renders nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    /// Glyph shown beside the title (usually an emoji)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Ordered highlight bullet points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
    /// Extra links appended after the project and source links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_links: Option<Vec<AdditionalLink>>,
}

impl ProjectDetail {
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_highlights<I, S>(mut self, highlights: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.highlights = Some(highlights.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_additional_links(mut self, links: Vec<AdditionalLink>) -> Self {
        self.additional_links = Some(links);
        self
    }
}
