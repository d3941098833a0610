//! Card and detail view models.
//!
//! Pure functions from catalog data (and overlay state) to the values the
//! UI renders. Nothing here can fail: missing detail data just leaves the
//! matching subsection empty.

use crate::links::{aggregate_links, primary_links, LinkEntry};
use crate::overlay::OverlayState;
use crate::technologies::Technology;
use crate::types::{ProjectDetail, ProjectSummary};

/// Collapsed card contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub title: String,
    pub description: String,
    pub technologies: Vec<Technology>,
    /// Project and source links only
    pub links: Vec<LinkEntry>,
}

impl CardView {
    pub fn build(summary: &ProjectSummary) -> Self {
        Self {
            title: summary.title.clone(),
            description: summary.description.clone(),
            technologies: summary.technology_tags(),
            links: primary_links(&summary.link, &summary.github),
        }
    }
}

/// Expanded overlay contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub icon: Option<String>,
    pub title: String,
    pub technologies: Vec<Technology>,
    pub description: String,
    /// `None` hides the "Key Highlights" section
    pub highlights: Option<Vec<String>>,
    pub links: Vec<LinkEntry>,
}

impl DetailView {
    /// Combine a summary with its (possibly absent) detail record
    pub fn build(summary: &ProjectSummary, detail: Option<&ProjectDetail>) -> Self {
        let additional = detail.and_then(|d| d.additional_links.as_deref());
        Self {
            icon: detail.and_then(|d| d.icon.clone()),
            title: summary.title.clone(),
            technologies: summary.technology_tags(),
            description: summary.description.clone(),
            highlights: detail.and_then(|d| d.highlights.clone()),
            links: aggregate_links(&summary.link, &summary.github, additional),
        }
    }

    pub fn has_highlights(&self) -> bool {
        self.highlights.is_some()
    }
}

/// The detail view for the given overlay state.
///
/// `None` whenever the overlay is closed, so a closed overlay has no
/// mounted view at all rather than a hidden one.
pub fn render_detail(
    summary: &ProjectSummary,
    detail: Option<&ProjectDetail>,
    state: OverlayState,
) -> Option<DetailView> {
    state
        .is_open()
        .then(|| DetailView::build(summary, detail))
}
