//! Technology Tags Component
//!
//! Row of pill-shaped technology tags, in the order they were listed.

use dioxus::prelude::*;
use folio_core::Technology;

/// How the tag row behaves when it overflows
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TagLayout {
    /// Single line that scrolls horizontally (card)
    #[default]
    Strip,
    /// Wraps onto multiple lines (overlay)
    Wrap,
}

impl TagLayout {
    /// Returns the CSS class for this layout
    pub fn class(&self) -> &'static str {
        match self {
            TagLayout::Strip => "tech-tags tech-tags--strip",
            TagLayout::Wrap => "tech-tags tech-tags--wrap",
        }
    }
}

/// Properties for the TechTags component
#[derive(Clone, PartialEq, Props)]
pub struct TechTagsProps {
    /// Tags to show, already split
    pub technologies: Vec<Technology>,
    #[props(default)]
    pub layout: TagLayout,
}

/// Displays technology tags as pills
///
/// Empty tags still render as an (empty) pill so the row matches the raw
/// list one to one.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TechTags {
///         technologies: parse_technologies("Rust,Dioxus"),
///         layout: TagLayout::Wrap,
///     }
/// }
/// ```
#[component]
pub fn TechTags(props: TechTagsProps) -> Element {
    rsx! {
        div {
            class: props.layout.class(),
            for tech in props.technologies.iter() {
                span { class: "tech-tag", "{tech}" }
            }
        }
    }
}
