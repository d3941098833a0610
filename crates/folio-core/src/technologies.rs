//! Technology tag parsing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between technologies in [`ProjectSummary::technologies`](crate::ProjectSummary)
pub const TECHNOLOGY_DELIMITER: char = ',';

/// One technology tag.
///
/// Carried exactly as it appeared between delimiters: not trimmed, may be
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Technology(String);

impl Technology {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Technology {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Technology {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split a delimited technology list into tags.
///
/// Literal split semantics: segments keep their whitespace, empty segments
/// survive, duplicates are kept and order is preserved. An empty input
/// therefore yields one empty tag.
pub fn parse_technologies(raw: &str) -> Vec<Technology> {
    raw.split(TECHNOLOGY_DELIMITER).map(Technology::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(tags: &[Technology]) -> Vec<&str> {
        tags.iter().map(Technology::as_str).collect()
    }

    #[test]
    fn splits_in_order() {
        let tags = parse_technologies("React,Node,SQL");
        assert_eq!(strings(&tags), vec!["React", "Node", "SQL"]);
    }

    #[test]
    fn empty_input_yields_one_empty_tag() {
        let tags = parse_technologies("");
        assert_eq!(tags.len(), 1);
        assert!(tags[0].is_empty());
    }

    #[test]
    fn keeps_whitespace_empties_and_duplicates() {
        let tags = parse_technologies("Rust, Rust,,Tokio ");
        assert_eq!(strings(&tags), vec!["Rust", " Rust", "", "Tokio "]);
    }

    #[test]
    fn trailing_delimiter_leaves_empty_tag() {
        assert_eq!(strings(&parse_technologies("Go,")), vec!["Go", ""]);
    }

    #[test]
    fn display_is_raw_text() {
        assert_eq!(Technology::from(" Wasm").to_string(), " Wasm");
    }
}
