use dioxus::prelude::*;
use folio_core::{ProjectSummary, ScrollLockController};
use folio_ui::{DocumentSurface, ProjectCard, SharedDetails};

use crate::get_catalog;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the page scroll lock and the detail store,
/// then lays out one card per catalog project.
#[component]
pub fn App() -> Element {
    let catalog = use_hook(get_catalog);

    use_context_provider(|| ScrollLockController::new(DocumentSurface));
    use_context_provider(|| SharedDetails::new(catalog.details().clone()));

    let cards: Vec<(String, ProjectSummary)> = catalog
        .projects()
        .iter()
        .enumerate()
        .map(|(index, summary)| (card_key(index, &summary.title), summary.clone()))
        .collect();

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "page",
            h1 { class: "page-title", "Projects" }
            if cards.is_empty() {
                p { class: "empty-catalog", "No projects in this catalog yet." }
            } else {
                div { class: "project-grid",
                    for (key, summary) in cards {
                        ProjectCard { key: "{key}", summary }
                    }
                }
            }
        }
    }
}

/// List key for a card. Titles may repeat, so the position qualifies them.
fn card_key(index: usize, title: &str) -> String {
    format!("{}-{}", index, title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_keys_stay_unique_for_duplicate_titles() {
        assert_eq!(card_key(0, "Folio"), "0-Folio");
        assert_ne!(card_key(0, "Folio"), card_key(1, "Folio"));
    }
}
