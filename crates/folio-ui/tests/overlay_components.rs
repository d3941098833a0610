//! Headless component tests.
//!
//! These mount components in a bare `VirtualDom` with a `MemorySurface`
//! behind the scroll lock, so no webview is needed.

use std::collections::HashSet;

use dioxus::prelude::*;
use dioxus_core::{ElementId, Mutation, Mutations};
use folio_core::{
    render_detail, DetailStore, LinkEntry, MemorySurface, ProjectSummary, ScrollBehavior,
    ScrollLockController,
};
use folio_ui::{use_overlay, DetailOverlay, LinkItem, ProjectCard, SharedDetails};

fn sample_summary() -> ProjectSummary {
    ProjectSummary::new(
        "Atlas",
        "Route planner",
        "Rust,Dioxus",
        "https://atlas.example",
        "https://github.com/example/atlas",
    )
}

fn setup() -> (MemorySurface, ScrollLockController) {
    let surface = MemorySurface::default();
    let lock = ScrollLockController::new(surface.clone());
    (surface, lock)
}

#[derive(Clone, PartialEq, Props)]
struct PageProps {
    lock: ScrollLockController,
    open: bool,
}

fn page(props: PageProps) -> Element {
    use_context_provider(|| props.lock.clone());
    use_context_provider(|| SharedDetails::new(DetailStore::new()));
    rsx! {
        OpenedOverlay { open: props.open }
        ProjectCard { summary: sample_summary() }
    }
}

/// Mirrors `ProjectCard`'s overlay wiring, opened on first render.
#[component]
fn OpenedOverlay(open: bool) -> Element {
    let overlay = use_overlay();
    use_hook(|| {
        if open {
            overlay.open();
        }
    });

    let view = render_detail(&sample_summary(), None, overlay.state());
    rsx! {
        if let Some(view) = view {
            DetailOverlay { view, on_close: move |_| overlay.close() }
        }
    }
}

#[test]
fn unmounting_an_open_overlay_frees_the_page() {
    let (surface, lock) = setup();
    let mut dom = VirtualDom::new_with_props(
        page,
        PageProps {
            lock: lock.clone(),
            open: true,
        },
    );
    dom.rebuild_in_place();

    assert!(lock.is_locked());
    assert_eq!(lock.holders(), 1);
    assert_eq!(surface.current(), ScrollBehavior::Locked);

    drop(dom);

    assert_eq!(lock.holders(), 0);
    assert!(!lock.is_locked());
    assert_eq!(surface.current(), ScrollBehavior::Free);
}

#[test]
fn closed_cards_touch_nothing_until_unmounted() {
    let (surface, lock) = setup();
    let mut dom = VirtualDom::new_with_props(
        page,
        PageProps {
            lock: lock.clone(),
            open: false,
        },
    );
    dom.rebuild_in_place();

    assert!(surface.writes().is_empty());
    assert_eq!(lock.holders(), 0);

    drop(dom);

    assert_eq!(lock.holders(), 0);
    assert_eq!(surface.count(ScrollBehavior::Locked), 0);
    assert_eq!(surface.current(), ScrollBehavior::Free);
}

fn link_inside_card() -> Element {
    rsx! {
        div {
            onclick: move |_| {},
            onkeydown: move |_| {},
            LinkItem { entry: LinkEntry::new("View Project", "https://atlas.example"), compact: true }
        }
    }
}

fn is_event(name: &str, event: &str) -> bool {
    name == event || name.strip_prefix("on") == Some(event)
}

#[test]
fn card_links_handle_clicks_and_keys_themselves() {
    let mut dom = VirtualDom::new(link_inside_card);
    let mut mutations = Mutations::default();
    dom.rebuild(&mut mutations);

    let listeners: Vec<(String, ElementId)> = mutations
        .edits
        .iter()
        .filter_map(|edit| match edit {
            Mutation::NewEventListener { name, id } => Some((name.clone(), *id)),
            _ => None,
        })
        .collect();

    let keydown: HashSet<ElementId> = listeners
        .iter()
        .filter(|(name, _)| is_event(name, "keydown"))
        .map(|(_, id)| *id)
        .collect();
    let click: HashSet<ElementId> = listeners
        .iter()
        .filter(|(name, _)| is_event(name, "click"))
        .map(|(_, id)| *id)
        .collect();

    // The wrapper and the link each listen for both events.
    assert_eq!(keydown.len(), 2, "listeners: {:?}", listeners);
    assert_eq!(click, keydown);
}
