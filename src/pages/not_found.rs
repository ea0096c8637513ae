//! Fallback for paths no route accepts. Nothing in the menu is highlighted.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::PageHeader;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::warn!(%path, "unknown route");

    rsx! {
        PageHeader {
            title: "Page not found".to_string(),
            summary: format!("Nothing lives at {}", path),
        }

        Link { class: "back-link", to: Route::Dashboard {}, "Back to dashboard" }
    }
}
