//! Evidence - collected artifacts backing each control.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::PageHeader;

#[component]
pub fn Evidence() -> Element {
    rsx! {
        PageHeader {
            title: "Evidence".to_string(),
            summary: "Documents and records that demonstrate each control.".to_string(),
        }

        div { class: "empty-state",
            p { "No evidence collected." }
            p { class: "empty-hint", "Evidence requested by assessments will appear here." }
        }
    }
}

#[component]
pub fn EvidenceDetail(id: String) -> Element {
    rsx! {
        PageHeader {
            title: "Evidence".to_string(),
            summary: format!("Evidence item {}", id),
        }

        Link { class: "back-link", to: Route::Evidence {}, "All evidence" }
    }
}
