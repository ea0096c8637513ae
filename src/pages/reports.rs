use dioxus::prelude::*;

use crate::components::PageHeader;

#[component]
pub fn Reports() -> Element {
    rsx! {
        PageHeader {
            title: "Reports".to_string(),
            summary: "Readiness and gap reports for auditors and stakeholders.".to_string(),
        }

        div { class: "empty-state",
            p { "No reports available." }
        }
    }
}
