use dioxus::prelude::*;

use crate::components::PageHeader;

#[component]
pub fn Policies() -> Element {
    rsx! {
        PageHeader {
            title: "Policies".to_string(),
            summary: "Policies generated for your business profile.".to_string(),
        }

        div { class: "empty-state",
            p { "No policies generated." }
        }
    }
}
