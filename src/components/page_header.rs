use dioxus::prelude::*;

/// Page title with a one-line summary underneath
#[component]
pub fn PageHeader(title: String, summary: String) -> Element {
    rsx! {
        header { class: "page-header",
            h1 { class: "page-title", "{title}" }
            p { class: "page-summary", "{summary}" }
        }
    }
}
