//! Assessments - framework readiness questionnaires.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::PageHeader;

#[component]
pub fn Assessments() -> Element {
    rsx! {
        PageHeader {
            title: "Assessments".to_string(),
            summary: "Measure readiness against a compliance framework.".to_string(),
        }

        div { class: "empty-state",
            p { "No assessments yet." }
            p { class: "empty-hint", "Start one to see gaps and recommended evidence." }
        }
    }
}

#[component]
pub fn AssessmentDetail(id: String) -> Element {
    rsx! {
        PageHeader {
            title: "Assessment".to_string(),
            summary: format!("Assessment {}", id),
        }

        Link { class: "back-link", to: Route::Assessments {}, "All assessments" }
    }
}
