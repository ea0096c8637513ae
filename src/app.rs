use dioxus::prelude::*;
use ruleiq_ui::tokens;

use crate::components::Shell;
use crate::context::get_app_config;
use crate::pages::{
    AssessmentDetail, Assessments, Dashboard, Evidence, EvidenceDetail, NotFound, Policies,
    Reports,
};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// Every page renders inside the `Shell` layout, which carries the top bar
/// and the mobile navigation panel.
///
/// - `/` - Compliance dashboard
/// - `/assessments`, `/assessments/:id` - Assessments and a single assessment
/// - `/evidence`, `/evidence/:id` - Evidence library and a single item
/// - `/policies` - Generated policies
/// - `/reports` - Compliance reports
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Dashboard {},
        #[route("/assessments")]
        Assessments {},
        #[route("/assessments/:id")]
        AssessmentDetail { id: String },
        #[route("/evidence")]
        Evidence {},
        #[route("/evidence/:id")]
        EvidenceDetail { id: String },
        #[route("/policies")]
        Policies {},
        #[route("/reports")]
        Reports {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides token variables, global styles, configuration context and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(get_app_config);
    let token_css = use_hook(tokens::css_custom_properties);

    rsx! {
        style { {token_css} }
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruleiq_ui::DESTINATIONS;

    #[test]
    fn every_destination_parses_to_its_route() {
        let expected = [
            Route::Dashboard {},
            Route::Assessments {},
            Route::Evidence {},
            Route::Policies {},
            Route::Reports {},
        ];
        for (destination, route) in DESTINATIONS.iter().zip(expected) {
            assert_eq!(destination.href.parse::<Route>().ok(), Some(route));
        }
    }

    #[test]
    fn detail_routes_render_nested_paths() {
        let route = Route::EvidenceDetail { id: "123".to_string() };
        assert_eq!(route.to_string(), "/evidence/123");
        assert_eq!(
            ruleiq_ui::active_destination(Some(route.to_string().as_str())).map(|d| d.title),
            Some("Evidence")
        );
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let route = "/settings/billing"
            .parse::<Route>()
            .ok()
            .expect("catch-all route matches");
        assert!(matches!(route, Route::NotFound { .. }));
        assert_eq!(ruleiq_ui::active_destination(Some(route.to_string().as_str())), None);
    }
}
