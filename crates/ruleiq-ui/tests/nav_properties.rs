//! Property-based tests for active-destination matching
//!
//! Uses proptest to check the highlighting rule over arbitrary locations.

use proptest::prelude::*;
use ruleiq_ui::{active_destination, is_active, nav_items, PanelView, DESTINATIONS};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Path-like suffixes: `/123`, `/q3/export`, `-x`, or nothing
fn suffix_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("([/-][a-z0-9]{0,8}){0,3}").expect("valid regex")
}

/// Any location a router could report, including junk
fn location_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("/[a-z0-9/_-]{0,24}").expect("valid regex"),
        prop::string::string_regex(".{0,24}").expect("valid regex"),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The root destination is active only for exactly `/`
    #[test]
    fn root_only_matches_itself(location in location_strategy()) {
        prop_assert_eq!(is_active("/", Some(location.as_str())), location == "/");
    }

    /// Every non-root destination stays active below its own path
    #[test]
    fn nested_paths_keep_section_active(index in 1usize..5, suffix in suffix_strategy()) {
        let destination = &DESTINATIONS[index];
        let location = format!("{}{}", destination.href, suffix);
        let active = active_destination(Some(location.as_str()));
        prop_assert_eq!(active.map(|d| d.href), Some(destination.href));
    }

    /// At most one destination is highlighted for any location
    #[test]
    fn at_most_one_active(location in location_strategy()) {
        let count = nav_items(Some(location.as_str())).iter().filter(|i| i.active).count();
        prop_assert!(count <= 1, "{} active for {:?}", count, location);
    }

    /// The rendered view agrees with the matching rule
    #[test]
    fn view_matches_rule(location in location_strategy(), open in any::<bool>()) {
        match PanelView::build(open, Some(location.as_str())) {
            None => prop_assert!(!open),
            Some(view) => {
                prop_assert!(open);
                prop_assert_eq!(view.items.len(), 5);
                for item in &view.items {
                    prop_assert_eq!(item.active, is_active(item.destination.href, Some(location.as_str())));
                }
            }
        }
    }
}

#[test]
fn missing_location_highlights_nothing() {
    let view = PanelView::build(true, None).expect("open panel has a view");
    assert!(view.active().is_none());
}
