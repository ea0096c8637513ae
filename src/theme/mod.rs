//! Styling for the ruleIQ shell.

mod styles;

pub use styles::GLOBAL_STYLES;

#[cfg(test)]
mod tests {
    use super::*;
    use ruleiq_ui::tokens::css_custom_properties;

    /// Every `var(--name)` in the stylesheet is defined by the tokens or the stylesheet itself
    #[test]
    fn stylesheet_variables_are_defined() {
        let tokens = css_custom_properties();
        let mut rest = GLOBAL_STYLES;
        while let Some(start) = rest.find("var(--") {
            let after = &rest[start + 4..];
            let end = after.find(')').expect("unterminated var()");
            let name = &after[..end];
            let definition = format!("{}:", name);
            assert!(
                tokens.contains(&definition) || GLOBAL_STYLES.contains(&definition),
                "undefined custom property {}",
                name
            );
            rest = &after[end..];
        }
    }
}
