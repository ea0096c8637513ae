//! Configuration context for the ruleIQ shell.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(get_app_config);
//!
//! // In child components
//! let config = use_app_config();
//! ```

use dioxus::prelude::*;

use crate::config::AppConfig;

/// Get the configuration parsed from command line args.
pub fn get_app_config() -> AppConfig {
    crate::get_app_config()
}

/// Hook to access the application configuration from context.
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}
