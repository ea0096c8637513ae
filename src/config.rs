//! Command line configuration for the ruleIQ desktop shell.

use std::fmt;

use clap::{Parser, ValueEnum};
use thiserror::Error;

/// Application name shown in the window title
pub const APP_NAME: &str = "ruleIQ";

/// Smallest window edge we will open, in logical pixels
pub const MIN_WINDOW_EDGE: f64 = 320.0;

/// Largest window edge we will open, in logical pixels
pub const MAX_WINDOW_EDGE: f64 = 4096.0;

/// ruleIQ - Compliance workspace
#[derive(Parser, Debug)]
#[command(name = "ruleiq-desktop")]
#[command(about = "ruleIQ - Compliance assessments, evidence, policies and reports")]
pub struct Args {
    /// Deployment environment (non-production shows a badge)
    #[arg(short, long, value_enum, default_value_t = Environment::Development)]
    pub environment: Environment,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 420.0)]
    pub width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    pub height: f64,

    /// Print the color token table as JSON and exit
    #[arg(long)]
    pub export_tokens: bool,
}

/// Deployment environment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
    Testing,
}

impl Environment {
    pub fn label(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
            Environment::Testing => "testing",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Badge text for the top bar; production shows none
    pub fn badge(&self) -> Option<&'static str> {
        match self {
            Environment::Production => None,
            Environment::Development => Some("DEV"),
            Environment::Staging => Some("STAGING"),
            Environment::Testing => Some("TEST"),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Window dimensions outside the supported range
    #[error("Invalid window size {width}x{height} (each edge must be {min}..={max})", min = MIN_WINDOW_EDGE, max = MAX_WINDOW_EDGE)]
    InvalidWindowSize { width: f64, height: f64 },

    /// Token table could not be serialized
    #[error("Token export error: {0}")]
    TokenExport(#[from] serde_json::Error),
}

/// Desktop window settings
#[derive(Clone, Debug, PartialEq)]
pub struct WindowSettings {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Validated application configuration, shared with components via context
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub app_name: &'static str,
    pub environment: Environment,
    pub window: WindowSettings,
}

impl AppConfig {
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let edge_ok = |edge: f64| (MIN_WINDOW_EDGE..=MAX_WINDOW_EDGE).contains(&edge);
        if !edge_ok(args.width) || !edge_ok(args.height) {
            return Err(ConfigError::InvalidWindowSize {
                width: args.width,
                height: args.height,
            });
        }

        let title = if args.environment.is_production() {
            APP_NAME.to_string()
        } else {
            format!("{} ({})", APP_NAME, args.environment)
        };

        Ok(Self {
            app_name: APP_NAME,
            environment: args.environment,
            window: WindowSettings {
                title,
                width: args.width,
                height: args.height,
            },
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: APP_NAME,
            environment: Environment::default(),
            window: WindowSettings {
                title: format!("{} ({})", APP_NAME, Environment::default()),
                width: 420.0,
                height: 860.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("ruleiq-desktop").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults_match_default_config() {
        let config = AppConfig::from_args(&parse(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.window.title, "ruleIQ (development)");
    }

    #[test]
    fn production_title_has_no_suffix() {
        let config = AppConfig::from_args(&parse(&["--environment", "production"])).unwrap();
        assert!(config.environment.is_production());
        assert_eq!(config.window.title, "ruleIQ");
        assert_eq!(config.environment.badge(), None);
    }

    #[test]
    fn verbosity_counts() {
        assert_eq!(parse(&["-vv"]).verbose, 2);
        assert_eq!(parse(&["-e", "staging"]).environment, Environment::Staging);
    }

    #[test]
    fn rejects_tiny_window() {
        let err = AppConfig::from_args(&parse(&["--width", "100"])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWindowSize { .. }));
        assert!(err.to_string().starts_with("Invalid window size 100x860"));
    }

    #[test]
    fn rejects_unknown_environment() {
        let result = Args::try_parse_from(["ruleiq-desktop", "--environment", "qa"]);
        assert!(result.is_err());
    }
}
