#![allow(non_snake_case)]

mod app;
mod components;
mod config;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use anyhow::Result;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::config::{AppConfig, Args, ConfigError};

/// Global configuration, set from command line
static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the application configuration (set from command line or default)
pub fn get_app_config() -> AppConfig {
    APP_CONFIG.get().cloned().unwrap_or_default()
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    // stderr keeps stdout clean for --export-tokens
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    if args.export_tokens {
        let json = ruleiq_ui::tokens::to_json_pretty().map_err(ConfigError::from)?;
        println!("{}", json);
        return Ok(());
    }

    let config = AppConfig::from_args(&args)?;
    let _ = APP_CONFIG.set(config.clone());

    tracing::info!(
        environment = %config.environment,
        width = config.window.width,
        height = config.window.height,
        "Starting {}",
        config.app_name
    );

    let desktop = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&config.window.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(
                config.window.width,
                config.window.height,
            ))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop)
        .launch(app::App);

    Ok(())
}
