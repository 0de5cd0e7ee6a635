//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across CLI commands: global options,
//! configuration loading, argument coercion and output formatting.

use crate::error::CliError;
use clap::ValueEnum;
use realbin::config::{Config, ConfigBuilder, StyleSetting};
use realbin::path::PathLike;
use realbin::PathStyle;
use serde::Serialize;
use std::path::PathBuf;
use url::Url;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON on a single line.
    Json,
}

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Path conventions override.
    pub style: Option<StyleSetting>,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Output format.
    pub format: OutputFormat,
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration file (`--config` or the user config)
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(path) = &global.config {
        builder = builder.with_file(path);
    }

    if global.style.is_some() {
        builder = builder.with_config(Config {
            style: global.style,
            ..Default::default()
        });
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// The path style for this invocation.
pub fn path_style(global: &GlobalOptions) -> Result<PathStyle, CliError> {
    Ok(load_configuration(global)?.path_style())
}

/// Turn a command-line path argument into a path string.
///
/// `file:` URLs are converted to paths; everything else is taken as is.
pub fn path_argument(raw: &str, style: PathStyle) -> String {
    let is_file_url = raw
        .get(..5)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("file:"));
    if is_file_url {
        if let Ok(url) = Url::parse(raw) {
            return PathLike::Url(&url).to_path_string(style);
        }
    }
    raw.to_string()
}

/// Print a result in the requested format.
///
/// Text output is produced lazily so JSON runs skip the formatting.
pub fn emit<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce() -> String,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => println!("{}", text()),
        OutputFormat::Json => println!("{}", serde_json::to_string(value)?),
    }
    Ok(())
}
