//! Configuration system for realbin.
//!
//! This module provides layered configuration with support for:
//! - A YAML configuration file (`~/.realbin/config.yaml` or an explicit path)
//! - `REALBIN_*` environment variable overrides
//! - Programmatic overrides via the builder
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`REALBIN_STYLE`, `REALBIN_MAX_HOPS`, `REALBIN_PATH`)
//! 3. The configuration file
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use realbin::config::{Config, ConfigBuilder, StyleSetting};
//! use realbin::PathStyle;
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         style: Some(StyleSetting::Windows),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.path_style(), PathStyle::Windows);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, StyleSetting};
pub use validator::ConfigValidator;
