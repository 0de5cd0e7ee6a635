//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `REALBIN_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, StyleSetting};
use crate::error::{Error, Result};
use std::env;

/// Overrides the path style (`auto`, `posix` or `windows`).
pub const STYLE_ENV: &str = "REALBIN_STYLE";

/// Overrides the shim resolution hop limit.
pub const MAX_HOPS_ENV: &str = "REALBIN_MAX_HOPS";

/// Overrides the executable search path.
pub const PATH_ENV: &str = "REALBIN_PATH";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use realbin::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value (for example a
    /// non-numeric hop limit).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(style) = Self::var(STYLE_ENV) {
            config.style = Some(style.parse::<StyleSetting>().map_err(|_| Error::Validation {
                field: STYLE_ENV.into(),
                message: format!("expected auto, posix or windows, got '{style}'"),
            })?);
        }

        if let Some(max_hops) = Self::var(MAX_HOPS_ENV) {
            config.max_hops = Some(max_hops.parse().map_err(|_| Error::Validation {
                field: MAX_HOPS_ENV.into(),
                message: "Must be a positive integer".into(),
            })?);
        }

        if let Some(search_path) = Self::var(PATH_ENV) {
            config.search_path = Some(search_path);
        }

        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|value| !value.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Run `f` with the given variables set, removing them afterwards
    fn with_vars(vars: &[(&str, &str)], f: impl FnOnce()) {
        for (name, value) in vars {
            env::set_var(name, value);
        }
        f();
        for (name, _) in vars {
            env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn test_no_vars_no_changes() {
        for name in [STYLE_ENV, MAX_HOPS_ENV, PATH_ENV] {
            env::remove_var(name);
        }
        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_all_overrides() {
        with_vars(
            &[
                (STYLE_ENV, "Windows"),
                (MAX_HOPS_ENV, "7"),
                (PATH_ENV, "/opt/bin"),
            ],
            || {
                let mut config = Config {
                    max_hops: Some(2),
                    ..Default::default()
                };
                EnvironmentConfig::apply_overrides(&mut config).unwrap();
                assert_eq!(config.style, Some(StyleSetting::Windows));
                assert_eq!(config.max_hops, Some(7));
                assert_eq!(config.search_path.as_deref(), Some("/opt/bin"));
            },
        );
    }

    #[test]
    #[serial]
    fn test_invalid_max_hops() {
        with_vars(&[(MAX_HOPS_ENV, "many")], || {
            let mut config = Config::default();
            let err = EnvironmentConfig::apply_overrides(&mut config).unwrap_err();
            assert!(matches!(err, Error::Validation { ref field, .. } if field == MAX_HOPS_ENV));
        });
    }

    #[test]
    #[serial]
    fn test_invalid_style() {
        with_vars(&[(STYLE_ENV, "vms")], || {
            let mut config = Config::default();
            assert!(EnvironmentConfig::apply_overrides(&mut config).is_err());
        });
    }

    #[test]
    #[serial]
    fn test_empty_values_ignored() {
        with_vars(&[(PATH_ENV, "  ")], || {
            let mut config = Config::default();
            EnvironmentConfig::apply_overrides(&mut config).unwrap();
            assert_eq!(config.search_path, None);
        });
    }
}
