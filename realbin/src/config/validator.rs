//! Configuration validation.
//!
//! This module checks the values that deserialization alone cannot: hop
//! limits and the shape of the `common_paths` table.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Largest accepted hop limit.
pub const MAX_HOPS_LIMIT: usize = 64;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use realbin::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
///
/// let bad = Config { max_hops: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(max_hops) = config.max_hops {
            Self::validate_max_hops(max_hops)?;
        }

        if let Some(common_paths) = &config.common_paths {
            for (name, paths) in common_paths {
                if name.trim().is_empty() {
                    return Err(Error::Validation {
                        field: "common_paths".into(),
                        message: "tool name cannot be empty".into(),
                    });
                }
                if paths.iter().any(|path| path.as_os_str().is_empty()) {
                    return Err(Error::Validation {
                        field: format!("common_paths.{name}"),
                        message: "paths cannot be empty".into(),
                    });
                }
            }
        }

        Ok(())
    }

    fn validate_max_hops(max_hops: usize) -> Result<()> {
        if (1..=MAX_HOPS_LIMIT).contains(&max_hops) {
            Ok(())
        } else {
            Err(Error::Validation {
                field: "max_hops".into(),
                message: format!("must be between 1 and {MAX_HOPS_LIMIT}, got {max_hops}"),
            })
        }
    }
}
