//! Configuration schema definitions.
//!
//! This module defines the configuration structure for realbin: the path
//! style, the shim resolution limit, the executable search path, and extra
//! install locations per tool.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::{normalize_path, PathStyle};
use crate::shim::{BinaryLocator, ShimResolver, DEFAULT_MAX_HOPS};

/// Complete configuration structure.
///
/// Every field is optional so configurations from several sources can be
/// merged; unset fields fall back to built-in defaults.
///
/// # Examples
///
/// ```
/// use realbin::config::{Config, StyleSetting};
/// use realbin::PathStyle;
///
/// let config = Config {
///     style: Some(StyleSetting::Windows),
///     max_hops: Some(4),
///     ..Default::default()
/// };
/// assert_eq!(config.path_style(), PathStyle::Windows);
/// assert_eq!(config.shim_resolver().max_hops(), 4);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path conventions to apply.
    pub style: Option<StyleSetting>,

    /// Maximum number of indirections followed when resolving a shim.
    pub max_hops: Option<usize>,

    /// Executable search path, in the platform's `PATH` format.
    pub search_path: Option<String>,

    /// Extra install locations to check first, keyed by tool name.
    #[serde(default)]
    pub common_paths: Option<BTreeMap<String, Vec<PathBuf>>>,
}

impl Config {
    /// The effective path style.
    #[must_use]
    pub fn path_style(&self) -> PathStyle {
        self.style.unwrap_or_default().to_style()
    }

    /// The effective hop limit.
    #[must_use]
    pub fn max_hops(&self) -> usize {
        self.max_hops.unwrap_or(DEFAULT_MAX_HOPS)
    }

    /// A shim resolver built from this configuration.
    #[must_use]
    pub fn shim_resolver(&self) -> ShimResolver {
        ShimResolver::new()
            .with_style(self.path_style())
            .with_max_hops(self.max_hops())
    }

    /// A binary locator built from this configuration.
    #[must_use]
    pub fn binary_locator(&self) -> BinaryLocator {
        let mut locator = BinaryLocator::new().with_resolver(self.shim_resolver());
        if let Some(search_path) = &self.search_path {
            locator = locator.with_search_path(search_path);
        }
        for (name, paths) in self.common_paths.iter().flatten() {
            let paths = paths.iter().map(|path| normalize_path(path)).collect();
            locator = locator.with_common_paths(name.clone(), paths);
        }
        locator
    }
}

/// Which path conventions to use.
///
/// # Examples
///
/// ```
/// use realbin::config::StyleSetting;
///
/// let setting: StyleSetting = "windows".parse().unwrap();
/// assert_eq!(setting.to_string(), "windows");
/// ```
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum StyleSetting {
    /// The conventions of the running platform.
    #[default]
    Auto,
    /// Unix conventions.
    Posix,
    /// Windows conventions.
    Windows,
}

impl StyleSetting {
    /// The concrete style this setting selects.
    #[must_use]
    pub const fn to_style(self) -> PathStyle {
        match self {
            Self::Auto => PathStyle::native(),
            Self::Posix => PathStyle::Posix,
            Self::Windows => PathStyle::Windows,
        }
    }
}

impl FromStr for StyleSetting {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "posix" => Ok(Self::Posix),
            "windows" => Ok(Self::Windows),
            _ => Err(Error::Validation {
                field: "style".into(),
                message: format!("expected auto, posix or windows, got '{s}'"),
            }),
        }
    }
}

impl fmt::Display for StyleSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}
