//! Configuration file discovery and loading.
//!
//! This module handles finding and loading realbin configuration files with
//! proper precedence.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-user data directory under the home directory.
pub const DATA_DIR_NAME: &str = ".realbin";

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
///
/// # Examples
///
/// ```
/// use realbin::config::ConfigSource;
/// use std::path::PathBuf;
///
/// let user_config = ConfigSource {
///     path: PathBuf::from("~/.realbin/config.yaml"),
///     precedence: 1,
///     config: Default::default(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from files.
///
/// # Examples
///
/// ```no_run
/// use realbin::config::ConfigLoader;
///
/// let sources = ConfigLoader::load_all(None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load every configuration file that applies.
    ///
    /// With an explicit `file`, only that file is loaded and it must exist.
    /// Otherwise the user config at `~/.realbin/config.yaml` is loaded when
    /// present.
    ///
    /// # Errors
    ///
    /// Returns an error if a file that should be loaded cannot be read or
    /// parsed.
    pub fn load_all(file: Option<&Path>) -> Result<Vec<ConfigSource>> {
        if let Some(path) = file {
            let config = Self::load_file(path)?;
            return Ok(vec![ConfigSource {
                path: path.to_path_buf(),
                precedence: 2,
                config,
            }]);
        }

        let mut sources = Vec::new();
        if let Some(user_config) = Self::load_user_config()? {
            sources.push(user_config);
        }
        Ok(sources)
    }

    /// Load the user configuration file, if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load_user_config() -> Result<Option<ConfigSource>> {
        let config_path = match Self::user_config_path() {
            Ok(path) => path,
            Err(e) => {
                log::debug!("skipping user config: {e}");
                return Ok(None);
            }
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1, // Lowest precedence
            config,
        }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        // An empty file is an empty configuration, not a YAML error.
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }

    /// The default location of the user configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn user_config_path() -> Result<PathBuf> {
        let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
            path: PathBuf::from("~"),
            reason: "cannot determine home directory".into(),
        })?;
        Ok(home.join(DATA_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}
