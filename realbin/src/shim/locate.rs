//! Executable lookup on the search path.
//!
//! [`BinaryLocator`] searches `PATH` with the `which` crate and passes every
//! hit through a [`ShimResolver`], so callers always get the real binary
//! rather than a wrapper.

use std::collections::BTreeMap;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::path::algebra::current_dir_string;
use crate::path::{normalize_path, PathLike, PathStyle};
use crate::shim::fs::{FileSystem, OsFileSystem};
use crate::shim::resolver::ShimResolver;

/// Options for [`BinaryLocator::find_binary`].
///
/// The default looks for the first match and reports a missing binary as
/// `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindOptions {
    /// Return every match on the search path instead of the first.
    pub all: bool,
    /// Report a missing binary as `Ok(None)` instead of an error.
    pub nothrow: bool,
}

impl Default for FindOptions {
    fn default() -> Self {
        Self {
            all: false,
            nothrow: true,
        }
    }
}

/// The result of a successful [`BinaryLocator::find_binary`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinMatch {
    /// The first match.
    One(String),
    /// Every match, in search path order.
    All(Vec<String>),
}

impl BinMatch {
    /// The matched paths as a list.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(path) => vec![path],
            Self::All(paths) => paths,
        }
    }
}

/// Locations used to guess where package managers are installed.
///
/// Each field mirrors the environment variable (or home directory) of the
/// same name. Missing values skip the guesses built from them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallEnv {
    /// `%APPDATA%` on Windows.
    pub appdata: Option<PathBuf>,
    /// `%LOCALAPPDATA%` on Windows.
    pub local_appdata: Option<PathBuf>,
    /// The user's home directory.
    pub home: Option<PathBuf>,
    /// `$XDG_DATA_HOME`.
    pub xdg_data_home: Option<PathBuf>,
}

impl InstallEnv {
    /// Read the install locations from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        let var = |name: &str| env::var_os(name).filter(|v| !v.is_empty()).map(PathBuf::from);
        Self {
            appdata: var("APPDATA"),
            local_appdata: var("LOCALAPPDATA"),
            home: home::home_dir(),
            xdg_data_home: var("XDG_DATA_HOME"),
        }
    }
}

fn join(base: &Option<PathBuf>, rest: &str) -> Option<String> {
    base.as_ref()
        .map(|dir| format!("{}/{rest}", normalize_path(dir)))
}

/// Searches for executables and resolves them to real binaries.
///
/// # Examples
///
/// ```no_run
/// use realbin::shim::{BinaryLocator, FindOptions};
///
/// let locator = BinaryLocator::new();
/// if let Some(npm) = locator.find("npm") {
///     println!("npm runs {npm}");
/// }
/// let all = locator.find_binary("node", &FindOptions { all: true, ..Default::default() }).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct BinaryLocator<F = OsFileSystem> {
    resolver: ShimResolver<F>,
    search_path: Option<OsString>,
    cwd: Option<PathBuf>,
    install_env: InstallEnv,
    common_paths: BTreeMap<String, Vec<String>>,
}

impl BinaryLocator<OsFileSystem> {
    /// Create a locator that searches the process `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            resolver: ShimResolver::new(),
            search_path: None,
            cwd: None,
            install_env: InstallEnv::from_env(),
            common_paths: BTreeMap::new(),
        }
    }
}

impl Default for BinaryLocator<OsFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> BinaryLocator<F> {
    /// Use `resolver` to follow shims in every hit.
    #[must_use]
    pub fn with_resolver<G: FileSystem>(self, resolver: ShimResolver<G>) -> BinaryLocator<G> {
        BinaryLocator {
            resolver,
            search_path: self.search_path,
            cwd: self.cwd,
            install_env: self.install_env,
            common_paths: self.common_paths,
        }
    }

    /// Search these directories instead of the process `PATH`.
    #[must_use]
    pub fn with_search_path(mut self, search_path: impl Into<OsString>) -> Self {
        self.search_path = Some(search_path.into());
        self
    }

    /// Resolve relative search path entries against `cwd`.
    #[must_use]
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Use these install locations for the `find_real_*` guesses.
    #[must_use]
    pub fn with_install_env(mut self, install_env: InstallEnv) -> Self {
        self.install_env = install_env;
        self
    }

    /// Check `paths` before the built-in guesses when looking for `name`.
    #[must_use]
    pub fn with_common_paths(mut self, name: impl Into<String>, paths: Vec<String>) -> Self {
        self.common_paths.insert(name.into(), paths);
        self
    }

    /// The resolver applied to every hit.
    pub fn resolver(&self) -> &ShimResolver<F> {
        &self.resolver
    }

    fn style(&self) -> PathStyle {
        self.resolver.style()
    }

    fn search_path(&self) -> Option<OsString> {
        self.search_path.clone().or_else(|| env::var_os("PATH"))
    }

    fn cwd(&self) -> PathBuf {
        self.cwd
            .clone()
            .unwrap_or_else(|| PathBuf::from(current_dir_string()))
    }

    /// The first raw (unresolved) hit for `name`.
    fn which_one(&self, name: &str) -> Option<String> {
        match which::which_in(name, self.search_path(), self.cwd()) {
            Ok(found) => Some(normalize_path(&found)),
            Err(e) => {
                log::debug!("{name} not found on search path: {e}");
                None
            }
        }
    }

    /// Every raw (unresolved) hit for `name`, in search path order.
    fn which_all(&self, name: &str) -> Vec<String> {
        match which::which_in_all(name, self.search_path(), self.cwd()) {
            Ok(found) => found.map(|path| normalize_path(&path)).collect(),
            Err(e) => {
                log::debug!("{name} not found on search path: {e}");
                Vec::new()
            }
        }
    }

    /// The first match for `name`, resolved to the real binary.
    pub fn find(&self, name: &str) -> Option<String> {
        self.which_one(name).map(|hit| self.resolver.resolve(&hit))
    }

    /// Every match for `name`, each resolved to the real binary.
    pub fn find_all(&self, name: &str) -> Vec<String> {
        self.which_all(name)
            .iter()
            .map(|hit| self.resolver.resolve(hit))
            .collect()
    }

    /// The first match for `name`, or an error when there is none.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BinaryNotFound`] if nothing on the search path
    /// matches.
    pub fn find_required(&self, name: &str) -> Result<String> {
        self.find(name).ok_or_else(|| Error::BinaryNotFound {
            name: name.to_string(),
        })
    }

    /// Search for `name` according to `options`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BinaryNotFound`] when nothing matches and
    /// `options.nothrow` is false.
    pub fn find_binary(&self, name: &str, options: &FindOptions) -> Result<Option<BinMatch>> {
        let found = if options.all {
            Some(self.find_all(name))
                .filter(|paths| !paths.is_empty())
                .map(BinMatch::All)
        } else {
            self.find(name).map(BinMatch::One)
        };

        match found {
            Some(found) => Ok(Some(found)),
            None if options.nothrow => Ok(None),
            None => Err(Error::BinaryNotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Find the real `name`, preferring known install locations.
    ///
    /// The first of `common_paths` that exists wins. Otherwise the first
    /// search path hit is used, unless it lives in `node_modules/.bin`; then
    /// the first hit outside any `node_modules/.bin` is preferred.
    pub fn find_real_bin<S: AsRef<str>>(&self, name: &str, common_paths: &[S]) -> Option<String> {
        if let Some(common) = common_paths
            .iter()
            .map(AsRef::as_ref)
            .find(|candidate| self.resolver.fs().exists(candidate))
        {
            log::debug!("using known install location {common} for {name}");
            return Some(self.resolver.resolve(common));
        }

        let first = self.which_one(name)?;
        let chosen = if is_shadow_bin_path(first.as_str()) {
            self.which_all(name)
                .into_iter()
                .find(|hit| !is_shadow_bin_path(hit.as_str()))
                .unwrap_or(first)
        } else {
            first
        };
        Some(self.resolver.resolve(&chosen))
    }

    /// Find the real `name`, dispatching to the package manager specific
    /// lookups for npm, pnpm and yarn.
    pub fn find_real(&self, name: &str) -> Option<String> {
        match name {
            "npm" => self.find_real_npm(),
            "pnpm" => self.find_real_pnpm(),
            "yarn" => self.find_real_yarn(),
            _ => self.find_real_bin(name, &self.configured_paths(name)),
        }
    }

    fn configured_paths(&self, name: &str) -> Vec<String> {
        self.common_paths.get(name).cloned().unwrap_or_default()
    }

    fn with_guesses(&self, name: &str, guesses: Vec<Option<String>>) -> Vec<String> {
        let mut paths = self.configured_paths(name);
        paths.extend(guesses.into_iter().flatten());
        paths
    }

    /// Find the real npm.
    ///
    /// npm installed beside the `node` on the search path wins over the
    /// common install locations.
    pub fn find_real_npm(&self) -> Option<String> {
        let windows = self.style().is_windows();
        let beside_node = self.which_one("node").map(|node| {
            let dir = node.rsplit_once('/').map_or(".", |(dir, _)| dir).to_string();
            if windows {
                format!("{dir}/npm.cmd")
            } else {
                format!("{dir}/npm")
            }
        });

        let env = &self.install_env;
        let guesses = if windows {
            vec![
                beside_node,
                join(&env.appdata, "npm/npm.cmd"),
                Some("C:/Program Files/nodejs/npm.cmd".to_string()),
            ]
        } else {
            vec![
                beside_node,
                join(&env.home, ".volta/bin/npm"),
                Some("/usr/local/bin/npm".to_string()),
                Some("/usr/bin/npm".to_string()),
            ]
        };
        self.find_real_bin("npm", &self.with_guesses("npm", guesses))
    }

    /// Find the real pnpm.
    pub fn find_real_pnpm(&self) -> Option<String> {
        let env = &self.install_env;
        let guesses = if self.style().is_windows() {
            vec![
                join(&env.local_appdata, "pnpm/pnpm.exe"),
                join(&env.appdata, "npm/pnpm.cmd"),
            ]
        } else {
            let data_home = join(&env.xdg_data_home, "pnpm/pnpm")
                .or_else(|| join(&env.home, ".local/share/pnpm/pnpm"));
            vec![
                data_home,
                join(&env.home, "Library/pnpm/pnpm"),
                join(&env.home, ".volta/bin/pnpm"),
                Some("/usr/local/bin/pnpm".to_string()),
            ]
        };
        self.find_real_bin("pnpm", &self.with_guesses("pnpm", guesses))
    }

    /// Find the real yarn.
    pub fn find_real_yarn(&self) -> Option<String> {
        let env = &self.install_env;
        let guesses = if self.style().is_windows() {
            vec![
                join(&env.appdata, "npm/yarn.cmd"),
                join(&env.local_appdata, "Yarn/bin/yarn.cmd"),
            ]
        } else {
            vec![
                join(&env.home, ".yarn/bin/yarn"),
                join(&env.home, ".volta/bin/yarn"),
                Some("/usr/local/bin/yarn".to_string()),
                Some("/usr/bin/yarn".to_string()),
            ]
        };
        self.find_real_bin("yarn", &self.with_guesses("yarn", guesses))
    }
}

/// Whether a path lives under a `node_modules/.bin` directory, where it may
/// shadow a differently versioned global binary.
///
/// # Examples
///
/// ```
/// use realbin::shim::is_shadow_bin_path;
///
/// assert!(is_shadow_bin_path("/repo/node_modules/.bin/tsc"));
/// assert!(is_shadow_bin_path("C:\\repo\\node_modules\\.bin\\tsc.cmd"));
/// assert!(!is_shadow_bin_path("/usr/local/bin/tsc"));
/// assert!(!is_shadow_bin_path("/repo/node_modules/.bin"));
/// ```
pub fn is_shadow_bin_path<'a>(path: impl Into<PathLike<'a>>) -> bool {
    let normalized = normalize_path(path);
    let dir = normalized.rsplit_once('/').map_or("", |(dir, _)| dir);
    let segments: Vec<&str> = dir.split('/').collect();
    segments
        .windows(2)
        .any(|pair| pair[0] == "node_modules" && pair[1] == ".bin")
}

/// Search the process `PATH` for `name` on the native platform.
///
/// # Errors
///
/// Returns [`Error::BinaryNotFound`] when nothing matches and
/// `options.nothrow` is false.
pub fn find_binary(name: &str, options: &FindOptions) -> Result<Option<BinMatch>> {
    BinaryLocator::new().find_binary(name, options)
}
