//! Volta toolchain layout.
//!
//! Volta installs every tool version under `<home>/tools/image` and exposes
//! the user's pinned selection through a shim binary plus two kinds of JSON
//! manifest:
//!
//! - `tools/user/platform.json` holds the default Node, npm, pnpm and Yarn
//!   versions.
//! - `tools/user/bin/<name>.json` maps a package binary to the package that
//!   provides it.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::path::PathStyle;
use crate::shim::fs::FileSystem;
use crate::shim::types::ShimKind;

const VOLTA_DIR: &str = ".volta";

/// The user's default platform, from `platform.json`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct VoltaPlatform {
    /// The pinned Node toolchain.
    #[serde(default)]
    pub node: Option<NodePlatform>,
    /// The pinned pnpm version.
    #[serde(default)]
    pub pnpm: Option<String>,
    /// The pinned Yarn version.
    #[serde(default)]
    pub yarn: Option<String>,
}

/// Node and bundled npm versions.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct NodePlatform {
    /// The Node.js version.
    #[serde(default)]
    pub runtime: Option<String>,
    /// An npm version pinned separately from the one Node bundles.
    #[serde(default)]
    pub npm: Option<String>,
}

/// A package binary manifest, from `tools/user/bin/<name>.json`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct VoltaBinary {
    /// The package that provides the binary.
    #[serde(default)]
    pub package: Option<String>,
}

/// A Volta home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoltaHome {
    root: String,
}

impl VoltaHome {
    /// Use `root` as the Volta home.
    #[must_use]
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    /// Find the Volta home containing a normalized path.
    ///
    /// The home is the path up to and including its first `.volta` segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use realbin::shim::VoltaHome;
    ///
    /// let home = VoltaHome::containing("/home/me/.volta/bin/tsc").unwrap();
    /// assert_eq!(home.root(), "/home/me/.volta");
    /// assert!(VoltaHome::containing("/home/me/volta/bin/tsc").is_none());
    /// ```
    #[must_use]
    pub fn containing(path: &str) -> Option<Self> {
        let mut end = 0;
        for segment in path.split('/') {
            let segment_end = end + segment.len();
            if segment == VOLTA_DIR {
                return Some(Self::new(&path[..segment_end]));
            }
            end = segment_end + 1;
        }
        None
    }

    /// The home directory itself.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    fn join(&self, rest: &str) -> String {
        format!("{}/{rest}", self.root)
    }

    /// Read `tools/user/platform.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or malformed.
    pub fn platform<F: FileSystem>(&self, fs: &F) -> Result<VoltaPlatform> {
        read_json(fs, &self.join("tools/user/platform.json"))
    }

    /// Read `tools/user/bin/<name>.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or malformed.
    pub fn binary<F: FileSystem>(&self, fs: &F, name: &str) -> Result<VoltaBinary> {
        read_json(fs, &self.join(&format!("tools/user/bin/{name}.json")))
    }

    /// Candidate locations of the `npm` or `npx` CLI script, best first.
    #[must_use]
    pub fn npm_candidates(&self, platform: &VoltaPlatform, name: &str, style: PathStyle) -> Vec<String> {
        let mut candidates = Vec::new();
        let Some(node) = &platform.node else {
            return candidates;
        };

        if let Some(npm) = &node.npm {
            candidates.push(self.join(&format!("tools/image/npm/{npm}/bin/{name}-cli.js")));
        }
        if let Some(runtime) = &node.runtime {
            let modules = if style.is_windows() {
                "node_modules"
            } else {
                "lib/node_modules"
            };
            candidates.push(self.join(&format!(
                "tools/image/node/{runtime}/{modules}/npm/bin/{name}-cli.js"
            )));
        }
        candidates
    }

    /// Candidate locations of a binary provided by `package`, best first.
    #[must_use]
    pub fn package_candidates(&self, package: &str, name: &str, style: PathStyle) -> Vec<String> {
        let base = format!("tools/image/packages/{package}");
        if style.is_windows() {
            vec![
                self.join(&format!("{base}/bin/{name}.cmd")),
                self.join(&format!("{base}/{name}.cmd")),
                self.join(&format!("{base}/bin/{name}")),
            ]
        } else {
            vec![self.join(&format!("{base}/bin/{name}"))]
        }
    }

    /// Candidate location of a pinned pnpm or Yarn install.
    fn manager_candidate(&self, platform: &VoltaPlatform, name: &str, style: PathStyle) -> Option<String> {
        let version = match name {
            "pnpm" => platform.pnpm.as_ref()?,
            "yarn" => platform.yarn.as_ref()?,
            _ => return None,
        };
        let suffix = if style.is_windows() { ".cmd" } else { "" };
        Some(self.join(&format!("tools/image/{name}/{version}/bin/{name}{suffix}")))
    }

    /// Find the file a Volta shim named `name` runs.
    ///
    /// Returns `None` when the manifests are missing or the computed file
    /// does not exist.
    pub fn resolve<F: FileSystem>(
        &self,
        fs: &F,
        name: &str,
        style: PathStyle,
    ) -> Option<(ShimKind, String)> {
        if name == "npm" || name == "npx" {
            let platform = self.platform(fs).map_err(log_miss).ok()?;
            return self
                .npm_candidates(&platform, name, style)
                .into_iter()
                .find(|candidate| fs.is_file(candidate))
                .map(|path| (ShimKind::VoltaNpm, path));
        }

        if name == "pnpm" || name == "yarn" {
            if let Ok(platform) = self.platform(fs) {
                if let Some(path) = self
                    .manager_candidate(&platform, name, style)
                    .filter(|candidate| fs.is_file(candidate))
                {
                    return Some((ShimKind::VoltaUserShim, path));
                }
            }
        }

        let binary = self.binary(fs, name).map_err(log_miss).ok()?;
        let package = binary.package?;
        self.package_candidates(&package, name, style)
            .into_iter()
            .find(|candidate| fs.is_file(candidate))
            .map(|path| (ShimKind::VoltaUserShim, path))
    }
}

fn log_miss(err: Error) -> Error {
    log::debug!("volta manifest unavailable: {err}");
    err
}

fn read_json<F: FileSystem, T: for<'de> Deserialize<'de>>(fs: &F, path: &str) -> Result<T> {
    let contents = fs.read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|source| Error::Json {
        path: Path::new(path).to_path_buf(),
        source,
    })
}
