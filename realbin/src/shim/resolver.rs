//! Shim resolution.
//!
//! [`ShimResolver`] follows the wrappers package managers and version
//! managers put in front of real binaries. Each pass over a path tries, in
//! order:
//!
//! 1. repairing a malformed `node_modules/.bin` entry (Posix style only),
//! 2. Volta's manifests (once per call),
//! 3. launcher script parsing,
//! 4. the OS realpath.
//!
//! The first step that rewrites the path starts a new pass. Resolution stops
//! when no step applies, when a rewrite revisits a path, or after
//! `max_hops` rewrites. It never fails; the worst case is the normalized
//! input.

use std::collections::HashSet;

use crate::path::algebra::current_dir_string;
use crate::path::{normalize_str, PathLike, PathStyle};
use crate::shim::fs::{FileSystem, OsFileSystem};
use crate::shim::launcher::{strategies_for, ScriptFlavor, ToolFamily};
use crate::shim::types::{Hop, Resolution, ShimKind};
use crate::shim::volta::VoltaHome;

/// Default maximum number of indirections followed in one call.
pub const DEFAULT_MAX_HOPS: usize = 10;

/// Tools whose CI setup action can write a nested `.bin/<name>/bin/` path.
const SHADOW_REPAIR_TOOLS: &[&str] = &["pnpm", "yarn"];

/// Follows shims to the real binary they run.
///
/// # Examples
///
/// ```
/// use realbin::shim::ShimResolver;
/// use realbin::path::PathStyle;
///
/// let resolver = ShimResolver::new()
///     .with_style(PathStyle::Posix)
///     .with_max_hops(4);
///
/// // Nothing exists at this path, so it comes back normalized.
/// assert_eq!(resolver.resolve("/no/such/dir/../tool"), "/no/such/tool");
/// ```
#[derive(Debug, Clone)]
pub struct ShimResolver<F = OsFileSystem> {
    fs: F,
    style: PathStyle,
    max_hops: usize,
}

impl ShimResolver<OsFileSystem> {
    /// Create a resolver for the native platform backed by the real
    /// filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fs: OsFileSystem,
            style: PathStyle::native(),
            max_hops: DEFAULT_MAX_HOPS,
        }
    }
}

impl Default for ShimResolver<OsFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> ShimResolver<F> {
    /// Use a different filesystem.
    #[must_use]
    pub fn with_fs<G: FileSystem>(self, fs: G) -> ShimResolver<G> {
        ShimResolver {
            fs,
            style: self.style,
            max_hops: self.max_hops,
        }
    }

    /// Set the path style.
    #[must_use]
    pub fn with_style(mut self, style: PathStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the maximum number of indirections followed.
    ///
    /// Zero disables resolution; inputs are only normalized.
    #[must_use]
    pub fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = max_hops;
        self
    }

    /// The path style in use.
    #[must_use]
    pub fn style(&self) -> PathStyle {
        self.style
    }

    /// The maximum number of indirections followed.
    #[must_use]
    pub fn max_hops(&self) -> usize {
        self.max_hops
    }

    /// The filesystem in use.
    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Resolve `path` to the real binary it runs.
    pub fn resolve<'a>(&self, path: impl Into<PathLike<'a>>) -> String {
        self.trace(path).path
    }

    /// Resolve `path`, recording every indirection followed.
    pub fn trace<'a>(&self, path: impl Into<PathLike<'a>>) -> Resolution {
        let input = normalize_str(&path.into().to_path_string(self.style));
        let mut resolution = Resolution::unresolved(input);
        let mut visited = HashSet::from([self.fold(&resolution.path)]);
        let mut volta_checked = false;

        while resolution.hops.len() < self.max_hops {
            let current = resolution.path.as_str();

            let mut step = self.repair_shadow_bin(current);
            if step.is_none() && !volta_checked {
                volta_checked = true;
                step = self.follow_volta(current);
            }
            if step.is_none() {
                step = self.follow_launcher(current);
            }
            if step.is_none() {
                step = self.follow_symlink(current);
            }

            let Some((kind, next)) = step else {
                break;
            };
            if !visited.insert(self.fold(&next)) {
                log::debug!("{kind} step from {current} revisits {next}, stopping");
                break;
            }
            log::debug!("followed {kind}: {current} -> {next}");
            let from = std::mem::replace(&mut resolution.path, next.clone());
            resolution.hops.push(Hop {
                kind,
                from,
                to: next,
            });
        }

        if resolution.hops.len() >= self.max_hops && self.max_hops > 0 {
            log::debug!(
                "stopped after {} hops at {}",
                self.max_hops,
                resolution.path
            );
        }
        resolution
    }

    fn fold(&self, path: &str) -> String {
        if self.style.is_windows() {
            path.to_ascii_lowercase()
        } else {
            path.to_string()
        }
    }

    /// Redirect `…/.bin/pnpm/bin/pnpm.cjs` to the `…/.bin/pnpm` script.
    fn repair_shadow_bin(&self, current: &str) -> Option<(ShimKind, String)> {
        if self.style.is_windows() {
            return None;
        }
        for name in SHADOW_REPAIR_TOOLS {
            for ext in ["cjs", "js"] {
                let suffix = format!("/.bin/{name}/bin/{name}.{ext}");
                let Some(head) = current.strip_suffix(&suffix) else {
                    continue;
                };
                let repaired = format!("{head}/.bin/{name}");
                if !self.fs.is_file(current) && self.fs.is_file(&repaired) {
                    return Some((ShimKind::ShadowBin, repaired));
                }
                return None;
            }
        }
        None
    }

    fn follow_volta(&self, current: &str) -> Option<(ShimKind, String)> {
        let home = VoltaHome::containing(current)?;
        let (stem, _) = split_name(current);
        if stem == "node" {
            return None;
        }
        home.resolve(&self.fs, &stem, self.style)
            .map(|(kind, path)| (kind, normalize_str(&path)))
    }

    fn follow_launcher(&self, current: &str) -> Option<(ShimKind, String)> {
        let (stem, extension) = split_name(current);
        let family = ToolFamily::of(&stem);
        let dir = parent_dir(current);

        let flavor = if self.style.is_windows() {
            if !matches!(extension.as_str(), "" | "cmd" | "ps1" | "exe") {
                return None;
            }
            // npm wrappers, including `.exe` ones, follow the cmd layout.
            if matches!(family, ToolFamily::Npm | ToolFamily::Npx) {
                let bundled = format!("{dir}/node_modules/npm/bin/{stem}-cli.js");
                if self.fs.is_file(&bundled) {
                    let wrapper =
                        ScriptFlavor::from_extension(&extension).unwrap_or(ScriptFlavor::Cmd);
                    return Some((ShimKind::Launcher(wrapper), normalize_str(&bundled)));
                }
            }
            ScriptFlavor::from_extension(&extension)?
        } else {
            if !extension.is_empty() || family == ToolFamily::Other {
                return None;
            }
            ScriptFlavor::Sh
        };

        let script = match self.fs.read_to_string(current) {
            Ok(script) => script,
            Err(e) => {
                log::debug!("cannot read launcher candidate {current}: {e}");
                return None;
            }
        };

        let (strategy, relative) = strategies_for(self.style, family, flavor)
            .into_iter()
            .find_map(|strategy| strategy.extract(&script).map(|found| (strategy, found)))?;
        log::debug!("{current} matched launcher strategy {strategy}");

        let target = self
            .style
            .resolve_from(&current_dir_string(), &[dir, relative.as_str()]);
        Some((ShimKind::Launcher(flavor), target))
    }

    fn follow_symlink(&self, current: &str) -> Option<(ShimKind, String)> {
        match self.fs.canonicalize(current) {
            Ok(real) => {
                let real = normalize_str(&real);
                if self.fold(&real) == self.fold(current) {
                    None
                } else {
                    Some((ShimKind::Symlink, real))
                }
            }
            Err(e) => {
                log::debug!("realpath failed for {current}: {e}");
                None
            }
        }
    }
}

/// The directory part of a normalized path.
fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(index) => &path[..index],
        None => ".",
    }
}

/// The lowercase stem and extension of a normalized path's file name.
fn split_name(path: &str) -> (String, String) {
    let name = path.rsplit('/').next().unwrap_or(path).to_ascii_lowercase();
    match name.rfind('.') {
        Some(index) if index > 0 => (name[..index].to_string(), name[index + 1..].to_string()),
        _ => (name, String::new()),
    }
}

/// Resolve a binary path to the real file it runs, on the native platform.
///
/// # Examples
///
/// ```
/// use realbin::resolve_real_binary_path;
///
/// // Missing files degrade to the normalized input.
/// let resolved = resolve_real_binary_path("/definitely/missing/./bin/tool");
/// assert!(resolved.ends_with("definitely/missing/bin/tool"));
/// ```
pub fn resolve_real_binary_path<'a>(path: impl Into<PathLike<'a>>) -> String {
    ShimResolver::new().resolve(path)
}
