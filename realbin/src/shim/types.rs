//! Result types for shim resolution.

use std::fmt;

use serde::Serialize;

use crate::shim::launcher::ScriptFlavor;

/// The kind of indirection a single resolution step followed.
///
/// A file can be more than one of these at once; a launcher script may
/// itself be a symlink, for example. The kind records which step fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShimKind {
    /// A real executable; nothing to follow.
    RealExecutable,
    /// A symbolic link, followed with the OS realpath.
    Symlink,
    /// A Volta shim for a user-installed tool or package manager.
    VoltaUserShim,
    /// A Volta shim for the `npm` or `npx` bundled with the pinned toolchain.
    VoltaNpm,
    /// A generated launcher script.
    Launcher(ScriptFlavor),
    /// A malformed `node_modules/.bin` entry redirected to the real script.
    ShadowBin,
}

impl fmt::Display for ShimKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RealExecutable => write!(f, "real-executable"),
            Self::Symlink => write!(f, "symlink"),
            Self::VoltaUserShim => write!(f, "volta-user-shim"),
            Self::VoltaNpm => write!(f, "volta-npm"),
            Self::Launcher(flavor) => write!(f, "launcher({flavor})"),
            Self::ShadowBin => write!(f, "shadow-bin"),
        }
    }
}

/// One followed indirection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hop {
    /// What kind of indirection this was.
    pub kind: ShimKind,
    /// The normalized path before the step.
    pub from: String,
    /// The normalized path after the step.
    pub to: String,
}

/// The outcome of resolving a binary path.
///
/// `path` is always a normalized path, even when nothing on disk matched.
///
/// # Examples
///
/// ```
/// use realbin::shim::{Resolution, ShimKind};
///
/// let resolution = Resolution::unresolved("/usr/bin/env".to_string());
/// assert_eq!(resolution.kind(), ShimKind::RealExecutable);
/// assert!(!resolution.is_shim());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The final path.
    pub path: String,
    /// Every indirection followed, in order.
    pub hops: Vec<Hop>,
}

impl Resolution {
    /// A resolution that followed nothing.
    #[must_use]
    pub fn unresolved(path: String) -> Self {
        Self {
            path,
            hops: Vec::new(),
        }
    }

    /// The kind of the first indirection, which describes the input file.
    #[must_use]
    pub fn kind(&self) -> ShimKind {
        self.hops
            .first()
            .map_or(ShimKind::RealExecutable, |hop| hop.kind)
    }

    /// Whether any indirection was followed.
    #[must_use]
    pub fn is_shim(&self) -> bool {
        !self.hops.is_empty()
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(ShimKind::VoltaNpm.to_string(), "volta-npm");
        assert_eq!(
            ShimKind::Launcher(ScriptFlavor::Cmd).to_string(),
            "launcher(cmd)"
        );
    }

    #[test]
    fn test_resolution_kind_is_first_hop() {
        let resolution = Resolution {
            path: "/real".to_string(),
            hops: vec![
                Hop {
                    kind: ShimKind::Launcher(ScriptFlavor::Sh),
                    from: "/a".to_string(),
                    to: "/b".to_string(),
                },
                Hop {
                    kind: ShimKind::Symlink,
                    from: "/b".to_string(),
                    to: "/real".to_string(),
                },
            ],
        };
        assert_eq!(resolution.kind(), ShimKind::Launcher(ScriptFlavor::Sh));
        assert!(resolution.is_shim());
        assert_eq!(resolution.to_string(), "/real");
    }

    #[test]
    fn test_resolution_serializes_kinds() {
        let hop = Hop {
            kind: ShimKind::ShadowBin,
            from: "/x".to_string(),
            to: "/y".to_string(),
        };
        let json = serde_json::to_value(&hop).unwrap();
        assert_eq!(json["kind"], "shadow-bin");
        assert_eq!(json["to"], "/y");
    }
}
