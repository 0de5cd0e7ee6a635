//! Finding the real binary behind a command.
//!
//! Package managers and version managers rarely put the real executable on
//! `PATH`. What is found there is usually one of:
//!
//! - a symlink into a package directory,
//! - a Volta shim that picks a tool version from JSON manifests,
//! - a generated launcher script (`.cmd`, `.ps1` or extensionless shell),
//! - an entry in a project's `node_modules/.bin`.
//!
//! [`BinaryLocator`] searches `PATH`, and [`ShimResolver`] follows these
//! indirections until it reaches a real file.
//!
//! # Examples
//!
//! ```no_run
//! use realbin::shim::{BinaryLocator, ShimResolver};
//!
//! let resolver = ShimResolver::new();
//! let trace = resolver.trace("/usr/local/bin/pnpm");
//! for hop in &trace.hops {
//!     println!("{}: {} -> {}", hop.kind, hop.from, hop.to);
//! }
//!
//! let npm = BinaryLocator::new().find_real_npm();
//! ```

pub mod fs;
pub mod launcher;
pub mod locate;
pub mod resolver;
mod types;
pub mod volta;

pub use fs::{FileSystem, OsFileSystem};
pub use launcher::{strategies_for, LauncherFormat, LauncherStrategy, ScriptFlavor, ToolFamily};
pub use locate::{find_binary, is_shadow_bin_path, BinMatch, BinaryLocator, FindOptions, InstallEnv};
pub use resolver::{resolve_real_binary_path, ShimResolver, DEFAULT_MAX_HOPS};
pub use types::{Hop, Resolution, ShimKind};
pub use volta::{NodePlatform, VoltaBinary, VoltaHome, VoltaPlatform};
