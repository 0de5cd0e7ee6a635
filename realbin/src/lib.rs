#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # realbin
//!
//! Cross-platform path handling and real binary resolution for JavaScript
//! tooling.
//!
//! This library normalizes and compares paths the same way on every
//! platform, and finds the real executable behind the symlinks, Volta shims
//! and launcher scripts that package managers install.
//!
//! ## Core Types
//!
//! - [`PathLike`] and [`PathStyle`]: Path inputs and platform conventions
//! - [`ShimResolver`] and [`Resolution`]: Following wrappers to real files
//! - [`BinaryLocator`]: `PATH` search with shadow-bin handling
//! - [`Config`] and [`ConfigBuilder`]: YAML and environment configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use realbin::{normalize_path, is_path, PathStyle};
//!
//! assert_eq!(normalize_path("C:\\tools\\..\\bin\\node.exe"), "C:/bin/node.exe");
//! assert!(!is_path("@types/node"));
//! assert_eq!(PathStyle::Posix.relative_from("/", "/a/b", "/a/c"), "../c");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod shim;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{
    is_absolute, is_node_modules, is_path, is_relative, normalize_path, relative_path,
    resolve_path, PathLike, PathStyle,
};
pub use shim::{
    find_binary, is_shadow_bin_path, resolve_real_binary_path, BinMatch, BinaryLocator,
    FindOptions, Resolution, ShimKind, ShimResolver,
};
