//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `normalize`: Normalize paths
//! - `classify`: Report how a path is classified
//! - `resolve`: Resolve segments to an absolute path
//! - `relative`: Relative path between two paths
//! - `which`: Find a binary on the search path
//! - `real_bin`: Resolve a binary path through its shims
//! - `find_real`: Find the real binary of a package manager or tool
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod classify;
pub mod completions;
pub mod find_real;
pub mod normalize;
pub mod real_bin;
pub mod relative;
pub mod resolve;
pub mod validate;
pub mod which;

pub use classify::ClassifyCommand;
pub use completions::CompletionsCommand;
pub use find_real::FindRealCommand;
pub use normalize::NormalizeCommand;
pub use real_bin::RealBinCommand;
pub use relative::RelativeCommand;
pub use resolve::ResolveCommand;
pub use validate::ValidateCommand;
pub use which::WhichCommand;
