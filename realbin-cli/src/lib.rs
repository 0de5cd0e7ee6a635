//! Library exports for realbin-cli.
//!
//! The binary is a thin wrapper around these modules; exposing them lets
//! tests and tooling reach the CLI definition directly.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
