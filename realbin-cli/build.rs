//! Build script for realbin-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is described again here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("realbin")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect paths and resolve package-manager shims to real binaries")
        .long_about(
            "Normalize and compare paths the same way on every platform, and find the real \
             executable behind symlinks, Volta shims and npm/pnpm/yarn launcher scripts",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("style")
                .long("style")
                .help("Path conventions to apply")
                .value_parser(["auto", "posix", "windows"])
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file to load instead of ~/.realbin/config.yaml")
                .value_name("PATH")
                .global(true)
                .env("REALBIN_CONFIG"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(["text", "json"])
                .default_value("text")
                .global(true),
        )
        .subcommands(vec![
            Command::new("normalize")
                .about("Normalize paths")
                .long_about("Print the normalized form of each path or file: URL"),
            Command::new("classify")
                .about("Classify a path")
                .long_about("Show whether a path is absolute, relative, a path, or inside node_modules"),
            Command::new("resolve")
                .about("Resolve path segments to an absolute path")
                .long_about("Resolve segments right to left, anchoring at the current directory"),
            Command::new("relative")
                .about("Compute the relative path between two paths"),
            Command::new("which")
                .about("Find a binary on the search path")
                .long_about("Search PATH for a binary and resolve each hit to its real file"),
            Command::new("real-bin")
                .about("Resolve a binary path through its shims")
                .long_about("Follow symlinks, Volta shims and launcher scripts to the real binary"),
            Command::new("find-real")
                .about("Find the real binary of npm, pnpm, yarn or any tool"),
            Command::new("validate")
                .about("Validate a configuration file"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("realbin.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
