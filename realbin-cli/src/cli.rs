//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    ClassifyCommand, CompletionsCommand, FindRealCommand, NormalizeCommand, RealBinCommand,
    RelativeCommand, ResolveCommand, ValidateCommand, WhichCommand,
};
use crate::utils::{GlobalOptions, OutputFormat};
use clap::{Parser, Subcommand};
use realbin::config::StyleSetting;
use std::path::PathBuf;

/// Inspect paths and find the real binaries behind package-manager shims.
#[derive(Parser)]
#[command(name = "realbin")]
#[command(
    version,
    about = "Inspect paths and resolve package-manager shims to real binaries",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path conventions to apply
    #[arg(long, value_enum, global = true)]
    pub style: Option<StyleSetting>,

    /// Configuration file to load instead of ~/.realbin/config.yaml
    #[arg(long, value_name = "PATH", global = true, env = "REALBIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// The options shared by every command.
    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions {
            verbose: self.verbose,
            quiet: self.quiet,
            style: self.style,
            config: self.config.clone(),
            format: self.format,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Normalize paths
    Normalize(NormalizeCommand),

    /// Classify a path
    Classify(ClassifyCommand),

    /// Resolve path segments to an absolute path
    Resolve(ResolveCommand),

    /// Compute the relative path between two paths
    Relative(RelativeCommand),

    /// Find a binary on the search path
    Which(WhichCommand),

    /// Resolve a binary path through its shims
    RealBin(RealBinCommand),

    /// Find the real binary of npm, pnpm, yarn or any tool
    FindReal(FindRealCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

impl Command {
    /// Run the selected command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), crate::error::CliError> {
        match self {
            Command::Normalize(cmd) => cmd.execute(global),
            Command::Classify(cmd) => cmd.execute(global),
            Command::Resolve(cmd) => cmd.execute(global),
            Command::Relative(cmd) => cmd.execute(global),
            Command::Which(cmd) => cmd.execute(global),
            Command::RealBin(cmd) => cmd.execute(global),
            Command::FindReal(cmd) => cmd.execute(global),
            Command::Validate(cmd) => cmd.execute(global),
            Command::Completions(cmd) => cmd.execute(global),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "realbin",
            "normalize",
            "a/b",
            "--style",
            "windows",
            "--format",
            "json",
        ])
        .unwrap();
        let global = cli.global_options();
        assert_eq!(global.style, Some(StyleSetting::Windows));
        assert_eq!(global.format, OutputFormat::Json);
    }

    #[test]
    fn test_real_bin_trace_flag() {
        let cli = Cli::try_parse_from(["realbin", "real-bin", "/usr/bin/node", "--trace"]).unwrap();
        assert!(matches!(cli.command, Command::RealBin(ref cmd) if cmd.trace));
    }
}
