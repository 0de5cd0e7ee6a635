//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

const BIN_NAME: &str = "realbin";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            eprintln!("# Generating {} completion script", self.shell);
            match self.shell {
                Shell::Bash => {
                    eprintln!("# Enable with:");
                    eprintln!("#   eval \"$(realbin completions bash)\"");
                }
                Shell::Zsh => {
                    eprintln!("# Install with:");
                    eprintln!("#   realbin completions zsh > ~/.zsh/completions/_realbin");
                }
                Shell::Fish => {
                    eprintln!("# Enable with:");
                    eprintln!("#   realbin completions fish | source");
                }
                Shell::PowerShell => {
                    eprintln!("# Enable with:");
                    eprintln!("#   realbin completions powershell | Out-String | Invoke-Expression");
                }
                _ => {}
            }
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
