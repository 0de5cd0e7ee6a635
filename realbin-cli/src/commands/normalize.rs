//! Command to normalize paths.

use crate::error::CliError;
use crate::utils::{emit, path_argument, path_style, GlobalOptions};
use clap::Args;
use realbin::path::normalize_str;
use serde::Serialize;

/// Print the normalized form of each path.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Paths to normalize (plain paths or file: URLs)
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

#[derive(Serialize)]
struct Normalized<'a> {
    input: &'a str,
    normalized: String,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let style = path_style(global)?;
        let results: Vec<Normalized<'_>> = self
            .paths
            .iter()
            .map(|input| Normalized {
                input: input.as_str(),
                normalized: normalize_str(&path_argument(input, style)),
            })
            .collect();

        emit(global.format, &results, || {
            results
                .iter()
                .map(|result| result.normalized.as_str())
                .collect::<Vec<_>>()
                .join("\n")
        })
    }
}
