//! Command to resolve path segments.

use crate::error::CliError;
use crate::utils::{emit, path_argument, path_style, GlobalOptions};
use clap::Args;

/// Resolve segments right to left into an absolute, normalized path.
///
/// Relative results are anchored at the current directory.
#[derive(Args)]
pub struct ResolveCommand {
    /// Path segments
    #[arg(value_name = "SEGMENT", required = true)]
    pub segments: Vec<String>,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let style = path_style(global)?;
        let segments: Vec<String> = self
            .segments
            .iter()
            .map(|segment| path_argument(segment, style))
            .collect();

        let resolved = style.resolve(&segments);
        emit(global.format, &resolved, || resolved.clone())
    }
}
