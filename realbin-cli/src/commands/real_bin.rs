//! Command to resolve a binary through its shims.

use crate::error::CliError;
use crate::utils::{emit, load_configuration, path_argument, GlobalOptions};
use clap::Args;

/// Follow symlinks, Volta shims and launcher scripts to the real binary.
///
/// Paths that cannot be followed are printed normalized.
#[derive(Args)]
pub struct RealBinCommand {
    /// Binary path (plain path or file: URL)
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Also print every followed step
    #[arg(long)]
    pub trace: bool,
}

impl RealBinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let resolver = config.shim_resolver();
        let path = path_argument(&self.path, resolver.style());

        let resolution = resolver.trace(&path);
        log::debug!("{} resolved in {} hop(s)", path, resolution.hops.len());

        if !self.trace {
            return emit(global.format, &resolution.path, || resolution.path.clone());
        }

        emit(global.format, &resolution, || {
            let mut lines: Vec<String> = resolution
                .hops
                .iter()
                .map(|hop| format!("{}: {} -> {}", hop.kind, hop.from, hop.to))
                .collect();
            lines.push(resolution.path.clone());
            lines.join("\n")
        })
    }
}
