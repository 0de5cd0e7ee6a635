//! Command to find the real binary of a tool.

use crate::error::CliError;
use crate::utils::{emit, load_configuration, GlobalOptions};
use clap::Args;

/// Find the real binary of npm, pnpm or yarn, checking their usual install
/// locations, or of any other tool on the search path.
#[derive(Args)]
pub struct FindRealCommand {
    /// Tool name
    #[arg(value_name = "NAME")]
    pub name: String,
}

impl FindRealCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let locator = config.binary_locator();

        let real = locator
            .find_real(&self.name)
            .ok_or_else(|| CliError::NotFound(format!("no real binary found for {}", self.name)))?;

        emit(global.format, &real, || real.clone())
    }
}
