//! Command to find a binary on the search path.

use crate::error::CliError;
use crate::utils::{emit, load_configuration, GlobalOptions};
use clap::Args;
use realbin::FindOptions;

/// Find a binary on the search path and resolve it to its real file.
#[derive(Args)]
pub struct WhichCommand {
    /// Binary name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Print every match instead of the first
    #[arg(long)]
    pub all: bool,
}

impl WhichCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let locator = config.binary_locator();

        let options = FindOptions {
            all: self.all,
            ..Default::default()
        };
        let matches = locator
            .find_binary(&self.name, &options)?
            .map(realbin::BinMatch::into_vec)
            .unwrap_or_default();

        if matches.is_empty() {
            return Err(CliError::NotFound(format!(
                "{} not found on the search path",
                self.name
            )));
        }

        emit(global.format, &matches, || matches.join("\n"))
    }
}
