//! Command to compute a relative path.

use crate::error::CliError;
use crate::utils::{emit, path_argument, path_style, GlobalOptions};
use clap::Args;

/// Print the path from FROM to TO.
///
/// Prints an empty line when both resolve to the same path.
#[derive(Args)]
pub struct RelativeCommand {
    /// Starting path
    #[arg(value_name = "FROM")]
    pub from: String,

    /// Target path
    #[arg(value_name = "TO")]
    pub to: String,
}

impl RelativeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let style = path_style(global)?;
        let from = path_argument(&self.from, style);
        let to = path_argument(&self.to, style);

        let relative = style.relative(&from, &to);
        emit(global.format, &relative, || relative.clone())
    }
}
