//! Command to classify a path.

use crate::error::CliError;
use crate::utils::{emit, path_argument, path_style, GlobalOptions};
use clap::Args;
use realbin::is_node_modules;
use serde::Serialize;

/// Show whether a path is absolute, relative, a path at all, or inside
/// `node_modules`.
#[derive(Args)]
pub struct ClassifyCommand {
    /// Path to classify
    #[arg(value_name = "PATH")]
    pub path: String,
}

#[derive(Serialize)]
struct Classification {
    absolute: bool,
    relative: bool,
    path: bool,
    node_modules: bool,
}

impl ClassifyCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let style = path_style(global)?;
        let path = path_argument(&self.path, style);

        let classification = Classification {
            absolute: style.is_absolute(&path),
            relative: style.is_relative(&path),
            path: style.is_path(&path),
            node_modules: is_node_modules(&path),
        };

        emit(global.format, &classification, || {
            format!(
                "absolute: {}\nrelative: {}\npath: {}\nnode_modules: {}",
                classification.absolute,
                classification.relative,
                classification.path,
                classification.node_modules
            )
        })
    }
}
