//! Main entry point for the realbin CLI.
//!
//! Commands:
//! - `normalize`, `classify`, `resolve`, `relative`: path inspection
//! - `which`: search path lookup
//! - `real-bin`, `find-real`: shim resolution
//! - `validate`: configuration checks
//! - `completions`: shell completion scripts

use clap::Parser;
use realbin_cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Route library diagnostics through the log facade
    let logger = realbin::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        eprintln!("WARN: logging unavailable: {e}");
    }

    let global = cli.global_options();
    let result = cli.command.execute(&global);

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
