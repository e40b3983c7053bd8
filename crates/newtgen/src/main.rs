//! newtgen CLI - Newt builtin-table generator.

mod cli;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use cli::{Cli, EXIT_FAILURE, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the generated header.
    let default_level = if cli.verbose {
        "newtgen=debug"
    } else if cli.quiet {
        "newtgen=error"
    } else {
        "newtgen=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(default_level.parse().unwrap()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match newtgen::generate(&cli.builtins, cli.output.as_deref()) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            error!(error = %e, "generation failed");
            EXIT_FAILURE
        }
    };

    std::process::exit(exit_code);
}
