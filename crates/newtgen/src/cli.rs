//! CLI definitions and argument types.

use std::path::PathBuf;

use clap::Parser;

/// Exit code for success.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for failure.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Parser)]
#[command(name = "newtgen")]
#[command(about = "Construct Newt builtin data - generates the builtin C header")]
#[command(version)]
pub struct Cli {
    /// Input files describing builtins
    #[arg(value_name = "FILE", required = true)]
    pub builtins: Vec<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress output (only show errors)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
