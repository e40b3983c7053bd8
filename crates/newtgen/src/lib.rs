//! Newtgen - builtin-table generator for the Newt embedded interpreter.
//!
//! Compiles flat descriptor files into the dual-mode `newt-builtin.h`
//! header: a packed name table for the identifier scanner plus symbolic
//! constants and a dispatch table for the builtin call machinery.
//!
//! # Example
//!
//! ```ignore
//! let header = newtgen::generate_to_string(&["newt.builtin".into()])?;
//! ```

// Re-export from sub-crates
pub use newtgen_desc::{BuiltinEntry, BuiltinKind, DescError, Registry};
pub use newtgen_emit::gen_artifact;

mod driver;
pub use driver::*;

use thiserror::Error;

/// Generator errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("descriptor error: {0}")]
    Desc(#[from] DescError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
