//! Descriptor parsing for the Newt builtin-table generator.
//!
//! A descriptor file is a flat, line-oriented listing of the interpreter's
//! built-in operations. Each line is either a `#` comment (passed through to
//! the generated header) or `name, param`, where `param` is an arity
//! (`-1` = variadic) or an identifier-like keyword code.
//!
//! Parsed entries accumulate into a [`Registry`], which owns the builtin ID
//! counter and the views the emitters read.

mod entry;
mod parser;
mod registry;

pub use entry::{BuiltinEntry, BuiltinKind, MAX_ARITY, MAX_BUILTIN_ID, VARIADIC_ARITY};
pub use parser::{load_file, parse_source};
pub use registry::Registry;

use std::path::PathBuf;

use thiserror::Error;

/// Descriptor errors. All of them abort the run; no artifact is written.
#[derive(Error, Debug)]
pub enum DescError {
    #[error("{path}:{line}: malformed descriptor line: {reason}", path = .path.display())]
    MalformedLine {
        path: PathBuf,
        line: usize,
        reason: String,
    },
    #[error("duplicate builtin name: {name}")]
    DuplicateName { name: String },
    #[error("too many builtins: {name} would take an ID past {MAX_BUILTIN_ID}")]
    TooManyBuiltins { name: String },
    #[error("cannot read {path}: {source}", path = .path.display())]
    MissingInput {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DescError>;
