//! Descriptor line parser.
//!
//! Classification is deliberately shallow: the first character decides
//! comment vs. entry, and the first character of `param` decides keyword
//! vs. arity. Anything that fits neither shape aborts the run, because the
//! two emitted artifacts must stay mutually consistent and a partially
//! parsed registry cannot guarantee that.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::entry::{MAX_ARITY, VARIADIC_ARITY};
use crate::registry::Registry;
use crate::{DescError, Result};

/// Read a descriptor file and accumulate its entries into `registry`.
///
/// # Errors
/// `MissingInput` if the file cannot be read, or any parse error from
/// [`parse_source`].
pub fn load_file(path: &Path, registry: &mut Registry) -> Result<()> {
    let text = fs::read_to_string(path).map_err(|source| DescError::MissingInput {
        path: path.to_path_buf(),
        source,
    })?;
    parse_source(path, &text, registry)?;
    debug!(path = %path.display(), entries = registry.entries().len(), "loaded descriptors");
    Ok(())
}

/// Parse descriptor text, accumulating into `registry`. `path` is used only
/// for error reporting.
///
/// # Errors
/// `MalformedLine` for lines that fit neither the comment nor the
/// `name, param` shape; `DuplicateName`/`TooManyBuiltins` from registration.
pub fn parse_source(path: &Path, text: &str, registry: &mut Registry) -> Result<()> {
    for (idx, line) in text.lines().enumerate() {
        parse_line(path, idx + 1, line, registry)?;
    }
    Ok(())
}

fn parse_line(path: &Path, lineno: usize, line: &str, registry: &mut Registry) -> Result<()> {
    if line.starts_with('#') {
        registry.push_header(line);
        return Ok(());
    }
    if line.is_empty() {
        return Ok(());
    }

    let Some((name, param)) = line.split_once(',') else {
        return Err(malformed(path, lineno, "expected `name, param`"));
    };
    let name = name.trim();
    let param = param.trim();
    if name.is_empty() {
        return Err(malformed(path, lineno, "empty name"));
    }

    match param.chars().next() {
        None => Err(malformed(path, lineno, "empty parameter")),
        Some(c) if c.is_alphabetic() => registry.add_keyword(name, param),
        Some(_) => {
            let arity: i8 = param.parse().map_err(|_| {
                malformed(path, lineno, format!("`{param}` is neither an arity nor a keyword code"))
            })?;
            if !(VARIADIC_ARITY..=MAX_ARITY).contains(&arity) {
                return Err(malformed(
                    path,
                    lineno,
                    format!("arity {arity} out of range ({VARIADIC_ARITY}..={MAX_ARITY})"),
                ));
            }
            registry.add_function(name, arity).map(|_| ())
        }
    }
}

fn malformed(path: &Path, line: usize, reason: impl Into<String>) -> DescError {
    DescError::MalformedLine {
        path: path.to_path_buf(),
        line,
        reason: reason.into(),
    }
}
