//! Generation pipeline - descriptors → registry → header.
//!
//! Two linear phases: LOAD parses every input file into one registry in
//! argument order, EMIT assembles the whole artifact in memory and writes
//! it once. A parse failure aborts before anything is written; file output
//! goes through a temp file in the destination directory so a failed run
//! never leaves a partial header behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use newtgen_desc::{Registry, load_file};
use newtgen_emit::gen_artifact;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::Result;

/// Load every descriptor file, in order, into one registry.
///
/// # Errors
/// Any `DescError` from reading or parsing an input.
pub fn load_descriptors(inputs: &[PathBuf]) -> Result<Registry> {
    let mut registry = Registry::new();
    for path in inputs {
        load_file(path, &mut registry)?;
    }
    info!(
        files = inputs.len(),
        builtins = registry.next_id() - 1,
        entries = registry.entries().len(),
        "descriptors loaded"
    );
    Ok(registry)
}

/// Generate the builtin header for the given descriptor files.
///
/// # Errors
/// Any `DescError` from the load phase.
pub fn generate_to_string(inputs: &[PathBuf]) -> Result<String> {
    let registry = load_descriptors(inputs)?;
    Ok(gen_artifact(&registry))
}

/// Generate the builtin header and write it to `output`, or to stdout when
/// no output path is given.
///
/// # Errors
/// Any `DescError` from the load phase, or an IO error writing the output.
pub fn generate(inputs: &[PathBuf], output: Option<&Path>) -> Result<()> {
    let artifact = generate_to_string(inputs)?;
    match output {
        Some(path) => {
            write_atomic(path, &artifact)?;
            info!(output = %path.display(), bytes = artifact.len(), "header written");
        }
        None => {
            std::io::stdout().write_all(artifact.as_bytes())?;
            debug!(bytes = artifact.len(), "header written to stdout");
        }
    }
    Ok(())
}

/// Write via a temp file in the destination directory, renamed into place.
fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
