//! Builtin registry: insertion-ordered entries plus the ID counter.
//!
//! IDs are handed out in first-seen order across every input file, while the
//! emitters read an alphabetical view. The two orderings are deliberately
//! decoupled: first-seen order keeps IDs stable for external references,
//! alphabetical emission keeps generated diffs readable.

use std::collections::HashSet;

use tracing::trace;

use crate::entry::{BuiltinEntry, BuiltinKind, MAX_BUILTIN_ID};
use crate::{DescError, Result};

/// First ID handed out; 0 is never a valid builtin ID.
const FIRST_BUILTIN_ID: u8 = 1;

/// Accumulated descriptor state for one generator run.
#[derive(Debug)]
pub struct Registry {
    entries: Vec<BuiltinEntry>,
    headers: Vec<String>,
    names: HashSet<String>,
    next_id: u8,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            headers: Vec::new(),
            names: HashSet::new(),
            next_id: FIRST_BUILTIN_ID,
        }
    }

    /// Register a callable builtin, assigning it the next ID.
    ///
    /// # Errors
    /// `DuplicateName` if the name is already registered, `TooManyBuiltins`
    /// if the assigned ID would collide with the keyword marker bit.
    pub fn add_function(&mut self, name: impl Into<String>, arity: i8) -> Result<u8> {
        let name = name.into();
        self.claim_name(&name)?;
        if self.next_id > MAX_BUILTIN_ID {
            return Err(DescError::TooManyBuiltins { name });
        }
        let id = self.next_id;
        self.next_id += 1;
        trace!(name = %name, id, arity, "registered builtin");
        self.entries.push(BuiltinEntry {
            name,
            kind: BuiltinKind::Function { arity, id },
        });
        Ok(id)
    }

    /// Register a keyword. Keywords never consume an ID.
    ///
    /// # Errors
    /// `DuplicateName` if the name is already registered.
    pub fn add_keyword(&mut self, name: impl Into<String>, code: impl Into<String>) -> Result<()> {
        let name = name.into();
        let code = code.into();
        self.claim_name(&name)?;
        trace!(name = %name, code = %code, "registered keyword");
        self.entries.push(BuiltinEntry {
            name,
            kind: BuiltinKind::Keyword { code },
        });
        Ok(())
    }

    /// Capture a `#` comment line for pass-through emission.
    pub fn push_header(&mut self, line: &str) {
        self.headers.push(line.to_owned());
    }

    /// Entries in insertion order (the order IDs were assigned in).
    #[must_use]
    pub fn entries(&self) -> &[BuiltinEntry] {
        &self.entries
    }

    /// Captured comment lines in file order.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Entries sorted by name. The sort is stable, so equal names would keep
    /// insertion order; equal names cannot occur once registration succeeds.
    #[must_use]
    pub fn sorted(&self) -> Vec<&BuiltinEntry> {
        let mut view: Vec<&BuiltinEntry> = self.entries.iter().collect();
        view.sort_by(|a, b| a.name.cmp(&b.name));
        view
    }

    /// One past the highest assigned ID; the `NEWT_BUILTIN_END` sentinel.
    #[must_use]
    pub const fn next_id(&self) -> u8 {
        self.next_id
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn claim_name(&mut self, name: &str) -> Result<()> {
        if !self.names.insert(name.to_owned()) {
            return Err(DescError::DuplicateName {
                name: name.to_owned(),
            });
        }
        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
