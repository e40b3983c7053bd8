//! Builtin entry model.

/// Largest ID a builtin may carry. The discriminant byte in the generated
/// name table reserves the top bit as the keyword marker, so callable
/// builtins must stay within 7 bits.
pub const MAX_BUILTIN_ID: u8 = 0x7F;

/// Largest fixed arity the dispatch union carries (`func0`..`func4`).
pub const MAX_ARITY: i8 = 4;

/// Arity sentinel for variadic builtins (explicit count plus `...`).
pub const VARIADIC_ARITY: i8 = -1;

/// Entry discriminant: a callable builtin or a scanner keyword.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuiltinKind {
    /// Callable builtin with a registry-assigned ID.
    Function { arity: i8, id: u8 },
    /// Reserved identifier carrying an opaque code instead of an ID. The
    /// code is a C identifier supplied by the interpreter's headers and is
    /// pasted into the output verbatim.
    Keyword { code: String },
}

/// One row of a descriptor file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuiltinEntry {
    /// Dotted/underscored identifier, unique within a build.
    pub name: String,
    pub kind: BuiltinKind,
}

impl BuiltinEntry {
    /// Whether this entry is a keyword rather than a callable builtin.
    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        matches!(self.kind, BuiltinKind::Keyword { .. })
    }

    /// Assigned ID, if this is a callable builtin.
    #[must_use]
    pub const fn id(&self) -> Option<u8> {
        match self.kind {
            BuiltinKind::Function { id, .. } => Some(id),
            BuiltinKind::Keyword { .. } => None,
        }
    }

    /// Declared arity, if this is a callable builtin.
    #[must_use]
    pub const fn arity(&self) -> Option<i8> {
        match self.kind {
            BuiltinKind::Function { arity, .. } => Some(arity),
            BuiltinKind::Keyword { .. } => None,
        }
    }
}
