//! C-level name mangling for builtin entries.
//!
//! Descriptor names may be dotted (`time.sleep`); C identifiers use
//! underscores instead.

use newtgen_desc::VARIADIC_ARITY;

/// Symbolic constant name: `time.sleep` → `NEWT_BUILTIN_time_sleep`.
#[must_use]
pub fn cpp_name(name: &str) -> String {
    format!("NEWT_BUILTIN_{}", name.replace('.', "_"))
}

/// Implementing function name: `time.sleep` → `newt_builtin_time_sleep`.
#[must_use]
pub fn func_name(name: &str) -> String {
    format!("newt_builtin_{}", name.replace('.', "_"))
}

/// Dispatch union field selected by arity: `.func0`..`.func4`, or `.funcv`
/// for variadic builtins.
#[must_use]
pub fn func_field(arity: i8) -> String {
    if arity == VARIADIC_ARITY {
        ".funcv".to_owned()
    } else {
        format!(".func{arity}")
    }
}
