//! Whole-artifact assembly.
//!
//! The generated header is consumed two ways: compiled with
//! `NEWT_BUILTIN_DATA` defined it provides the name table and dispatch
//! table; without it, the pass-through header comments and the symbolic ID
//! constants. Both halves come from one registry, which is what keeps the
//! name-table discriminant bytes and the dispatch indices consistent.

use std::fmt::Write;

use newtgen_desc::Registry;
use tracing::debug;

use crate::decls::{gen_dispatch_table, gen_forward_decls, gen_id_constants};
use crate::names::gen_name_table;

/// Overridable symbol-naming macro for the name table, defaulting to
/// identity. The interpreter overrides it to place the table in flash.
const NAMES_DECLARE_PROLOGUE: &str = r"#ifndef NEWT_BUILTIN_NAMES_DECLARE
#define NEWT_BUILTIN_NAMES_DECLARE(n) n
#endif
";

/// Overridable naming macro for the dispatch table plus the default
/// field-access macros consumers use to read its rows.
const DECLARE_PROLOGUE: &str = r"#ifndef NEWT_BUILTIN_DECLARE
#define NEWT_BUILTIN_DECLARE(n) n
#define NEWT_BUILTIN_NFORMAL(b) ((b)->nformal)
#define NEWT_BUILTIN_FUNC0(b) ((b)->func0)
#define NEWT_BUILTIN_FUNC1(b) ((b)->func1)
#define NEWT_BUILTIN_FUNC2(b) ((b)->func2)
#define NEWT_BUILTIN_FUNC3(b) ((b)->func3)
#define NEWT_BUILTIN_FUNC4(b) ((b)->func4)
#endif
";

/// Generate the complete dual-mode header.
#[must_use]
pub fn gen_artifact(registry: &Registry) -> String {
    debug!(
        entries = registry.entries().len(),
        next_id = registry.next_id(),
        "assembling builtin header"
    );

    let mut s = String::from("#ifdef NEWT_BUILTIN_DATA\n");

    s.push_str(NAMES_DECLARE_PROLOGUE);
    s.push_str(&gen_name_table(registry));
    s.push('\n');
    s.push_str(DECLARE_PROLOGUE);
    s.push_str(&gen_forward_decls(registry));
    s.push_str(&gen_dispatch_table(registry));

    s.push_str("\n#else /* NEWT_BUILTIN_DATA */\n");

    for line in registry.headers() {
        writeln!(s, "{line}").unwrap();
    }
    s.push_str(&gen_id_constants(registry));

    s.push_str("#endif /* NEWT_BUILTIN_DATA */\n");
    s
}
