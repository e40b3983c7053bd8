//! Declaration emission: forward declarations, the dispatch table, and the
//! symbolic ID constants.
//!
//! Keywords are skipped throughout; they exist only in the name table. The
//! dispatch rows are indexed by the same `NEWT_BUILTIN_*` constants the
//! declaration branch defines, so the table cannot drift from the ID
//! assignment even if a consumer re-sorts the descriptor files.

use std::fmt::Write;

use newtgen_desc::{BuiltinKind, Registry, VARIADIC_ARITY};

use crate::naming::{cpp_name, func_field, func_name};

/// Generate `extern newt_poly_t` forward declarations for every callable
/// builtin, in sorted-by-name order.
#[must_use]
pub fn gen_forward_decls(registry: &Registry) -> String {
    let mut s = String::new();
    for entry in registry.sorted() {
        let BuiltinKind::Function { arity, .. } = entry.kind else {
            continue;
        };
        writeln!(s, "extern newt_poly_t").unwrap();
        writeln!(s, "{}({});", func_name(&entry.name), param_list(arity)).unwrap();
        s.push('\n');
    }
    s
}

/// Generate the dispatch table mapping `id - 1` to arity and function
/// pointer, in sorted-by-name order.
#[must_use]
pub fn gen_dispatch_table(registry: &Registry) -> String {
    let mut s = String::from("const newt_builtin_t NEWT_BUILTIN_DECLARE(newt_builtins)[] = {\n");
    for entry in registry.sorted() {
        let BuiltinKind::Function { arity, .. } = entry.kind else {
            continue;
        };
        writeln!(s, "\t[{} - 1] = {{", cpp_name(&entry.name)).unwrap();
        writeln!(s, "\t\t.nformal = {arity},").unwrap();
        writeln!(s, "\t\t{} = {},", func_field(arity), func_name(&entry.name)).unwrap();
        s.push_str("\t},\n");
    }
    s.push_str("};\n");
    s
}

/// Generate one `#define NEWT_BUILTIN_<NAME> <id>` per callable builtin plus
/// the `NEWT_BUILTIN_END` sentinel (one past the last valid ID).
#[must_use]
pub fn gen_id_constants(registry: &Registry) -> String {
    let mut s = String::new();
    for entry in registry.sorted() {
        if let BuiltinKind::Function { id, .. } = entry.kind {
            writeln!(s, "#define {} {id}", cpp_name(&entry.name)).unwrap();
        }
    }
    writeln!(s, "#define NEWT_BUILTIN_END {}", registry.next_id()).unwrap();
    s
}

fn param_list(arity: i8) -> String {
    if arity == VARIADIC_ARITY {
        return "int nactuals, ...".to_owned();
    }
    if arity == 0 {
        return "void".to_owned();
    }
    let params: Vec<String> = (0..arity).map(|a| format!("newt_poly_t a{a}")).collect();
    params.join(", ")
}
