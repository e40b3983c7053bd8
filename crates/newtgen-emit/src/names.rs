//! Name table generation.
//!
//! The table is a flat sequence of variable-length records scanned linearly
//! by the interpreter's identifier matcher: one discriminant byte, the name
//! bytes, a terminating zero. On a match the scanner yields the discriminant
//! byte as the classification result, so the encoding is the whole contract:
//! top bit set = keyword code, top bit clear = builtin ID.

use std::fmt::Write;

use newtgen_desc::{BuiltinKind, Registry};

/// Generate the packed name table array, sorted by name. Sorting exists for
/// deterministic output; the consumer scans linearly either way.
#[must_use]
pub fn gen_name_table(registry: &Registry) -> String {
    let mut s = String::from(
        "static const uint8_t NEWT_BUILTIN_NAMES_DECLARE(newt_builtin_names)[] = {\n",
    );

    for entry in registry.sorted() {
        match &entry.kind {
            BuiltinKind::Keyword { code } => write!(s, "\t{code} | 0x80, ").unwrap(),
            BuiltinKind::Function { id, .. } => write!(s, "\t{id}, ").unwrap(),
        }
        for c in entry.name.chars() {
            write!(s, "'{c}', ").unwrap();
        }
        s.push_str("0,\n");
    }

    s.push_str("};\n");
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_sorted_with_kind_byte() {
        let mut reg = Registry::new();
        reg.add_function("print", 1).unwrap();
        reg.add_keyword("if", "IF").unwrap();
        reg.add_function("len", 1).unwrap();

        let table = gen_name_table(&reg);
        let rows: Vec<&str> = table.lines().collect();

        assert_eq!(
            rows[0],
            "static const uint8_t NEWT_BUILTIN_NAMES_DECLARE(newt_builtin_names)[] = {"
        );
        // Sorted: if (keyword), len (id 2), print (id 1).
        assert_eq!(rows[1], "\tIF | 0x80, 'i', 'f', 0,");
        assert_eq!(rows[2], "\t2, 'l', 'e', 'n', 0,");
        assert_eq!(rows[3], "\t1, 'p', 'r', 'i', 'n', 't', 0,");
        assert_eq!(rows[4], "};");
    }

    #[test]
    fn empty_registry_yields_empty_table() {
        let table = gen_name_table(&Registry::new());
        assert!(table.contains("newt_builtin_names)[] = {\n};\n"));
    }
}
