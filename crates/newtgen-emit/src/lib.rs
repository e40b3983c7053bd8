//! C header emission for the Newt builtin-table generator.
//!
//! Generates the single `newt-builtin.h` artifact:
//! - Name table (packed `uint8_t` records for the identifier scanner)
//! - Forward declarations and dispatch table (builtin call machinery)
//! - Symbolic ID constants and the end-of-range sentinel
//!
//! The consumer selects between the two halves with the `NEWT_BUILTIN_DATA`
//! preprocessor conditional; here that is plain text produced by two
//! independently callable emitters composed in [`gen_artifact`].

mod artifact;
mod decls;
mod names;
mod naming;

pub use artifact::gen_artifact;
pub use decls::{gen_dispatch_table, gen_forward_decls, gen_id_constants};
pub use names::gen_name_table;
pub use naming::{cpp_name, func_field, func_name};
