//! Bindings and parse-tree tooling for the libpg_query SQL engine.
//!
//! The native library is loaded at runtime (see [`native`]); every query
//! operation goes through it, so results match the real PostgreSQL grammar
//! exactly. On top of the raw operations this crate layers a typed facade
//! over the protobuf parse tree ([`NodeRef`]), traversal ([`walk`],
//! [`Visitor`], [`Visit`]), extraction helpers, and statement rewrites
//! ([`to_drop`], [`ensure_or_replace`]).
//!
//! ```no_run
//! let tree = postgast::parse("SELECT id FROM users WHERE active")?;
//! assert_eq!(postgast::extract_tables(&tree), ["users"]);
//! assert_eq!(postgast::deparse(&tree)?, "SELECT id FROM users WHERE active");
//! # Ok::<(), postgast::Error>(())
//! ```

pub mod error;
pub mod helpers;
pub mod native;
pub mod node;
pub mod proto;
pub mod surgery;
pub mod walk;

mod deparse;
mod fingerprint;
mod normalize;
mod parse;
mod plpgsql;
mod scan;
mod split;

pub use deparse::deparse;
pub use error::{Error, NativeError, Result};
pub use fingerprint::{fingerprint, Fingerprint};
pub use helpers::{extract_columns, extract_functions, extract_tables, find_nodes};
pub use node::{Child, NodeRef, NodeTag};
pub use normalize::normalize;
pub use parse::{parse, parse_json};
pub use plpgsql::parse_plpgsql;
pub use proto::{ParseResult, ScanResult, ScanToken};
pub use scan::scan;
pub use split::{split, split_with_scanner};
pub use surgery::{ensure_or_replace, set_or_replace, to_drop, to_drop_tree};
pub use walk::{walk, Handler, Visit, Visitor, Walk};
