//! mibtab-core: SMIv2 MIB module parser.
//!
//! Parses a single MIB module into an owned symbol table ([`Module`]) in
//! which every OID-bearing declaration carries its fully resolved numeric
//! OID, rooted at ISO 1. Forward references are tolerated, unrecognized
//! constructs are skipped without aborting, and a regex sweep of the
//! source backfills any declaration name the tokenized pass missed.
//!
//! # Pipeline
//!
//! ```text
//! bytes → Lexer → tokens → Parser → records + pending refs
//!       → fixed-point resolution → source sweep → Module
//! ```
//!
//! # Example
//!
//! ```
//! let source = b"TOY-MIB DEFINITIONS ::= BEGIN
//! widgets OBJECT IDENTIFIER ::= { enterprises 4242 }
//! END
//! ";
//! let module = mibtab_core::parse(source).unwrap();
//! assert_eq!(module.name, "TOY-MIB");
//! assert_eq!(
//!     module.node_oid("widgets").unwrap().to_dotted(),
//!     "1.3.6.1.4.1.4242",
//! );
//! ```

pub mod error;
pub mod lexer;
pub mod model;
pub mod parser;

pub use error::ParseError;
pub use model::{
    Module, ModuleIdentity, NotificationType, ObjectIdentity, ObjectType, Oid, TextualConvention,
};
pub use parser::{parse, Parser};
