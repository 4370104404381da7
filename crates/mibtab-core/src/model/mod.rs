//! Resolved symbol-table model.
//!
//! The [`Module`] value handed back by a parse owns everything it
//! contains; OID sequences are value copies, so no declaration shares
//! backing storage with the `nodes` index.

mod decl;
mod module;
mod oid;

pub use decl::{ModuleIdentity, NotificationType, ObjectIdentity, ObjectType, TextualConvention};
pub use module::Module;
pub use oid::Oid;
