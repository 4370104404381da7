//! Declaration records stored in the symbol table.
//!
//! One record type per OID-bearing construct kind, plus textual
//! conventions (which carry no OID). All clause values are preserved as
//! the literal text that appeared in the source; nothing is type-checked
//! or normalized beyond whitespace folding.

use super::Oid;

/// An `OBJECT-TYPE` definition: a managed object.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectType {
    /// Declared name.
    pub name: String,
    /// Resolved OID; empty when the parent reference did not resolve.
    pub oid: Oid,
    /// `SYNTAX` clause as free text (e.g. `INTEGER { up ( 1 ) }`).
    pub syntax: String,
    /// `MAX-ACCESS` (or SMIv1 `ACCESS`) value text.
    pub access: String,
    /// `STATUS` value text.
    pub status: String,
    /// `DESCRIPTION` string.
    pub description: String,
    /// `INDEX` identifiers in declaration order; `IMPLIED` markers are
    /// dropped and only the plain names kept.
    pub index: Vec<String>,
}

impl ObjectType {
    /// Create an empty record with just the name filled in.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// An `OBJECT-IDENTITY` definition: a named OID node with metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectIdentity {
    /// Declared name.
    pub name: String,
    /// Resolved OID; empty when unresolved.
    pub oid: Oid,
    /// `STATUS` value text.
    pub status: String,
    /// `DESCRIPTION` string.
    pub description: String,
}

impl ObjectIdentity {
    /// Create an empty record with just the name filled in.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// The `MODULE-IDENTITY` definition: administrative metadata plus the
/// module's own OID. At most one per module.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModuleIdentity {
    /// Declared name.
    pub name: String,
    /// Resolved OID; empty when unresolved.
    pub oid: Oid,
    /// `LAST-UPDATED` string.
    pub last_updated: String,
    /// `ORGANIZATION` string.
    pub organization: String,
    /// `CONTACT-INFO` string.
    pub contact_info: String,
    /// `DESCRIPTION` string.
    pub description: String,
}

impl ModuleIdentity {
    /// Create an empty record with just the name filled in.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A `NOTIFICATION-TYPE` definition: an SNMP trap/inform.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NotificationType {
    /// Declared name.
    pub name: String,
    /// Resolved OID; empty when unresolved.
    pub oid: Oid,
    /// `OBJECTS` clause identifiers in declaration order.
    pub objects: Vec<String>,
    /// `STATUS` value text.
    pub status: String,
    /// `DESCRIPTION` string.
    pub description: String,
}

impl NotificationType {
    /// Create an empty record with just the name filled in.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A `TEXTUAL-CONVENTION` definition: a named type alias. Carries no OID.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextualConvention {
    /// Declared name.
    pub name: String,
    /// `DISPLAY-HINT` string.
    pub display_hint: String,
    /// `STATUS` value text.
    pub status: String,
    /// `DESCRIPTION` string.
    pub description: String,
    /// `SYNTAX` clause as free text.
    pub syntax: String,
}

impl TextualConvention {
    /// Create an empty record with just the name filled in.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
