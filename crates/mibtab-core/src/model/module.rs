//! The per-module symbol table.

use std::collections::BTreeMap;

use super::decl::{
    ModuleIdentity, NotificationType, ObjectIdentity, ObjectType, TextualConvention,
};
use super::Oid;

/// Well-known arcs installed before parsing begins, so that common parent
/// references resolve without any imports.
const BOOTSTRAP_NODES: [(&str, &[u32]); 10] = [
    ("iso", &[1]),
    ("org", &[1, 3]),
    ("dod", &[1, 3, 6]),
    ("internet", &[1, 3, 6, 1]),
    ("mgmt", &[1, 3, 6, 1, 2]),
    ("mib-2", &[1, 3, 6, 1, 2, 1]),
    ("private", &[1, 3, 6, 1, 4]),
    ("enterprises", &[1, 3, 6, 1, 4, 1]),
    ("snmpV2", &[1, 3, 6, 1, 6]),
    ("snmpModules", &[1, 3, 6, 1, 6, 3]),
];

/// A parsed MIB module: every declaration keyed by name, with secondary
/// indexes per declaration kind.
///
/// `nodes` maps every OID-bearing name (including the bootstrap arcs) to
/// its resolved OID; names whose parent never resolved map to the empty
/// OID but are still present. The maps are ordered, so iteration is
/// deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Module {
    /// ASN.1 module identifier from the header.
    pub name: String,
    /// Every named OID node, resolved or placeholder.
    pub nodes: BTreeMap<String, Oid>,
    /// `OBJECT-TYPE` definitions.
    pub objects: BTreeMap<String, ObjectType>,
    /// The `MODULE-IDENTITY` definition, if the module has one.
    pub module_identity: Option<ModuleIdentity>,
    /// `OBJECT-IDENTITY` definitions.
    pub object_identities: BTreeMap<String, ObjectIdentity>,
    /// `TEXTUAL-CONVENTION` definitions.
    pub textual_conventions: BTreeMap<String, TextualConvention>,
    /// `NOTIFICATION-TYPE` definitions.
    pub notification_types: BTreeMap<String, NotificationType>,
}

impl Module {
    /// Create an empty module with the bootstrap arcs installed.
    #[must_use]
    pub fn new() -> Self {
        let mut module = Self::default();
        for (name, arcs) in BOOTSTRAP_NODES {
            module.nodes.insert(name.to_string(), Oid::from_slice(arcs));
        }
        module
    }

    /// Look up an `OBJECT-TYPE` by its symbolic name.
    #[must_use]
    pub fn object_by_name(&self, name: &str) -> Option<&ObjectType> {
        self.objects.get(name)
    }

    /// Look up an `OBJECT-TYPE` by its exact numeric OID.
    #[must_use]
    pub fn object_by_oid(&self, oid: &[u32]) -> Option<&ObjectType> {
        if oid.is_empty() {
            return None;
        }
        self.objects.values().find(|obj| obj.oid.arcs() == oid)
    }

    /// Look up an `OBJECT-TYPE` by a dotted OID string like `"1.3.6.1.2.1.9"`.
    #[must_use]
    pub fn object_by_dotted(&self, dotted: &str) -> Option<&ObjectType> {
        let oid = Oid::from_dotted(dotted)?;
        self.object_by_oid(oid.arcs())
    }

    /// The resolved OID of a named node, as a defensive copy.
    #[must_use]
    pub fn node_oid(&self, name: &str) -> Option<Oid> {
        self.nodes.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_nodes_present() {
        let module = Module::new();
        assert_eq!(module.nodes.len(), 10);
        assert_eq!(module.node_oid("iso").unwrap().arcs(), &[1]);
        assert_eq!(module.node_oid("mib-2").unwrap().arcs(), &[1, 3, 6, 1, 2, 1]);
        assert_eq!(
            module.node_oid("enterprises").unwrap().arcs(),
            &[1, 3, 6, 1, 4, 1]
        );
        assert_eq!(module.node_oid("snmpModules").unwrap().arcs(), &[1, 3, 6, 1, 6, 3]);
    }

    #[test]
    fn test_object_lookups() {
        let mut module = Module::new();
        let mut obj = ObjectType::new("ifIndex");
        obj.oid = Oid::from_slice(&[1, 3, 6, 1, 2, 1, 2, 2, 1, 1]);
        module.objects.insert(obj.name.clone(), obj);

        assert!(module.object_by_name("ifIndex").is_some());
        assert!(module.object_by_name("ifDescr").is_none());

        let found = module.object_by_oid(&[1, 3, 6, 1, 2, 1, 2, 2, 1, 1]).unwrap();
        assert_eq!(found.name, "ifIndex");

        let found = module.object_by_dotted("1.3.6.1.2.1.2.2.1.1").unwrap();
        assert_eq!(found.name, "ifIndex");
        assert!(module.object_by_dotted("1.3.6.1.2.1.2.2.1.2").is_none());
        assert!(module.object_by_dotted("not.an.oid").is_none());
    }

    #[test]
    fn test_empty_oid_never_matches_lookup() {
        let mut module = Module::new();
        // An unresolved object keeps its empty OID.
        module
            .objects
            .insert("orphan".into(), ObjectType::new("orphan"));
        assert!(module.object_by_oid(&[]).is_none());
        assert!(module.object_by_dotted("").is_none());
    }

    #[test]
    fn test_node_oid_is_a_copy() {
        let module = Module::new();
        let copy = module.node_oid("iso").unwrap();
        let extended = copy.child(99);
        // Extending the copy leaves the table untouched.
        assert_eq!(extended.arcs(), &[1, 99]);
        assert_eq!(module.node_oid("iso").unwrap().arcs(), &[1]);
    }
}
