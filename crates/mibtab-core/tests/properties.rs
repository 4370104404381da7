//! Property-based tests over generated MIB modules.

use proptest::prelude::*;

use mibtab_core::{parse, Oid};

/// Canonical values of the well-known arcs installed before every parse.
const BOOTSTRAP: [(&str, &[u32]); 10] = [
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

/// A chain of OID aliases under mib-2, declared in a random order.
///
/// Yields the declaration order (a permutation of `0..n`) and the subid
/// written for each link.
fn arb_chain() -> impl Strategy<Value = (Vec<usize>, Vec<u32>)> {
    (1usize..7).prop_flat_map(|n| {
        (
            Just((0..n).collect::<Vec<usize>>()).prop_shuffle(),
            prop::collection::vec(0u32..100, n),
        )
    })
}

/// Render the chain as a module: link i hangs off link i-1, link 0 off
/// mib-2.
fn chain_source(order: &[usize], subids: &[u32]) -> String {
    let mut src = String::from("CHAIN-MIB DEFINITIONS ::= BEGIN\n");
    for &i in order {
        let parent = if i == 0 {
            "mib-2".to_string()
        } else {
            format!("link{}", i - 1)
        };
        src.push_str(&format!(
            "link{i} OBJECT IDENTIFIER ::= {{ {parent} {} }}\n",
            subids[i]
        ));
    }
    src.push_str("END\n");
    src
}

/// A mixed bag of declarations: optionally a MODULE-IDENTITY, then
/// object types (kind 0), object identities (kind 1), and notifications
/// (kind 2) in any mix, each with a subid and a flag for whether its
/// parent ever resolves.
fn arb_mixed_declarations() -> impl Strategy<Value = (bool, Vec<(u8, u32, bool)>)> {
    (
        any::<bool>(),
        prop::collection::vec((0u8..3, 0u32..1000, any::<bool>()), 1..8),
    )
}

/// Render the mixed bag as a module. Unresolvable declarations hang off
/// a parent that is never defined and never imported.
fn mixed_source(has_identity: bool, decls: &[(u8, u32, bool)]) -> String {
    let mut src = String::from("MIX-MIB DEFINITIONS ::= BEGIN\n");
    if has_identity {
        src.push_str(
            "mixMIB MODULE-IDENTITY LAST-UPDATED \"202401010000Z\" \
             ORGANIZATION \"o\" CONTACT-INFO \"c\" DESCRIPTION \"m\" \
             ::= { mib-2 999 }\n",
        );
    }
    for (i, (kind, subid, resolvable)) in decls.iter().enumerate() {
        let parent = if *resolvable { "mib-2" } else { "neverDefined" };
        match *kind {
            0 => src.push_str(&format!(
                "obj{i} OBJECT-TYPE SYNTAX INTEGER MAX-ACCESS read-only \
                 STATUS current DESCRIPTION \"d\" ::= {{ {parent} {subid} }}\n"
            )),
            1 => src.push_str(&format!(
                "idn{i} OBJECT-IDENTITY STATUS current DESCRIPTION \"d\" \
                 ::= {{ {parent} {subid} }}\n"
            )),
            _ => src.push_str(&format!(
                "ntf{i} NOTIFICATION-TYPE STATUS current DESCRIPTION \"d\" \
                 ::= {{ {parent} {subid} }}\n"
            )),
        }
    }
    src.push_str("END\n");
    src
}

proptest! {
    /// Dotted rendering of any resolved OID parses back to the same arc
    /// sequence.
    #[test]
    fn roundtrip_oid_string(arcs in prop::collection::vec(0u32..1_000_000, 0..10)) {
        let oid = Oid::from_arcs(arcs.clone());
        let parsed = Oid::from_dotted(&oid.to_dotted()).expect("dotted form reparses");
        prop_assert_eq!(parsed.arcs(), arcs.as_slice());
    }

    /// Every chain link's OID is its parent's OID plus the written
    /// subid, whatever order the links were declared in.
    #[test]
    fn oid_parent_extension((order, subids) in arb_chain()) {
        let module = parse(chain_source(&order, &subids).as_bytes()).unwrap();
        let mut expected: Vec<u32> = vec![1, 3, 6, 1, 2, 1];
        for (i, subid) in subids.iter().enumerate() {
            expected.push(*subid);
            let name = format!("link{i}");
            let oid = module.node_oid(&name).expect("link present");
            prop_assert_eq!(oid.arcs(), expected.as_slice(), "at {}", name);
        }
    }

    /// Dotted round trips hold for every node of a parsed module.
    #[test]
    fn parsed_nodes_roundtrip((order, subids) in arb_chain()) {
        let module = parse(chain_source(&order, &subids).as_bytes()).unwrap();
        for oid in module.nodes.values() {
            prop_assert!(!oid.is_empty());
            let reparsed = Oid::from_dotted(&oid.to_dotted()).expect("dotted form reparses");
            prop_assert_eq!(&reparsed, oid);
        }
    }

    /// The bootstrap arcs survive every parse with their canonical
    /// values.
    #[test]
    fn bootstrap_present((order, subids) in arb_chain()) {
        let module = parse(chain_source(&order, &subids).as_bytes()).unwrap();
        for (name, arcs) in BOOTSTRAP {
            let oid = module.node_oid(name).expect("bootstrap entry present");
            prop_assert_eq!(oid.arcs(), arcs);
        }
    }

    /// Parsing the same input twice yields identical modules.
    #[test]
    fn idempotent_parse((order, subids) in arb_chain()) {
        let source = chain_source(&order, &subids);
        let first = parse(source.as_bytes()).unwrap();
        let second = parse(source.as_bytes()).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Generated OBJECT-TYPE declarations all land in `objects` and in
    /// `nodes`, and exact-OID lookup finds each one.
    #[test]
    fn objects_register_as_nodes(subids in prop::collection::btree_set(1u32..1000, 1..6)) {
        let subids: Vec<u32> = subids.into_iter().collect();
        let mut src = String::from("OBJ-MIB DEFINITIONS ::= BEGIN\n");
        for (i, subid) in subids.iter().enumerate() {
            src.push_str(&format!(
                "obj{i} OBJECT-TYPE SYNTAX INTEGER MAX-ACCESS read-only \
                 STATUS current DESCRIPTION \"o\" ::= {{ mib-2 {subid} }}\n"
            ));
        }
        src.push_str("END\n");

        let module = parse(src.as_bytes()).unwrap();
        prop_assert_eq!(module.objects.len(), subids.len());
        for (i, subid) in subids.iter().enumerate() {
            let name = format!("obj{i}");
            let obj = module.object_by_name(&name).expect("object present");
            let expected = [1, 3, 6, 1, 2, 1, *subid];
            prop_assert_eq!(obj.oid.arcs(), expected.as_slice());
            prop_assert!(module.nodes.contains_key(&name));
            let found = module
                .object_by_dotted(&obj.oid.to_dotted())
                .expect("lookup by dotted OID");
            prop_assert_eq!(&found.name, &name);
        }
    }

    /// Every name in any kind index, and the MODULE-IDENTITY name, also
    /// appears in `nodes`, resolvable or not.
    #[test]
    fn nodes_contain_declarations((has_identity, decls) in arb_mixed_declarations()) {
        let module = parse(mixed_source(has_identity, &decls).as_bytes()).unwrap();

        for (i, (kind, _, _)) in decls.iter().enumerate() {
            match *kind {
                0 => {
                    let name = format!("obj{i}");
                    prop_assert!(module.objects.contains_key(&name));
                }
                1 => {
                    let name = format!("idn{i}");
                    prop_assert!(module.object_identities.contains_key(&name));
                }
                _ => {
                    let name = format!("ntf{i}");
                    prop_assert!(module.notification_types.contains_key(&name));
                }
            }
        }
        if has_identity {
            let mi = module.module_identity.as_ref().expect("identity present");
            prop_assert_eq!(&mi.name, "mixMIB");
        }

        for name in module.objects.keys() {
            prop_assert!(module.nodes.contains_key(name), "object {} not a node", name);
        }
        for name in module.object_identities.keys() {
            prop_assert!(module.nodes.contains_key(name), "identity {} not a node", name);
        }
        for name in module.notification_types.keys() {
            prop_assert!(module.nodes.contains_key(name), "notification {} not a node", name);
        }
        if let Some(mi) = &module.module_identity {
            prop_assert!(module.nodes.contains_key(&mi.name));
        }
    }

    /// Every declaration head the source sweep can see ends up in the
    /// matching kind index, even when the tokenized pass never reaches
    /// it: each generated declaration sits behind an unknown construct
    /// whose resync swallows it, so only the sweep can restore the name.
    #[test]
    fn source_names_covered(kinds in prop::collection::vec(0u8..4, 1..6)) {
        let mut src = String::from("SWEEP-MIB DEFINITIONS ::= BEGIN\n");
        for (i, kind) in kinds.iter().enumerate() {
            src.push_str(&format!("junk{i} FROB ::= 0\n"));
            match *kind {
                0 => src.push_str(&format!(
                    "lost{i} OBJECT IDENTIFIER ::= {{ mib-2 {i} }}\n"
                )),
                1 => src.push_str(&format!(
                    "lost{i} OBJECT-TYPE SYNTAX INTEGER STATUS current \
                     ::= {{ mib-2 {i} }}\n"
                )),
                2 => src.push_str(&format!(
                    "lost{i} OBJECT-IDENTITY STATUS current ::= {{ mib-2 {i} }}\n"
                )),
                _ => src.push_str(&format!(
                    "lost{i} NOTIFICATION-TYPE STATUS current ::= {{ mib-2 {i} }}\n"
                )),
            }
        }
        src.push_str("END\n");

        let module = parse(src.as_bytes()).unwrap();
        for (i, kind) in kinds.iter().enumerate() {
            let name = format!("lost{i}");
            let node = module.node_oid(&name);
            prop_assert!(node.is_some(), "{} missing from nodes", name);
            prop_assert!(node.unwrap().is_empty(), "{} was not sweep-restored", name);
            match *kind {
                0 => {}
                1 => prop_assert!(module.objects.contains_key(&name)),
                2 => prop_assert!(module.object_identities.contains_key(&name)),
                _ => prop_assert!(module.notification_types.contains_key(&name)),
            }
        }
    }
}
