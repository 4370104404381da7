//! Resolved numeric OIDs.

use std::fmt::{self, Write};

/// A resolved OID: an ordered sequence of non-negative subidentifiers
/// rooted at ISO 1.
///
/// Declarations whose parent could not be resolved carry an empty `Oid`,
/// which renders as the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oid(Vec<u32>);

impl Oid {
    /// The empty (unresolved) OID.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build an OID from its subidentifiers.
    #[must_use]
    pub fn from_arcs(arcs: Vec<u32>) -> Self {
        Self(arcs)
    }

    /// Build an OID from a slice of subidentifiers.
    #[must_use]
    pub fn from_slice(arcs: &[u32]) -> Self {
        Self(arcs.to_vec())
    }

    /// Parse dotted notation (e.g. `"1.3.6.1"`). The empty string parses
    /// to the empty OID; any non-numeric component is `None`.
    #[must_use]
    pub fn from_dotted(s: &str) -> Option<Self> {
        if s.is_empty() {
            return Some(Self::new());
        }
        s.split('.')
            .map(|part| part.parse().ok())
            .collect::<Option<Vec<u32>>>()
            .map(Self)
    }

    /// Render as dotted decimal: components joined by `.`, no leading or
    /// trailing dot. The empty OID renders as the empty string.
    #[must_use]
    pub fn to_dotted(&self) -> String {
        let mut out = String::with_capacity(self.0.len() * 4);
        for (i, subid) in self.0.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            let _ = write!(out, "{subid}");
        }
        out
    }

    /// Extend this OID by one subidentifier, yielding a child OID.
    #[must_use]
    pub fn child(&self, subid: u32) -> Self {
        let mut arcs = Vec::with_capacity(self.0.len() + 1);
        arcs.extend_from_slice(&self.0);
        arcs.push(subid);
        Self(arcs)
    }

    /// The subidentifiers.
    #[must_use]
    pub fn arcs(&self) -> &[u32] {
        &self.0
    }

    /// Number of subidentifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this OID is empty (unresolved).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `prefix` is a prefix of this OID.
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dotted())
    }
}

impl From<Vec<u32>> for Oid {
    fn from(arcs: Vec<u32>) -> Self {
        Self(arcs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dotted() {
        let oid = Oid::from_dotted("1.3.6.1").unwrap();
        assert_eq!(oid.arcs(), &[1, 3, 6, 1]);
    }

    #[test]
    fn test_from_dotted_empty() {
        assert!(Oid::from_dotted("").unwrap().is_empty());
    }

    #[test]
    fn test_from_dotted_invalid() {
        assert!(Oid::from_dotted("1.3.x.1").is_none());
        assert!(Oid::from_dotted("1..3").is_none());
    }

    #[test]
    fn test_to_dotted() {
        assert_eq!(Oid::from_slice(&[1, 3, 6, 1, 2, 1]).to_dotted(), "1.3.6.1.2.1");
        assert_eq!(Oid::new().to_dotted(), "");
    }

    #[test]
    fn test_roundtrip() {
        let oid = Oid::from_slice(&[1, 3, 6, 1, 4, 1, 9999, 0]);
        assert_eq!(Oid::from_dotted(&oid.to_dotted()).unwrap(), oid);
    }

    #[test]
    fn test_child() {
        let parent = Oid::from_slice(&[1, 3, 6]);
        let child = parent.child(1);
        assert_eq!(child.arcs(), &[1, 3, 6, 1]);
        // The parent is untouched.
        assert_eq!(parent.arcs(), &[1, 3, 6]);
    }

    #[test]
    fn test_starts_with() {
        let prefix = Oid::from_slice(&[1, 3, 6]);
        let full = Oid::from_slice(&[1, 3, 6, 1]);
        assert!(full.starts_with(&prefix));
        assert!(!prefix.starts_with(&full));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Oid::from_slice(&[1, 3, 6])), "1.3.6");
    }
}
