//! The capability query consumed by selector filters.
//!
//! A `[name]` filter only ever asks one question of the node being matched:
//! does it have capability `name`? Anything that can answer that implements
//! [`Capabilities`]; the matcher never looks at any other state.

use std::collections::{BTreeSet, HashSet};

pub trait Capabilities {
    fn has_capability(&self, name: &str) -> bool;
}

impl<T: Capabilities + ?Sized> Capabilities for &T {
    fn has_capability(&self, name: &str) -> bool {
        (**self).has_capability(name)
    }
}

impl Capabilities for HashSet<String> {
    fn has_capability(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl Capabilities for BTreeSet<String> {
    fn has_capability(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl Capabilities for [String] {
    fn has_capability(&self, name: &str) -> bool {
        self.iter().any(|c| c == name)
    }
}

impl Capabilities for Vec<String> {
    fn has_capability(&self, name: &str) -> bool {
        self.as_slice().has_capability(name)
    }
}

impl Capabilities for [&str] {
    fn has_capability(&self, name: &str) -> bool {
        self.contains(&name)
    }
}

/// A node with no capabilities at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCapabilities;

impl Capabilities for NoCapabilities {
    fn has_capability(&self, _name: &str) -> bool {
        false
    }
}

/// Adapts a closure into a capability query.
pub struct CapabilityFn<F>(pub F);

impl<F: Fn(&str) -> bool> Capabilities for CapabilityFn<F> {
    fn has_capability(&self, name: &str) -> bool {
        (self.0)(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_impls() {
        let hs: HashSet<String> = ["light".to_string()].into_iter().collect();
        let bs: BTreeSet<String> = ["light".to_string()].into_iter().collect();
        assert!(hs.has_capability("light"));
        assert!(!hs.has_capability("mesh"));
        assert!(bs.has_capability("light"));
    }

    #[test]
    fn slice_impls() {
        let owned = vec!["mesh".to_string()];
        assert!(owned.has_capability("mesh"));
        let borrowed: &[&str] = &["light", "mesh"];
        assert!(borrowed.has_capability("light"));
        assert!(!borrowed.has_capability("camera"));
    }

    #[test]
    fn closure_and_none() {
        let caps = CapabilityFn(|name: &str| name.starts_with("is"));
        assert!(caps.has_capability("isLight"));
        assert!(!caps.has_capability("light"));
        assert!(!NoCapabilities.has_capability("light"));
    }

    #[test]
    #[should_panic(expected = "capability check failed")]
    fn predicate_panics_propagate() {
        let caps = CapabilityFn(|_: &str| -> bool { panic!("capability check failed") });
        caps.has_capability("light");
    }
}
