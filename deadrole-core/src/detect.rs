//! Unused role detection logic.

use std::collections::{BTreeSet, HashSet};

/// Finds roles present on disk but not present in the reachable set.
///
/// The result is sorted ascending and free of duplicates, whatever the
/// order of `all_roles`.
pub fn find_unused(all_roles: &[String], reachable: &HashSet<String>) -> Vec<String> {
    all_roles
        .iter()
        .filter(|role| !reachable.contains(role.as_str()))
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_difference_is_sorted() {
        let all = list(&["zeta", "web", "alpha", "db"]);
        let unused = find_unused(&all, &set(&["web"]));
        assert_eq!(unused, vec!["alpha", "db", "zeta"]);
    }

    #[test]
    fn test_reachable_never_reported() {
        let all = list(&["a", "b"]);
        assert!(find_unused(&all, &set(&["a", "b", "not_on_disk"])).is_empty());
    }

    #[test]
    fn test_empty_inventory() {
        assert!(find_unused(&[], &set(&["a"])).is_empty());
    }
}
