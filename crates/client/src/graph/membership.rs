//! Pure add/remove diffing over product-set membership.

use std::collections::HashSet;

/// Page size used when fetching current membership before a diff.
///
/// Memberships larger than one page would be diffed against an
/// incomplete view; pagination past the first page is out of scope.
pub const MEMBERSHIP_PAGE_LIMIT: u32 = 1000;

/// The minimal mutation moving a set from one membership to another.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MembershipDiff {
    /// Ids present in the desired membership but not the current one.
    pub to_add: Vec<String>,
    /// Ids present in the current membership but not the desired one.
    pub to_remove: Vec<String>,
}

impl MembershipDiff {
    /// True when the memberships already coincide.
    ///
    /// An empty diff must produce zero batch sub-requests and no
    /// network call.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Compute the add/remove delta between two memberships.
///
/// Plain set difference both ways: insertion order carries no meaning
/// and duplicates cannot occur. Output is sorted for determinism.
#[must_use]
pub fn diff(current: &HashSet<String>, desired: &HashSet<String>) -> MembershipDiff {
    let mut to_add: Vec<String> = desired.difference(current).cloned().collect();
    let mut to_remove: Vec<String> = current.difference(desired).cloned().collect();
    to_add.sort_unstable();
    to_remove.sort_unstable();
    MembershipDiff { to_add, to_remove }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> HashSet<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_identical_memberships_diff_empty() {
        let set = ids(&["a", "b", "c"]);
        let result = diff(&set, &set.clone());
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_current_adds_everything() {
        let result = diff(&HashSet::new(), &ids(&["x", "y"]));
        assert_eq!(result.to_add, vec!["x", "y"]);
        assert!(result.to_remove.is_empty());
    }

    #[test]
    fn test_empty_desired_removes_everything() {
        let result = diff(&ids(&["x", "y"]), &HashSet::new());
        assert!(result.to_add.is_empty());
        assert_eq!(result.to_remove, vec!["x", "y"]);
    }

    #[test]
    fn test_overlapping_memberships_yield_minimal_delta() {
        let result = diff(&ids(&["a", "b", "c"]), &ids(&["b", "c", "d"]));
        assert_eq!(result.to_add, vec!["d"]);
        assert_eq!(result.to_remove, vec!["a"]);
    }

    #[test]
    fn test_diff_ignores_construction_order() {
        let forward = diff(&ids(&["1", "2", "3"]), &ids(&["3", "4"]));
        let shuffled = diff(&ids(&["3", "2", "1"]), &ids(&["4", "3"]));
        assert_eq!(forward, shuffled);
    }
}
