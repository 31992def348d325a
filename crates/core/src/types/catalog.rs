//! Businesses, catalogs, and product sets.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A business account on the platform. Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    /// Platform-assigned identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// A product catalog owned by a [`Business`]. Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Platform-assigned identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// A named grouping of products within a catalog.
///
/// Membership is a set: product ids are unique and their order carries
/// no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSet {
    /// Platform-assigned identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Ids of the member products.
    pub product_ids: HashSet<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_set_membership_deduplicates() {
        let set = ProductSet {
            id: "s1".to_string(),
            name: "Summer".to_string(),
            product_ids: ["1", "2", "2", "3"]
                .into_iter()
                .map(String::from)
                .collect(),
        };
        assert_eq!(set.product_ids.len(), 3);
    }
}
