//! Canonical item sets for rule sides and frequent itemsets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An ordered set of item names.
///
/// Items are kept lexicographically sorted and deduplicated, so string
/// rendering and first-element extraction are deterministic regardless of
/// the order the items arrived in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ItemSet {
    items: Vec<String>,
}

impl ItemSet {
    /// Build a set from any iterable of item names. Input order is irrelevant.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut items: Vec<String> = items.into_iter().map(Into::into).collect();
        items.sort();
        items.dedup();
        Self { items }
    }

    /// Items in canonical (lexicographic) order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First item in canonical order, if any.
    pub fn first(&self) -> Option<&str> {
        self.items.first().map(String::as_str)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.binary_search_by(|probe| probe.as_str().cmp(item)).is_ok()
    }

    pub fn is_disjoint(&self, other: &ItemSet) -> bool {
        self.items.iter().all(|item| !other.contains(item))
    }

    /// Comma-joined canonical rendering, e.g. `"Bread,Coffee"`.
    pub fn joined(&self) -> String {
        self.items.join(",")
    }
}

impl From<Vec<String>> for ItemSet {
    fn from(items: Vec<String>) -> Self {
        Self::new(items)
    }
}

impl From<ItemSet> for Vec<String> {
    fn from(set: ItemSet) -> Self {
        set.items
    }
}

impl fmt::Display for ItemSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}
