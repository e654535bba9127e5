//! Frequent itemsets produced by the upstream miner.

use serde::{Deserialize, Serialize};

use super::ItemSet;

/// One frequent itemset with its support over the transaction set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequentItemset {
    pub itemset: ItemSet,
    /// Fraction of transactions containing the itemset, in [0, 1].
    pub support: f64,
}

/// The full frequent-itemset table. Loaded once, never mutated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemsetTable {
    pub itemsets: Vec<FrequentItemset>,
}

impl ItemsetTable {
    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }
}
