//! Transaction item records, the source of truth for frequency counts.

use serde::{Deserialize, Serialize};

/// One purchased item instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub item: String,
}

/// The full transaction-derived item table. Loaded once, never mutated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemTable {
    pub records: Vec<ItemRecord>,
}

impl ItemTable {
    /// Convenience constructor for one record per item name.
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            records: items
                .into_iter()
                .map(|item| ItemRecord { item: item.into() })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
