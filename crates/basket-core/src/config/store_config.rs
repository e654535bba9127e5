use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Locations of the two serialized tabular artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Transaction-derived item table (one record per purchased item).
    pub item_table_path: PathBuf,
    /// Frequent-itemset table produced by the upstream miner.
    pub itemset_table_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            item_table_path: PathBuf::from(defaults::DEFAULT_ITEM_TABLE_PATH),
            itemset_table_path: PathBuf::from(defaults::DEFAULT_ITEMSET_TABLE_PATH),
        }
    }
}
