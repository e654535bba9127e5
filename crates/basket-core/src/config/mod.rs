//! Engine configuration, loaded from TOML.

mod display_config;
mod mining_config;
mod store_config;

pub use display_config::DisplayConfig;
pub use mining_config::MiningConfig;
pub use store_config::StoreConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub(crate) mod defaults {
    pub use crate::constants::{
        DEFAULT_LIFT_THRESHOLD, DEFAULT_MIN_CONFIDENCE, DEFAULT_MIN_LIFT, DEFAULT_TOP_ITEMS,
    };

    pub const DEFAULT_ITEM_TABLE_PATH: &str = "models/item_table.json";
    pub const DEFAULT_ITEMSET_TABLE_PATH: &str = "models/frequent_itemsets.json";
}

/// Top-level configuration. Every section falls back to its defaults, so an
/// empty file (or no file at all) yields a working config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BasketConfig {
    pub store: StoreConfig,
    pub mining: MiningConfig,
    pub display: DisplayConfig,
}

impl BasketConfig {
    /// Load from a TOML file on disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&raw).map_err(|message| ConfigError::Parse {
            path: path.display().to_string(),
            message,
        })
    }

    /// Parse from a TOML string.
    pub fn from_toml_str(raw: &str) -> Result<Self, String> {
        toml::from_str(raw).map_err(|e| e.to_string())
    }
}
