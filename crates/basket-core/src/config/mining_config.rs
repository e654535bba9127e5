use serde::{Deserialize, Serialize};

use super::defaults;

/// Rule-derivation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// Minimum lift a derived rule must reach to be kept (inclusive).
    pub lift_threshold: f64,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            lift_threshold: defaults::DEFAULT_LIFT_THRESHOLD,
        }
    }
}
