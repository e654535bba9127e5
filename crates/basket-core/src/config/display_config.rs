use serde::{Deserialize, Serialize};

use super::defaults;

/// Thresholds and sizes for the presentation-facing views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Recommended-associations filter: lift must exceed this (strict).
    pub min_lift: f64,
    /// Recommended-associations filter: confidence must reach this (inclusive).
    pub min_confidence: f64,
    /// Number of items shown in the frequency views.
    pub top_items: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            min_lift: defaults::DEFAULT_MIN_LIFT,
            min_confidence: defaults::DEFAULT_MIN_CONFIDENCE,
            top_items: defaults::DEFAULT_TOP_ITEMS,
        }
    }
}
