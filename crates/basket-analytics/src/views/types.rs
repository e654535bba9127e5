//! View result types.

use serde::{Deserialize, Serialize};

/// One bar of the item-frequency chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCount {
    pub item: String,
    pub count: u64,
}

/// One bar of the item-share chart. `share` is a fraction of all records
/// in the item table, not just the displayed slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemShare {
    pub item: String,
    pub share: f64,
}

/// Sparse antecedent × consequent → lift table for the heatmap.
///
/// Row and column headers are sorted lexicographically;
/// `values[row][col]` is `None` where no rule links the pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiftPivot {
    pub antecedents: Vec<String>,
    pub consequents: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl LiftPivot {
    /// Lift for a (antecedent, consequent) pair, if present.
    pub fn lift(&self, antecedent: &str, consequent: &str) -> Option<f64> {
        let row = self
            .antecedents
            .binary_search_by(|probe| probe.as_str().cmp(antecedent))
            .ok()?;
        let col = self
            .consequents
            .binary_search_by(|probe| probe.as_str().cmp(consequent))
            .ok()?;
        self.values[row][col]
    }

    pub fn is_empty(&self) -> bool {
        self.antecedents.is_empty()
    }
}

/// One node of the association network. `id` is the vowel-stripped item
/// name (the widget's identifier constraint); `label` is the item name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkNode {
    pub id: String,
    pub label: String,
}

/// One directed edge of the association network, antecedent to consequent,
/// referencing node ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkEdge {
    pub source: String,
    pub target: String,
}

/// Node/edge lists for the network widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkElements {
    pub nodes: Vec<NetworkNode>,
    pub edges: Vec<NetworkEdge>,
}
