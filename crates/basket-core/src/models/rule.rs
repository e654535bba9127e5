//! Association rules and their display projection.

use serde::{Deserialize, Serialize};

use super::ItemSet;

/// A derived association rule with its full diagnostic columns.
///
/// Invariants upheld by the mining stage: both sides are non-empty and
/// disjoint, `support` and `confidence` are in [0, 1], `lift >= 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationRule {
    pub antecedents: ItemSet,
    pub consequents: ItemSet,
    pub antecedent_support: f64,
    pub consequent_support: f64,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
    pub leverage: f64,
    pub conviction: f64,
}

/// Display projection of a rule: sides flattened to comma-joined strings,
/// diagnostic columns dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedRule {
    pub antecedents: String,
    pub consequents: String,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
}

impl FormattedRule {
    /// Project a rule onto its display columns.
    pub fn from_rule(rule: &AssociationRule) -> Self {
        Self {
            antecedents: rule.antecedents.joined(),
            consequents: rule.consequents.joined(),
            support: rule.support,
            confidence: rule.confidence,
            lift: rule.lift,
        }
    }
}

/// Column a formatted rule table can be sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSortKey {
    Antecedents,
    Consequents,
    Support,
    Confidence,
    #[default]
    Lift,
}
