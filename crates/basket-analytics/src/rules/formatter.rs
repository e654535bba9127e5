//! Display projection and sorting of derived rules.

use std::cmp::Ordering;

use tracing::debug;

use basket_core::models::{AssociationRule, FormattedRule, RuleSortKey};

/// Project rules onto their display columns and sort by the requested key.
///
/// The sort is stable: rules with equal keys keep their derivation order,
/// which determines which duplicate survives any downstream dedup-by-key.
/// Pure — the same input always yields the same output.
pub fn format_rules(
    rules: &[AssociationRule],
    sort_by: RuleSortKey,
    ascending: bool,
) -> Vec<FormattedRule> {
    let mut formatted: Vec<FormattedRule> = rules.iter().map(FormattedRule::from_rule).collect();
    sort_formatted(&mut formatted, sort_by, ascending);
    formatted
}

/// Filter to the display thresholds and format with the default sort
/// (lift, descending).
///
/// The comparison is asymmetric: lift must exceed `min_lift` (strict),
/// confidence must reach `min_confidence` (inclusive). An empty result is
/// an empty table, not an error.
pub fn recommended_associations(
    rules: &[AssociationRule],
    min_lift: f64,
    min_confidence: f64,
) -> Vec<FormattedRule> {
    let mut formatted: Vec<FormattedRule> = rules
        .iter()
        .filter(|rule| rule.lift > min_lift && rule.confidence >= min_confidence)
        .map(FormattedRule::from_rule)
        .collect();
    sort_formatted(&mut formatted, RuleSortKey::default(), false);
    debug!(
        kept = formatted.len(),
        total = rules.len(),
        min_lift,
        min_confidence,
        "filtered recommended associations"
    );
    formatted
}

fn sort_formatted(rows: &mut [FormattedRule], key: RuleSortKey, ascending: bool) {
    rows.sort_by(|a, b| {
        let ord = match key {
            RuleSortKey::Antecedents => a.antecedents.cmp(&b.antecedents),
            RuleSortKey::Consequents => a.consequents.cmp(&b.consequents),
            RuleSortKey::Support => compare(a.support, b.support),
            RuleSortKey::Confidence => compare(a.confidence, b.confidence),
            RuleSortKey::Lift => compare(a.lift, b.lift),
        };
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    });
}

fn compare(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
