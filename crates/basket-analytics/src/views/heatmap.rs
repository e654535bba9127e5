//! Antecedent × consequent lift pivot for the heatmap.

use std::collections::{BTreeSet, HashMap};

use tracing::warn;

use basket_core::errors::ShapeError;
use basket_core::models::FormattedRule;

use super::types::LiftPivot;

/// Pivot formatted rules into an antecedent × consequent → lift table.
///
/// The pivot requires unique (antecedent, consequent) keys after string
/// flattening: a duplicate pair is a [`ShapeError`], never silently
/// overwritten data. Callers recover by showing an empty view instead of
/// crashing the dashboard.
pub fn pivot_for_heatmap(rules: &[FormattedRule]) -> Result<LiftPivot, ShapeError> {
    let antecedents: Vec<String> = rules
        .iter()
        .map(|rule| rule.antecedents.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let consequents: Vec<String> = rules
        .iter()
        .map(|rule| rule.consequents.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let row_of: HashMap<&str, usize> = antecedents
        .iter()
        .enumerate()
        .map(|(i, a)| (a.as_str(), i))
        .collect();
    let col_of: HashMap<&str, usize> = consequents
        .iter()
        .enumerate()
        .map(|(i, c)| (c.as_str(), i))
        .collect();

    let mut values = vec![vec![None; consequents.len()]; antecedents.len()];
    for rule in rules {
        let cell = &mut values[row_of[rule.antecedents.as_str()]][col_of[rule.consequents.as_str()]];
        if cell.is_some() {
            return Err(ShapeError::DuplicatePivotEntry {
                antecedent: rule.antecedents.clone(),
                consequent: rule.consequents.clone(),
            });
        }
        *cell = Some(rule.lift);
    }

    Ok(LiftPivot {
        antecedents,
        consequents,
        values,
    })
}

/// [`pivot_for_heatmap`] with the dashboard's recovery policy applied:
/// a shape conflict degrades to an empty pivot instead of failing the view.
pub fn pivot_or_empty(rules: &[FormattedRule]) -> LiftPivot {
    match pivot_for_heatmap(rules) {
        Ok(pivot) => pivot,
        Err(e) => {
            warn!(error = %e, "heatmap pivot conflict, rendering empty view");
            LiftPivot::default()
        }
    }
}
