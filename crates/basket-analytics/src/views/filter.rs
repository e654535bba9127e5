//! Antecedent dropdown population and selection filtering.

use basket_core::models::FormattedRule;

/// Distinct antecedent strings in view order — the dropdown's option set.
pub fn distinct_antecedents(rules: &[FormattedRule]) -> Vec<String> {
    let mut options = Vec::new();
    for rule in rules {
        if !options.contains(&rule.antecedents) {
            options.push(rule.antecedents.clone());
        }
    }
    options
}

/// Rows whose antecedent equals the selection.
///
/// `None` and values outside the known antecedent set both degrade to an
/// empty table, never an error.
pub fn filter_by_antecedent(rules: &[FormattedRule], selection: Option<&str>) -> Vec<FormattedRule> {
    match selection {
        Some(selected) => rules
            .iter()
            .filter(|rule| rule.antecedents == selected)
            .cloned()
            .collect(),
        None => Vec::new(),
    }
}
