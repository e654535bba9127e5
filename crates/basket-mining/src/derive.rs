//! Rule derivation: antecedent/consequent splits of frequent itemsets.

use std::collections::HashMap;

use tracing::{debug, info};

use basket_core::errors::MiningError;
use basket_core::models::{AssociationRule, ItemSet, ItemsetTable};

/// Derive association rules from a frequent-itemset table.
///
/// Every itemset with at least two members is split into every non-empty
/// antecedent/consequent pair. Rules whose lift is below `lift_threshold`
/// are discarded (inclusive floor: a rule at exactly the threshold is kept).
///
/// Output order is deterministic: itemsets in table order, splits in
/// ascending-bitmask order over the canonical item ordering.
pub fn derive_rules(
    table: &ItemsetTable,
    lift_threshold: f64,
) -> Result<Vec<AssociationRule>, MiningError> {
    // Support lookup for scoring the two sides of each split.
    let supports: HashMap<&[String], f64> = table
        .itemsets
        .iter()
        .map(|entry| (entry.itemset.items(), entry.support))
        .collect();

    let mut rules = Vec::new();
    for entry in &table.itemsets {
        let items = entry.itemset.items();
        if items.len() < 2 {
            continue;
        }

        // Each bitmask selects the antecedent side; the complement is the
        // consequent. Skip the empty and full masks.
        let full = 1usize << items.len();
        for mask in 1..full - 1 {
            let antecedents = select(items, mask);
            let consequents = select(items, !mask & (full - 1));

            let antecedent_support = support_of(&supports, &antecedents)?;
            let consequent_support = support_of(&supports, &consequents)?;

            let support = entry.support;
            let confidence = support / antecedent_support;
            let lift = confidence / consequent_support;
            let leverage = support - antecedent_support * consequent_support;
            let conviction = if confidence >= 1.0 {
                f64::INFINITY
            } else {
                (1.0 - consequent_support) / (1.0 - confidence)
            };

            if lift < lift_threshold {
                continue;
            }

            rules.push(AssociationRule {
                antecedents,
                consequents,
                antecedent_support,
                consequent_support,
                support,
                confidence,
                lift,
                leverage,
                conviction,
            });
        }
    }

    debug!(
        itemsets = table.len(),
        threshold = lift_threshold,
        "scored antecedent/consequent splits"
    );
    info!(rules = rules.len(), "derived association rules");
    Ok(rules)
}

fn select(items: &[String], mask: usize) -> ItemSet {
    ItemSet::new(
        items
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, item)| item.clone()),
    )
}

fn support_of(supports: &HashMap<&[String], f64>, side: &ItemSet) -> Result<f64, MiningError> {
    let support = supports
        .get(side.items())
        .copied()
        .ok_or_else(|| MiningError::MissingItemsetSupport {
            itemset: side.joined(),
        })?;
    if support <= 0.0 {
        return Err(MiningError::ZeroSupport {
            itemset: side.joined(),
        });
    }
    Ok(support)
}

#[cfg(test)]
mod tests {
    use super::*;
    use basket_core::models::FrequentItemset;

    fn entry(items: &[&str], support: f64) -> FrequentItemset {
        FrequentItemset {
            itemset: ItemSet::new(items.iter().copied()),
            support,
        }
    }

    fn coffee_cake_table() -> ItemsetTable {
        ItemsetTable {
            itemsets: vec![
                entry(&["Coffee"], 0.4),
                entry(&["Cake"], 0.2),
                entry(&["Cake", "Coffee"], 0.12),
            ],
        }
    }

    #[test]
    fn two_item_itemset_yields_both_directions() {
        let rules = derive_rules(&coffee_cake_table(), 0.0).unwrap();
        assert_eq!(rules.len(), 2);

        let coffee_to_cake = rules
            .iter()
            .find(|r| r.antecedents.joined() == "Coffee")
            .unwrap();
        assert_eq!(coffee_to_cake.consequents.joined(), "Cake");
        assert!((coffee_to_cake.confidence - 0.3).abs() < 1e-9);
        assert!((coffee_to_cake.lift - 1.5).abs() < 1e-9);
        assert!((coffee_to_cake.leverage - 0.04).abs() < 1e-9);
        assert!((coffee_to_cake.conviction - 0.8 / 0.7).abs() < 1e-9);

        let cake_to_coffee = rules
            .iter()
            .find(|r| r.antecedents.joined() == "Cake")
            .unwrap();
        assert!((cake_to_coffee.confidence - 0.6).abs() < 1e-9);
        assert!((cake_to_coffee.lift - 1.5).abs() < 1e-9);
    }

    #[test]
    fn lift_floor_is_inclusive() {
        let at_threshold = derive_rules(&coffee_cake_table(), 1.5).unwrap();
        assert_eq!(at_threshold.len(), 2);

        let above_threshold = derive_rules(&coffee_cake_table(), 1.5000001).unwrap();
        assert!(above_threshold.is_empty());
    }

    #[test]
    fn singleton_itemsets_yield_no_rules() {
        let table = ItemsetTable {
            itemsets: vec![entry(&["Coffee"], 0.4), entry(&["Tea"], 0.3)],
        };
        assert!(derive_rules(&table, 0.0).unwrap().is_empty());
    }

    #[test]
    fn three_item_itemset_yields_six_splits() {
        let table = ItemsetTable {
            itemsets: vec![
                entry(&["Bread"], 0.5),
                entry(&["Butter"], 0.4),
                entry(&["Jam"], 0.3),
                entry(&["Bread", "Butter"], 0.25),
                entry(&["Bread", "Jam"], 0.2),
                entry(&["Butter", "Jam"], 0.15),
                entry(&["Bread", "Butter", "Jam"], 0.1),
            ],
        };
        let rules = derive_rules(&table, 0.0).unwrap();
        // 2 per two-item itemset, 6 for the three-item itemset.
        assert_eq!(rules.len(), 12);
        for rule in &rules {
            assert!(rule.antecedents.is_disjoint(&rule.consequents));
            assert!(!rule.antecedents.is_empty());
            assert!(!rule.consequents.is_empty());
        }
    }

    #[test]
    fn missing_subset_support_is_an_error() {
        let table = ItemsetTable {
            itemsets: vec![entry(&["Coffee"], 0.4), entry(&["Cake", "Coffee"], 0.12)],
        };
        let err = derive_rules(&table, 0.0).unwrap_err();
        assert!(matches!(
            err,
            MiningError::MissingItemsetSupport { ref itemset } if itemset == "Cake"
        ));
    }

    #[test]
    fn certain_rules_have_infinite_conviction() {
        let table = ItemsetTable {
            itemsets: vec![
                entry(&["Coffee"], 0.4),
                entry(&["Cake"], 0.5),
                entry(&["Cake", "Coffee"], 0.4),
            ],
        };
        let rules = derive_rules(&table, 0.0).unwrap();
        let certain = rules
            .iter()
            .find(|r| r.antecedents.joined() == "Coffee")
            .unwrap();
        assert_eq!(certain.confidence, 1.0);
        assert!(certain.conviction.is_infinite());
    }

    #[test]
    fn derivation_is_deterministic() {
        let a = derive_rules(&coffee_cake_table(), 0.0).unwrap();
        let b = derive_rules(&coffee_cake_table(), 0.0).unwrap();
        assert_eq!(a, b);
    }
}
