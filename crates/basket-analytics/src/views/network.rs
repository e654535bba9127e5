//! Node/edge extraction for the association network widget.

use std::collections::HashSet;

use basket_core::models::AssociationRule;

use super::types::{NetworkEdge, NetworkElements, NetworkNode};

/// Strip ASCII vowels from an item name to form a widget-safe node id.
/// Two items differing only in vowels collide; known limitation.
pub fn strip_vowels(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U'))
        .collect()
}

/// Build the node/edge lists for the association network.
///
/// Each rule contributes one edge from its first antecedent item to its
/// first consequent item; multi-item sides truncate to their first
/// canonical member.
/// Nodes are deduplicated in first-seen order (antecedents before
/// consequents); ids are the vowel-stripped item names.
pub fn network_elements(rules: &[AssociationRule]) -> NetworkElements {
    let pairs: Vec<(&str, &str)> = rules
        .iter()
        .filter_map(|rule| Some((rule.antecedents.first()?, rule.consequents.first()?)))
        .collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut nodes = Vec::new();
    for item in pairs
        .iter()
        .map(|(ant, _)| *ant)
        .chain(pairs.iter().map(|(_, cons)| *cons))
    {
        if seen.insert(item) {
            nodes.push(NetworkNode {
                id: strip_vowels(item),
                label: item.to_string(),
            });
        }
    }

    let edges = pairs
        .iter()
        .map(|(ant, cons)| NetworkEdge {
            source: strip_vowels(ant),
            target: strip_vowels(cons),
        })
        .collect();

    NetworkElements { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basket_core::models::ItemSet;

    fn rule(antecedents: &[&str], consequents: &[&str]) -> AssociationRule {
        AssociationRule {
            antecedents: ItemSet::new(antecedents.iter().copied()),
            consequents: ItemSet::new(consequents.iter().copied()),
            antecedent_support: 0.4,
            consequent_support: 0.2,
            support: 0.12,
            confidence: 0.3,
            lift: 1.5,
            leverage: 0.04,
            conviction: 1.1,
        }
    }

    #[test]
    fn strips_vowels_in_both_cases() {
        assert_eq!(strip_vowels("Coffee"), "Cff");
        assert_eq!(strip_vowels("Tea"), "T");
        assert_eq!(strip_vowels("Bread"), "Brd");
        assert_eq!(strip_vowels("Cake"), "Ck");
        assert_eq!(strip_vowels("OIEA"), "");
    }

    #[test]
    fn single_item_rules_yield_one_edge_each() {
        let rules = vec![rule(&["Coffee"], &["Bread"]), rule(&["Tea"], &["Cake"])];
        let elements = network_elements(&rules);

        assert_eq!(elements.nodes.len(), 4);
        let labels: Vec<&str> = elements.nodes.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, ["Coffee", "Tea", "Bread", "Cake"]);
        let ids: Vec<&str> = elements.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["Cff", "T", "Brd", "Ck"]);

        assert_eq!(
            elements.edges,
            vec![
                NetworkEdge {
                    source: "Cff".into(),
                    target: "Brd".into()
                },
                NetworkEdge {
                    source: "T".into(),
                    target: "Ck".into()
                },
            ]
        );
    }

    #[test]
    fn shared_items_are_one_node() {
        let rules = vec![rule(&["Coffee"], &["Cake"]), rule(&["Cake"], &["Coffee"])];
        let elements = network_elements(&rules);
        assert_eq!(elements.nodes.len(), 2);
        assert_eq!(elements.edges.len(), 2);
    }

    #[test]
    fn multi_item_sides_truncate_to_first_canonical_member() {
        let rules = vec![rule(&["Tea", "Bread"], &["Scone", "Cake"])];
        let elements = network_elements(&rules);
        // Canonical order puts Bread and Cake first on their sides.
        let labels: Vec<&str> = elements.nodes.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, ["Bread", "Cake"]);
        assert_eq!(elements.edges[0].source, "Brd");
        assert_eq!(elements.edges[0].target, "Ck");
    }

    #[test]
    fn empty_rule_set_yields_empty_elements() {
        assert_eq!(network_elements(&[]), NetworkElements::default());
    }
}
