//! Item frequency tables for the bar charts.

use std::collections::HashMap;

use basket_core::models::ItemTable;

use super::types::{ItemCount, ItemShare};

/// The `top_n` most frequent items as (item, count), descending by count.
/// Ties keep first-occurrence order in the table. Returns exactly
/// `min(top_n, distinct_items)` rows.
pub fn item_counts(table: &ItemTable, top_n: usize) -> Vec<ItemCount> {
    ranked_counts(table)
        .into_iter()
        .take(top_n)
        .map(|(item, count)| ItemCount { item, count })
        .collect()
}

/// Same ordering as [`item_counts`], with counts normalized over the full
/// record population — the denominator covers every record, not just the
/// displayed slice, so the full distribution sums to 1.
pub fn item_shares(table: &ItemTable, top_n: usize) -> Vec<ItemShare> {
    if table.is_empty() {
        return Vec::new();
    }
    let total = table.len() as f64;
    ranked_counts(table)
        .into_iter()
        .take(top_n)
        .map(|(item, count)| ItemShare {
            item,
            share: count as f64 / total,
        })
        .collect()
}

fn ranked_counts(table: &ItemTable) -> Vec<(String, u64)> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for record in &table.records {
        let count = counts.entry(record.item.as_str()).or_insert(0);
        if *count == 0 {
            order.push(record.item.as_str());
        }
        *count += 1;
    }

    let mut ranked: Vec<(String, u64)> = order
        .into_iter()
        .map(|item| (item.to_string(), counts[item]))
        .collect();
    // Stable sort: equal counts keep first-occurrence order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}
