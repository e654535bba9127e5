//! # basket-analytics
//!
//! Rule formatting/filtering and the read-only aggregation views the
//! dashboard renders: item-frequency tables, the lift heatmap pivot, the
//! association network's node/edge lists, and the antecedent dropdown
//! filter. Every view is a pure function of (base tables, filter
//! parameters); nothing here retains state between calls.

pub mod rules;
pub mod views;

// Re-exports for convenience
pub use rules::{format_rules, recommended_associations};
pub use views::{
    distinct_antecedents, filter_by_antecedent, item_counts, item_shares, network_elements,
    pivot_for_heatmap, pivot_or_empty, strip_vowels, ItemCount, ItemShare, LiftPivot,
    NetworkEdge, NetworkElements, NetworkNode,
};
