//! # basket-mining
//!
//! Native association-rule derivation over a frequent-itemset table.
//! For every frequent itemset, every antecedent/consequent split is scored
//! with support, confidence, lift, leverage, and conviction, and rules below
//! the configured lift floor are discarded.

mod derive;

pub use derive::derive_rules;
