//! # basket-core
//!
//! Foundation crate for the basket analytics engine.
//! Defines the data model, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::BasketConfig;
pub use errors::{BasketError, BasketResult};
pub use models::{
    AssociationRule, FormattedRule, FrequentItemset, ItemRecord, ItemSet, ItemTable,
    ItemsetTable, RuleSortKey,
};
