//! Aggregation views: read-only projections handed to the presentation layer.

mod filter;
mod frequency;
mod heatmap;
mod network;
mod types;

pub use filter::{distinct_antecedents, filter_by_antecedent};
pub use frequency::{item_counts, item_shares};
pub use heatmap::{pivot_for_heatmap, pivot_or_empty};
pub use network::{network_elements, strip_vowels};
pub use types::{ItemCount, ItemShare, LiftPivot, NetworkEdge, NetworkElements, NetworkNode};
