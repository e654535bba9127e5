/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lift floor applied when rules are derived from the itemset table (inclusive).
pub const DEFAULT_LIFT_THRESHOLD: f64 = 0.1;

/// Display filter: minimum lift (exclusive).
pub const DEFAULT_MIN_LIFT: f64 = 1.0;

/// Display filter: minimum confidence (inclusive).
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.2;

/// Number of items shown in the frequency views.
pub const DEFAULT_TOP_ITEMS: usize = 10;
