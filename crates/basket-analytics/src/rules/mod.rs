//! Rule Engine: display formatting and threshold filtering.

mod formatter;

pub use formatter::{format_rules, recommended_associations};
