/// Rule-derivation errors.
#[derive(Debug, thiserror::Error)]
pub enum MiningError {
    #[error("no support entry for itemset {{{itemset}}} in the frequent-itemset table")]
    MissingItemsetSupport { itemset: String },

    #[error("itemset {{{itemset}}} has zero support")]
    ZeroSupport { itemset: String },
}
