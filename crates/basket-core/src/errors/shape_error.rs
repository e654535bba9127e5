/// Shape conflicts in derived views.
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    #[error("duplicate pivot entry for ({antecedent}) -> ({consequent})")]
    DuplicatePivotEntry {
        antecedent: String,
        consequent: String,
    },
}
