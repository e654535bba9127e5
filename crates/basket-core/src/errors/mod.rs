//! Error types for the basket analytics engine.

mod config_error;
mod mining_error;
mod shape_error;
mod storage_error;

pub use config_error::ConfigError;
pub use mining_error::MiningError;
pub use shape_error::ShapeError;
pub use storage_error::StorageError;

/// Umbrella error for the whole engine.
#[derive(Debug, thiserror::Error)]
pub enum BasketError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Mining(#[from] MiningError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type BasketResult<T> = Result<T, BasketError>;
