use std::result;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A dimension type tag outside of `Sample`, `Range` and `Set`
    #[error("Invalid dimension type: {0:?}")]
    InvalidValue(String),

    /// An attribute or dataset holds a value of the wrong kind
    #[error("Type mismatch: {name} must be {expected}")]
    TypeMismatch { name: String, expected: &'static str },

    /// Ticks where some tick is smaller than the one before it
    #[error("Ticks are not ascending: tick {index} is smaller than the tick before it")]
    InvalidOrder { index: usize },

    #[error("Out of bounds: {0}")]
    OutOfBounds(String),

    #[error("Missing attribute: {0}")]
    MissingAttribute(String),

    #[error("No such dataset: {0}")]
    NoSuchDataset(String),

    #[error("Dataset already exists: {0}")]
    DatasetExists(String),

    #[error("Shape mismatch for {name}: expected {expected}, got {actual}")]
    ShapeMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = result::Result<T, Error>;
