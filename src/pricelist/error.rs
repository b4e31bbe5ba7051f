use std::path::PathBuf;
use thiserror::Error;

/// A value that would break a stored-record invariant.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstraintViolation {
    #[error("base price must not be negative (got {0})")]
    NegativePrice(f64),

    #[error("discount must be between 0 and 100 (got {0})")]
    DiscountOutOfRange(f64),

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("product with code {0} already exists")]
    DuplicateCode(u32),

    #[error("{field} must not contain ';' or line breaks")]
    ReservedCharacter { field: &'static str },
}

#[derive(Error, Debug)]
pub enum PriceListError {
    #[error("Cannot access {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Constraint(#[from] ConstraintViolation),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PriceListError>;
