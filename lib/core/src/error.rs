use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(String),

    #[error("Insufficient ideas: need at least {needed}, got {actual}")]
    InsufficientIdeas { needed: usize, actual: usize },

    #[error("Empty vocabulary: no tokens survived normalization and no embedding table is loaded")]
    EmptyVocabulary,

    #[error("Invalid matrix dimension: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
