use thiserror::Error;

pub type RebaseResult<T> = Result<T, RebaseError>;

#[derive(Debug, Error)]
pub enum RebaseError {
    #[error("shape mismatch: line `{line}` has {actual} values, axis has {expected}")]
    ShapeMismatch {
        line: String,
        expected: usize,
        actual: usize,
    },

    #[error("duplicate line name: {0}")]
    DuplicateLine(String),

    #[error("unknown chart id: {0}")]
    UnknownChart(String),

    #[error("chart id already registered: {0}")]
    DuplicateChart(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
