use thiserror::Error;

pub type Result<T> = std::result::Result<T, LadderError>;

#[derive(Error, Debug)]
pub enum LadderError {
    #[error("Words must be same length: {start:?} ({start_len}) vs {end:?} ({end_len})")]
    InvalidInput {
        start: String,
        end: String,
        start_len: usize,
        end_len: usize,
    },

    #[error("Word source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LadderError {
    pub fn source_unavailable<E: std::fmt::Display>(e: E) -> Self {
        Self::SourceUnavailable(e.to_string())
    }

    pub fn persistence<E: std::fmt::Display>(e: E) -> Self {
        Self::PersistenceFailure(e.to_string())
    }

    pub fn config<E: std::fmt::Display>(e: E) -> Self {
        Self::Config(e.to_string())
    }

    /// True for caller contract violations, as opposed to collaborator failures.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, LadderError::InvalidInput { .. })
    }
}
