use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Store command failed: {0}")]
    StoreCommand(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// True for failures that mean the store cannot be reached at all.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, DomainError::StoreUnavailable(_))
    }
}
