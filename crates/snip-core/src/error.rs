use thiserror::Error;

/// Result type for link registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Expected, caller-recoverable failures of the link registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("short code already exists: {0}")]
    CodeConflict(String),
    #[error("short code not found: {0}")]
    NotFound(String),
    #[error("short link expired: {0}")]
    Expired(String),
    #[error("no free short code found after {attempts} attempts")]
    ExhaustedCapacity { attempts: u32 },
}
