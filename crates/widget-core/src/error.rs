//! Error Types

use thiserror::Error;

/// Result type alias for widget operations
pub type Result<T> = std::result::Result<T, EmbedError>;

/// Construction-time configuration errors
///
/// Kept as its own enum so the configuration guard's contract stays precise
/// and callers can match on the exact failure kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `projectID` is required for every widget
    #[error("projectID is required and must be non-empty")]
    MissingProjectId,
}

/// Widget error types
#[derive(Error, Debug)]
pub enum EmbedError {
    /// Invalid construction input
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid setter argument or missing render precondition
    #[error("Validation error: {0}")]
    Validation(String),

    /// A host selector matched no element
    #[error("Host element not found: {0}")]
    Resolution(String),

    /// The isolated surface could not be created
    #[error("Surface error: {0}")]
    Surface(String),

    /// The rendering collaborator failed; carried through unchanged
    #[error("Mount error: {0}")]
    Mount(anyhow::Error),
}

impl EmbedError {
    /// Convert to a user-friendly message
    pub fn user_message(&self) -> &str {
        match self {
            EmbedError::Config(_) => "The widget is misconfigured.",
            EmbedError::Validation(_) => "Invalid payment parameters.",
            EmbedError::Resolution(_) | EmbedError::Surface(_) => {
                "The payment form could not be placed on this page."
            }
            EmbedError::Mount(_) => "The payment form failed to load. Please try again.",
        }
    }
}

impl From<anyhow::Error> for EmbedError {
    fn from(err: anyhow::Error) -> Self {
        EmbedError::Mount(err)
    }
}
