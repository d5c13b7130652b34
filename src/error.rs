//! Custom error types and handling
//!
//! Every stage of the pipeline reports failures through [`AppError`]. Only a
//! missing problem on the detail API is recoverable; everything else ends the
//! run with a non-zero exit status.

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Remote errors
    #[error("Network error: {0}")]
    Network(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Problem not found: {0}")]
    DetailNotFound(String),

    // Local errors
    #[error("Readme anchor not found: {0}")]
    AnchorNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Whether this error must abort the whole run
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::DetailNotFound(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AppError::Configuration(format!("service account key: {}", err))
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_missing_detail_is_recoverable() {
        assert!(!AppError::DetailNotFound("two-sum".to_string()).is_fatal());
        assert!(AppError::Network("timeout".to_string()).is_fatal());
        assert!(AppError::Schema("missing stat".to_string()).is_fatal());
        assert!(AppError::AnchorNotFound("README.md".to_string()).is_fatal());
    }
}
