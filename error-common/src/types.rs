use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure classification carried in every tool failure envelope.
///
/// Callers branch on this kind rather than parsing message text. The REST
/// proxy maps it onto HTTP status codes; the CLI uses it for exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Missing or malformed request arguments
    Validation,
    /// A lookup by identifier had no match
    NotFound,
    /// An external collaborator (generation service, backing store) failed
    Upstream,
    /// Unexpected internal fault
    Internal,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::NotFound => write!(f, "not_found"),
            Self::Upstream => write!(f, "upstream"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

/// Simplified error enum for common use cases
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Lookup-by-identifier misses
    #[error("Not found: {0}")]
    NotFound(String),

    /// External service errors
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Internal system errors
    #[error("Internal error: {0}")]
    Internal(String),

    /// Configuration errors; fatal at startup
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServiceError {
    /// Classify this error for a failure envelope.
    ///
    /// Configuration errors terminate the process before any call is
    /// accepted, so a `Config` reaching an envelope is itself an internal
    /// fault and is classified as one.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Upstream(_) => ErrorKind::Upstream,
            Self::Internal(_) | Self::Config(_) => ErrorKind::Internal,
        }
    }
}

/// Result type alias for Prescribe Engine operations
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Async logging function for errors
pub async fn log_error(context: &str, error: &ServiceError) {
    tracing::error!(
        context = context,
        kind = %error.kind(),
        error = %error,
        "Prescribe Engine error occurred"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_classify_by_variant() {
        assert_eq!(
            ServiceError::Validation("x".into()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(ServiceError::NotFound("x".into()).kind(), ErrorKind::NotFound);
        assert_eq!(ServiceError::Upstream("x".into()).kind(), ErrorKind::Upstream);
        assert_eq!(ServiceError::Internal("x".into()).kind(), ErrorKind::Internal);
        assert_eq!(ServiceError::Config("x".into()).kind(), ErrorKind::Internal);
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::NotFound).unwrap();
        assert_eq!(json, "\"not_found\"");
    }
}
