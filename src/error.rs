//! Error types for ohayo.

use thiserror::Error;

/// Errors that can occur while running ohayo.
#[derive(Error, Debug)]
pub enum OhayoError {
    /// Configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No active work session was found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The session record file is malformed or could not be persisted.
    #[error("Record store error: {0}")]
    Store(String),

    /// The Slack API accepted the request but reported a failure.
    #[error("Slack notification failed: {0}")]
    Notify(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = OhayoError::Config("SLACK_TOKEN is not set".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: SLACK_TOKEN is not set"
        );
    }

    #[test]
    fn test_not_found_error_display() {
        let err = OhayoError::NotFound("no active work session".to_string());
        assert!(err.to_string().contains("no active work session"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: OhayoError = io.into();
        assert!(matches!(err, OhayoError::Io(_)));
    }
}
