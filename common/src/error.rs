//! Error types

use thiserror::Error;

/// Client-wide error type
///
/// `Validation` and `Request` messages are shown to the user verbatim
/// in the error banner, so they carry no prefix.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Missing or invalid local input. Never reaches the network.
    #[error("{0}")]
    Validation(String),

    /// Non-2xx response or transport failure. Carries the backend's
    /// `detail` string, or a per-operation fallback message.
    #[error("{0}")]
    Request(String),

    /// Local persistence unavailable. Settings fall back to in-memory
    /// values for the session.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_is_verbatim() {
        let error = Error::Validation("Please paste project content".to_string());
        assert_eq!(format!("{}", error), "Please paste project content");
    }

    #[test]
    fn test_request_display_is_verbatim() {
        let error = Error::Request("LLM client not configured".to_string());
        assert_eq!(format!("{}", error), "LLM client not configured");
    }

    #[test]
    fn test_storage_display() {
        let error = Error::Storage("localStorage unavailable".to_string());
        assert_eq!(
            format!("{}", error),
            "Storage error: localStorage unavailable"
        );
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Validation("missing field".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Validation"));
        assert!(debug.contains("missing field"));
    }
}
