//! Error taxonomy for the parsing service client.

use thiserror::Error;

/// Fallback message when neither the service nor the transport produced
/// anything human-readable.
pub const GENERIC_PARSE_FAILURE: &str = "Failed to parse file.";

/// Errors that can occur while submitting a file for analysis.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The request never produced a response (DNS, refused, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status.
    ///
    /// `detail` carries the service's own explanation when its error body
    /// contained one.
    #[error("service returned {status}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The `detail` field of the error body, if present.
        detail: Option<String>,
    },

    /// A 2xx response whose body did not match the expected report shape.
    #[error("malformed response body: {0}")]
    MalformedResponse(String),

    /// The selected file could not be read from disk.
    #[error("failed to read file: {0}")]
    FileRead(String),
}

impl ClientError {
    /// Collapse the error into exactly one user-facing message.
    ///
    /// Preference order: the service's `detail` string, then the
    /// transport-level message, then [`GENERIC_PARSE_FAILURE`]. The result
    /// is never empty.
    pub fn user_message(&self) -> String {
        let message = match self {
            ClientError::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ClientError::Api {
                status,
                detail: None,
            } => format!("The parsing service returned HTTP {status}."),
            ClientError::Network(msg) | ClientError::FileRead(msg) => msg.clone(),
            // A malformed success body carries nothing worth showing.
            ClientError::MalformedResponse(_) => String::new(),
        };

        if message.trim().is_empty() {
            GENERIC_PARSE_FAILURE.to_string()
        } else {
            message
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_wins_when_present() {
        let err = ClientError::Api {
            status: 422,
            detail: Some("Unsupported sheet format".to_string()),
        };
        assert_eq!(err.user_message(), "Unsupported sheet format");
    }

    #[test]
    fn status_is_named_without_detail() {
        let err = ClientError::Api {
            status: 500,
            detail: None,
        };
        assert_eq!(err.user_message(), "The parsing service returned HTTP 500.");
    }

    #[test]
    fn transport_message_passes_through() {
        let err = ClientError::Network("connection refused".to_string());
        assert_eq!(err.user_message(), "connection refused");
    }

    #[test]
    fn message_is_never_empty() {
        let cases = [
            ClientError::Network(String::new()),
            ClientError::MalformedResponse("missing field `status`".to_string()),
            ClientError::Api {
                status: 422,
                detail: Some("   ".to_string()),
            },
        ];
        for err in cases {
            assert_eq!(err.user_message(), GENERIC_PARSE_FAILURE);
        }
    }
}
