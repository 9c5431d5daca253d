//! Error types for hnfeed.
//!
//! A single error type with explicit variants for transport, protocol and
//! input validation failures. The listing controller treats transport and
//! protocol failures the same way; the split exists for logging and for
//! callers that fetch pages directly.

use std::fmt;
use thiserror::Error;

/// The unified error type for hnfeed operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, generic HTTP).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Protocol errors (non-success status, unexpected payload shape).
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Input validation errors (endpoint URL, record shape).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Protocol-level errors from the search endpoint.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// What was wrong with the response, if known.
    pub message: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }

    /// A success status whose body did not have the expected shape.
    pub fn malformed(status: u16, reason: impl Into<String>) -> Self {
        Self::new(status, Some(format!("malformed payload: {}", reason.into())))
    }

    /// Returns true when the server answered with a non-success status.
    pub fn is_status_error(&self) -> bool {
        !(200..300).contains(&self.status)
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid search endpoint URL.
    #[error("invalid endpoint URL '{value}': {reason}")]
    EndpointUrl { value: String, reason: String },

    /// A story record that does not match the expected schema.
    #[error("invalid story: {reason}")]
    Story { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_error_display() {
        let err = ProtocolError::new(503, Some("upstream down".to_string()));
        assert_eq!(err.to_string(), "HTTP 503: upstream down");

        let bare = ProtocolError::new(404, None);
        assert_eq!(bare.to_string(), "HTTP 404");
        assert!(bare.is_status_error());
    }

    #[test]
    fn malformed_payload_is_not_a_status_error() {
        let err = ProtocolError::malformed(200, "missing field `hits`");
        assert!(!err.is_status_error());
        assert!(err.to_string().contains("missing field `hits`"));
    }

    #[test]
    fn wrapped_display() {
        let transport = Error::from(TransportError::Timeout { duration_ms: 10 });
        assert_eq!(
            transport.to_string(),
            "transport error: request timed out after 10ms"
        );

        let input = Error::from(InvalidInputError::Story {
            reason: "missing created_at".to_string(),
        });
        assert_eq!(
            input.to_string(),
            "invalid input: invalid story: missing created_at"
        );
    }
}
