//! Error types for the flight board Lambda.

use std::error::Error as _;

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while serving a flight board request.
///
/// The `Display` text of every variant is the message sent back to the client.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP method other than GET or OPTIONS
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Validation error
    #[error("{0}")]
    Validation(String),

    /// Configuration error
    #[error("{0}")]
    Config(String),

    /// Airport name missing from the directory
    #[error("Airport not found: {0}")]
    AirportNotFound(String),

    /// Transport, timeout, status or decoding failure talking to the provider
    #[error("{0}")]
    Upstream(String),

    /// Provider answered with JSON that has no `data` list
    #[error("Invalid API response")]
    InvalidUpstreamResponse,
}

impl Error {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation(_) => 400,
            Error::AirportNotFound(_) => 404,
            Error::MethodNotAllowed => 405,
            _ => 500,
        }
    }
}

impl From<reqwest::Error> for Error {
    /// Flattens the whole cause chain, so "connection refused" and "timed out"
    /// survive past reqwest's generic top-level message.
    fn from(err: reqwest::Error) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !text.is_empty() && !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        Error::Upstream(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::MethodNotAllowed.status_code(), 405);
        assert_eq!(Error::Validation("x".into()).status_code(), 400);
        assert_eq!(Error::AirportNotFound("x".into()).status_code(), 404);
        assert_eq!(Error::Config("x".into()).status_code(), 500);
        assert_eq!(Error::Upstream("x".into()).status_code(), 500);
        assert_eq!(Error::InvalidUpstreamResponse.status_code(), 500);
    }

    #[test]
    fn test_client_messages() {
        assert_eq!(Error::MethodNotAllowed.to_string(), "Method not allowed");
        assert_eq!(
            Error::AirportNotFound("Atlantis".into()).to_string(),
            "Airport not found: Atlantis"
        );
        assert_eq!(
            Error::InvalidUpstreamResponse.to_string(),
            "Invalid API response"
        );
        assert_eq!(
            Error::Upstream("connection refused".into()).to_string(),
            "connection refused"
        );
    }
}
