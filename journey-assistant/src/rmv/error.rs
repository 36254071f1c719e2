//! RMV client error types.

use std::fmt;

/// Errors from the RMV HTTP client.
#[derive(Debug)]
pub enum RmvError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    Api { status: u16, message: String },

    /// Rate limited by the API
    RateLimited,

    /// Invalid API key or unauthorized
    Unauthorized,
}

impl RmvError {
    /// Whether an outer caller may reasonably retry with backoff.
    ///
    /// Everything except a malformed response counts as transient:
    /// network failures, auth rejections, and rate limits can all clear
    /// up on their own, while a payload we cannot parse will not.
    pub fn is_transient(&self) -> bool {
        !matches!(self, RmvError::Json { .. })
    }
}

impl fmt::Display for RmvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RmvError::Http(e) => write!(f, "HTTP error: {e}"),
            RmvError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            RmvError::Api { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            RmvError::RateLimited => write!(f, "rate limited by RMV API"),
            RmvError::Unauthorized => write!(f, "unauthorized (invalid API key)"),
        }
    }
}

impl std::error::Error for RmvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RmvError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RmvError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the accessId credential; strip it
        // before the error can reach a log line.
        RmvError::Http(err.without_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RmvError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = RmvError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("<html>"));

        assert_eq!(
            RmvError::Unauthorized.to_string(),
            "unauthorized (invalid API key)"
        );
    }

    #[test]
    fn transient_classification() {
        assert!(RmvError::Unauthorized.is_transient());
        assert!(RmvError::RateLimited.is_transient());
        assert!(
            RmvError::Api {
                status: 503,
                message: String::new(),
            }
            .is_transient()
        );
        assert!(
            !RmvError::Json {
                message: "truncated".into(),
                body: None,
            }
            .is_transient()
        );
    }
}
