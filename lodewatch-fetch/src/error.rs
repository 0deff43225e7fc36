//! Fetch error types.

use thiserror::Error;

/// Error type for fetch operations.
///
/// Every variant is a transport failure in the sense of the caller's
/// contract: the request did not produce a usable page body.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed (connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status code.
    #[error("Unexpected status code: {0}")]
    HttpStatus(reqwest::StatusCode),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_display() {
        let err = FetchError::HttpStatus(reqwest::StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_string(), "Unexpected status code: 503 Service Unavailable");
    }

    #[test]
    fn test_invalid_url_from_parse_error() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err = FetchError::from(parse_err);
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }
}
