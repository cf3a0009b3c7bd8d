//! Error types for libmcr
//!
//! Every registry operation either succeeds with a complete result or fails
//! with one of the kinds below. Nothing is retried or swallowed on the way
//! back to the caller.

use reqwest::StatusCode;
use thiserror::Error;

#[cfg(test)]
mod tests;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for registry operations
#[derive(Error, Debug)]
pub enum McrError {
    /// The calling context was cancelled before the exchange finished
    #[error("context canceled")]
    Canceled,

    /// The calling context's deadline passed before the exchange finished
    #[error("context deadline exceeded")]
    DeadlineExceeded,

    /// The request could not be built (malformed URL or endpoint)
    #[error("Invalid request: {message}")]
    InvalidRequest {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// Network-level failures (connection, DNS, TLS, I/O while reading a body)
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// The registry answered with a status other than 200 OK
    #[error("Upstream error: {status}")]
    Upstream { status_code: u16, status: String },

    /// The response body did not have the expected JSON shape
    #[error("Decode error: {message}")]
    Decode {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// Configuration errors (invalid config file, bad values)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<String>,
        #[source]
        source: Option<BoxError>,
    },
}

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, McrError>;

impl McrError {
    /// Creates a new invalid request error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libmcr::error::McrError;
    ///
    /// let err = McrError::invalid_request("endpoint cannot be empty");
    /// assert!(matches!(err, McrError::InvalidRequest { .. }));
    /// ```
    pub fn invalid_request<S: Into<String>>(message: S) -> Self {
        Self::InvalidRequest {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new invalid request error with a source error.
    pub fn invalid_request_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::InvalidRequest {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new transport error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libmcr::error::McrError;
    ///
    /// let err = McrError::transport("connection refused");
    /// assert!(matches!(err, McrError::Transport { .. }));
    /// ```
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new transport error with a source error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libmcr::error::McrError;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
    /// let err = McrError::transport_with_source("failed to connect", io_err);
    /// assert!(matches!(err, McrError::Transport { .. }));
    /// ```
    pub fn transport_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an upstream error from a non-success HTTP status.
    ///
    /// The status text is the status code followed by its canonical reason phrase.
    ///
    /// # Examples
    ///
    /// ```
    /// use libmcr::error::McrError;
    /// use reqwest::StatusCode;
    ///
    /// let err = McrError::upstream(StatusCode::NOT_FOUND);
    /// assert_eq!(err.to_string(), "Upstream error: 404 Not Found");
    /// ```
    pub fn upstream(status: StatusCode) -> Self {
        Self::upstream_with_reason(status, None)
    }

    /// Creates an upstream error carrying the reason phrase the server sent.
    ///
    /// Without a reason (or with an empty one) the canonical phrase is used;
    /// codes that have none render as the bare number.
    ///
    /// # Examples
    ///
    /// ```
    /// use libmcr::error::McrError;
    /// use reqwest::StatusCode;
    ///
    /// let status = StatusCode::from_u16(599).unwrap();
    /// let err = McrError::upstream_with_reason(status, Some("Registry Overloaded"));
    /// assert_eq!(err.to_string(), "Upstream error: 599 Registry Overloaded");
    ///
    /// let err = McrError::upstream_with_reason(status, None);
    /// assert_eq!(err.to_string(), "Upstream error: 599");
    /// ```
    pub fn upstream_with_reason(status: StatusCode, reason: Option<&str>) -> Self {
        let reason = reason
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .or_else(|| status.canonical_reason());
        let text = match reason {
            Some(reason) => format!("{} {}", status.as_str(), reason),
            None => status.as_str().to_string(),
        };
        Self::Upstream {
            status_code: status.as_u16(),
            status: text,
        }
    }

    /// Creates a new decode error with a source error.
    pub fn decode_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Decode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new configuration error with a source error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libmcr::error::McrError;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    /// let err = McrError::config_with_source("failed to read config", Some("/etc/mcr.yaml"), io_err);
    /// assert!(matches!(err, McrError::Config { .. }));
    /// ```
    pub fn config_with_source<S, E>(message: S, path: Option<S>, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: Some(Box::new(source)),
        }
    }

    /// Returns true for `Canceled` and `DeadlineExceeded`.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Canceled | Self::DeadlineExceeded)
    }

    /// Returns the HTTP status code carried by an upstream error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Upstream { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Translates a reqwest error raised while sending or reading a response.
    pub(crate) fn from_reqwest(error: reqwest::Error, url: &str) -> Self {
        if error.is_builder() {
            Self::invalid_request_with_source(format!("Failed to build request for {}", url), error)
        } else if error.is_timeout() {
            Self::transport_with_source(format!("Request to {} timed out", url), error)
        } else if error.is_connect() {
            Self::transport_with_source(format!("Failed to connect to {}", url), error)
        } else if error.is_body() || error.is_decode() {
            Self::transport_with_source(format!("Failed to read response from {}", url), error)
        } else {
            Self::transport_with_source(format!("Network error communicating with {}", url), error)
        }
    }
}
