//! Registry API root.

use crate::error::{McrError, Result};
use reqwest::Url;
use std::fmt;
use std::str::FromStr;


/// API root used when no endpoint is configured.
pub const DEFAULT_ENDPOINT: &str = "https://mcr.microsoft.com/v2";

/// Immutable base URL of a registry's v2 API (e.g. `https://mcr.microsoft.com/v2`).
///
/// Request URLs are formed by appending a path directly to this string.
///
/// # Examples
///
/// ```
/// use libmcr::Endpoint;
///
/// let endpoint = Endpoint::new("registry.example.com/v2/").unwrap();
/// assert_eq!(endpoint.as_str(), "https://registry.example.com/v2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint(String);

impl Endpoint {
    /// Validates and normalizes an endpoint URL.
    ///
    /// A missing scheme defaults to `https://`; trailing slashes are removed.
    pub fn new(url: &str) -> Result<Self> {
        let url = url.trim();

        if url.is_empty() {
            return Err(McrError::invalid_request("Endpoint cannot be empty"));
        }

        let url = if url.contains("://") {
            url.to_string()
        } else {
            format!("https://{}", url)
        };

        let parsed = Url::parse(&url).map_err(|e| {
            McrError::invalid_request_with_source(format!("Invalid endpoint '{}'", url), e)
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(McrError::invalid_request(format!(
                "Unsupported endpoint scheme '{}'",
                parsed.scheme()
            )));
        }

        Ok(Self(url.trim_end_matches('/').to_string()))
    }

    /// Returns the normalized URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Appends the `/`-separated segments of `path` below the endpoint path.
    ///
    /// Each segment is percent-encoded as a single path segment, so the
    /// result never leaves the endpoint. `.` and `..` segments are rejected.
    pub(crate) fn join(&self, path: &str) -> Result<Url> {
        let segments: Vec<&str> = path.split('/').collect();
        if let Some(dot) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(McrError::invalid_request(format!(
                "Invalid path segment '{}' in '{}'",
                dot, path
            )));
        }

        let mut url = Url::parse(&self.0).map_err(|e| {
            McrError::invalid_request_with_source(format!("Invalid endpoint '{}'", self.0), e)
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                McrError::invalid_request(format!("Endpoint '{}' cannot be a base URL", self.0))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self(DEFAULT_ENDPOINT.to_string())
    }
}

impl FromStr for Endpoint {
    type Err = McrError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
