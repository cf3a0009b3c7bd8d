//! HTTP transport seam.
//!
//! [`Transport`] is the request-sender capability a
//! [`RegistryClient`](crate::RegistryClient) borrows. `reqwest::Client`
//! implements it for production use; tests substitute their own sender.

use crate::error::{McrError, Result};
use reqwest::{Client as ReqwestClient, Request, Response};
use std::future::Future;
use std::sync::LazyLock;
use std::time::Duration;


/// Sends a fully built HTTP request and yields the response head.
///
/// Implementations must be safe to share between concurrent callers; the
/// registry client adds no locking of its own.
pub trait Transport: Send + Sync {
    /// Executes `request`, resolving once response headers have arrived.
    fn execute(&self, request: Request) -> impl Future<Output = reqwest::Result<Response>> + Send;
}

impl Transport for ReqwestClient {
    fn execute(&self, request: Request) -> impl Future<Output = reqwest::Result<Response>> + Send {
        ReqwestClient::execute(self, request)
    }
}

static DEFAULT_TRANSPORT: LazyLock<ReqwestClient> = LazyLock::new(ReqwestClient::new);

/// Returns the process-wide default transport.
///
/// Built on first use with reqwest's defaults and then shared by every
/// client constructed without an explicit transport.
pub fn default_transport() -> &'static ReqwestClient {
    &DEFAULT_TRANSPORT
}

/// Configuration for building a `reqwest::Client` transport.
///
/// # Examples
///
/// ```
/// use libmcr::transport::TransportConfig;
///
/// let config = TransportConfig::new()
///     .with_timeout(60)
///     .with_max_idle_per_host(20);
/// let http = config.build().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Request timeout in seconds (default: 30)
    pub timeout_seconds: u64,
    /// Maximum idle connections per host (default: 10)
    pub max_idle_per_host: usize,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            max_idle_per_host: 10,
            user_agent: format!("mcr/{}", crate::version()),
        }
    }
}

impl TransportConfig {
    /// Creates a new configuration with default values.
    ///
    /// Default values:
    /// - timeout: 30 seconds
    /// - max_idle_per_host: 10 connections
    /// - user_agent: `mcr/<version>`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the request timeout in seconds.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Sets the maximum idle connections per host.
    pub fn with_max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = max;
        self
    }

    /// Sets the User-Agent header value.
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Builds a `reqwest::Client` from this configuration.
    pub fn build(&self) -> Result<ReqwestClient> {
        ReqwestClient::builder()
            .timeout(Duration::from_secs(self.timeout_seconds))
            .pool_max_idle_per_host(self.max_idle_per_host)
            .user_agent(self.user_agent.as_str())
            .build()
            .map_err(|e| McrError::transport_with_source("Failed to create HTTP client", e))
    }
}
