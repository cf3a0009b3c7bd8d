//! Application context that holds resolved configuration
//!
//! The context is built following the precedence order:
//! 1. Default values
//! 2. Config file values
//! 3. Environment variables
//! 4. CLI flags
//!
//! Once built, the context is passed as read-only throughout the application.

use libmcr::Config;
use std::path::Path;

/// Application context with resolved configuration
#[derive(Debug)]
pub struct AppContext {
    /// Resolved configuration
    pub config: Config,
}

impl AppContext {
    /// Build context with precedence: defaults > config file > env vars > CLI flags
    pub fn build(
        config_path: Option<&Path>,
        endpoint: Option<String>,
        timeout: Option<u64>,
    ) -> libmcr::Result<Self> {
        // 1-3. Defaults, config file and MCR_* environment variables
        let config = Config::load(config_path)?;

        // 4. CLI flags (highest priority)
        Ok(Self::from_config(config, endpoint, timeout))
    }

    /// Applies CLI flag overrides to an already loaded configuration.
    pub fn from_config(mut config: Config, endpoint: Option<String>, timeout: Option<u64>) -> Self {
        if let Some(endpoint) = endpoint {
            config.endpoint = endpoint;
        }
        if let Some(timeout) = timeout {
            config.network.timeout = timeout;
        }
        Self { config }
    }
}

/// Maps the `-v` count to a default log filter.
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
