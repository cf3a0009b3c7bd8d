//! libmcr - read-only container registry client
//!
//! libmcr talks to the v2 HTTP API of an anonymously readable container
//! registry (by default `https://mcr.microsoft.com/v2`). It lists
//! repositories, lists tags, and fetches manifests.
//!
//! # Quick Start
//!
//! ```no_run
//! use libmcr::{Context, Registry, RegistryClient};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RegistryClient::default();
//!     let ctx = Context::background().with_timeout(Duration::from_secs(30));
//!
//!     for repo in client.repositories(&ctx).await? {
//!         println!("{}", repo);
//!     }
//!
//!     let manifest = client.manifest(&ctx, "dotnet/runtime", "8.0").await?;
//!     println!("{}", manifest.media_type());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Main Types
//!
//! - [`RegistryClient`] - HTTP implementation of the registry operations
//! - [`Registry`] - The three operations as a trait, for substitution in tests
//! - [`Context`] - Cancellation and deadlines for a call
//! - [`Manifest`] - Media type plus raw manifest bytes
//! - [`Endpoint`] - Registry API root
//! - [`McrError`] - Error kinds returned by every operation
//!
//! Results of listing operations are always sorted. Manifests are returned
//! unparsed; picking a platform out of a manifest list is up to the caller.

#![warn(clippy::all)]

/// Returns the libmcr crate version.
///
/// This is useful for version reporting in CLI tools and debugging.
///
/// # Examples
///
/// ```
/// let version = libmcr::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// Re-export commonly used types for convenience
pub use client::RegistryClient;
pub use config::Config;
pub use context::Context;
pub use endpoint::Endpoint;
pub use error::{McrError, Result};
pub use manifest::Manifest;
pub use registry::Registry;
pub use transport::Transport;

pub mod client;
pub mod config;
pub mod context;
pub mod endpoint;
pub mod error;
pub mod manifest;
pub mod registry;
pub mod transport;
