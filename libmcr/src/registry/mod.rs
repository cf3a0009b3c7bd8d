//! The registry capability set.
//!
//! [`Registry`] names the three read-only operations every registry client
//! offers. [`RegistryClient`](crate::RegistryClient) is the HTTP-backed
//! implementation; code that only needs the operations should take
//! `impl Registry` so a fake can be substituted in tests.

use crate::context::Context;
use crate::error::Result;
use crate::manifest::Manifest;
use std::future::Future;

/// Read-only operations against a container registry.
pub trait Registry: Send + Sync {
    /// Lists repository names in ascending lexicographic order.
    fn repositories(&self, ctx: &Context) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// Lists the tags of `repository` in ascending lexicographic order.
    fn tags(
        &self,
        ctx: &Context,
        repository: &str,
    ) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// Fetches the manifest (or manifest list) for `repository` at `reference`.
    ///
    /// `reference` is either a tag or a digest.
    fn manifest(
        &self,
        ctx: &Context,
        repository: &str,
        reference: &str,
    ) -> impl Future<Output = Result<Manifest>> + Send;
}
