//! HTTP client for a registry's v2 API.
//!
//! [`RegistryClient`] turns the three [`Registry`] operations into single
//! `GET` exchanges over a borrowed [`Transport`]. Every exchange follows the
//! same shape: build the request, send it, require `200 OK`, then decode the
//! JSON body or hand the raw bytes back.

use crate::context::Context;
use crate::endpoint::Endpoint;
use crate::error::{McrError, Result};
use crate::manifest::{ACCEPTED_MEDIA_TYPES, Manifest};
use crate::registry::Registry;
use crate::transport::{Transport, default_transport};
use hyper::ext::ReasonPhrase;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use reqwest::{Client as ReqwestClient, Method, Request, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::{debug, trace};


/// Upper bound on how much of a non-200 body is read before it is dropped.
const MAX_DRAIN_BYTES: usize = 64 * 1024;

/// Response from the catalog API endpoint.
#[derive(Debug, Deserialize)]
struct CatalogResponse {
    /// List of repository names; registries send `null` for an empty catalog
    #[serde(default)]
    repositories: Option<Vec<String>>,
}

/// Response from the tags list API endpoint.
#[derive(Debug, Deserialize)]
struct TagsResponse {
    /// List of tag names; `null` for a repository without tags
    #[serde(default)]
    tags: Option<Vec<String>>,
}

/// Read-only client for a registry's v2 API.
///
/// The client borrows its transport and never owns its lifecycle. It holds
/// no mutable state, so a single instance can serve concurrent callers as
/// long as the transport can.
///
/// # Examples
///
/// ```no_run
/// use libmcr::{Context, Registry, RegistryClient};
///
/// # #[tokio::main]
/// # async fn main() -> libmcr::Result<()> {
/// let client = RegistryClient::default();
/// let ctx = Context::background();
///
/// let tags = client.tags(&ctx, "dotnet/runtime").await?;
/// let manifest = client.manifest(&ctx, "dotnet/runtime", &tags[0]).await?;
/// println!("{} ({} bytes)", manifest.media_type(), manifest.payload().len());
/// # Ok(())
/// # }
/// ```
pub struct RegistryClient<'t, T = ReqwestClient> {
    /// Borrowed request sender
    transport: &'t T,
    /// Registry API root (e.g., "https://mcr.microsoft.com/v2")
    endpoint: Endpoint,
}

impl<'t, T: Transport> RegistryClient<'t, T> {
    /// Creates a client that sends requests through `transport` to the default endpoint.
    pub fn new(transport: &'t T) -> Self {
        Self {
            transport,
            endpoint: Endpoint::default(),
        }
    }

    /// Replaces the endpoint the client talks to.
    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Returns the registry API root.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the borrowed transport.
    pub fn transport(&self) -> &'t T {
        self.transport
    }

    /// Sends `GET {endpoint}/{path}` and returns the response once it is known to be `200 OK`.
    async fn send(&self, path: &str, accept: &[&'static str]) -> Result<Response> {
        let url = self.endpoint.join(path)?;
        let mut request = Request::new(Method::GET, url);
        for &media_type in accept {
            request
                .headers_mut()
                .append(ACCEPT, HeaderValue::from_static(media_type));
        }

        let url = request.url().to_string();
        debug!(%url, "sending registry request");

        let response = self
            .transport
            .execute(request)
            .await
            .map_err(|e| McrError::from_reqwest(e, &url))?;

        let status = response.status();
        debug!(%url, %status, "registry responded");

        if status != StatusCode::OK {
            let error = McrError::upstream_with_reason(status, reason_phrase(&response));
            drain(response).await;
            return Err(error);
        }

        Ok(response)
    }

    /// Fetches `path` and decodes the JSON body into `D`.
    async fn fetch_json<D: DeserializeOwned>(&self, path: &str, what: &str) -> Result<D> {
        let response = self.send(path, &[]).await?;
        let body = read_body(response).await?;
        serde_json::from_slice(&body).map_err(|e| {
            McrError::decode_with_source(format!("Failed to parse {} response", what), e)
        })
    }
}

impl<'t> RegistryClient<'t, ReqwestClient> {
    /// Creates a client over an optional `reqwest::Client`.
    ///
    /// `None` selects the process-wide [`default_transport`].
    pub fn with_http_client(http: Option<&'t ReqwestClient>) -> Self {
        let transport = match http {
            Some(http) => http,
            None => default_transport(),
        };
        RegistryClient::new(transport)
    }
}

impl Default for RegistryClient<'static, ReqwestClient> {
    fn default() -> Self {
        RegistryClient::new(default_transport())
    }
}

impl<T> Clone for RegistryClient<'_, T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport,
            endpoint: self.endpoint.clone(),
        }
    }
}

impl<T> fmt::Debug for RegistryClient<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl<T: Transport> Registry for RegistryClient<'_, T> {
    /// Lists repositories via `GET {endpoint}/_catalog`.
    ///
    /// Only the first page the registry returns is read.
    async fn repositories(&self, ctx: &Context) -> Result<Vec<String>> {
        ctx.run(async {
            let catalog: CatalogResponse = self.fetch_json("_catalog", "catalog").await?;
            let mut repositories = catalog.repositories.unwrap_or_default();
            repositories.sort();
            Ok(repositories)
        })
        .await
    }

    /// Lists tags via `GET {endpoint}/{repository}/tags/list`.
    ///
    /// A missing repository is reported like any other non-200 status.
    async fn tags(&self, ctx: &Context, repository: &str) -> Result<Vec<String>> {
        ctx.run(async {
            let path = format!("{}/tags/list", repository);
            let response: TagsResponse = self.fetch_json(&path, "tags").await?;
            let mut tags = response.tags.unwrap_or_default();
            tags.sort();
            Ok(tags)
        })
        .await
    }

    /// Fetches `GET {endpoint}/{repository}/manifests/{reference}`.
    ///
    /// Both the manifest list and the single manifest media types are
    /// offered, so the registry picks the richer one when it has it.
    async fn manifest(
        &self,
        ctx: &Context,
        repository: &str,
        reference: &str,
    ) -> Result<Manifest> {
        ctx.run(async {
            let path = format!("{}/manifests/{}", repository, reference);
            let response = self.send(&path, &ACCEPTED_MEDIA_TYPES).await?;

            let media_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            let payload = read_body(response).await?;

            Ok(Manifest::new(media_type, payload))
        })
        .await
    }
}

/// Returns the reason phrase the server sent when it differs from the canonical one.
fn reason_phrase(response: &Response) -> Option<&str> {
    response
        .extensions()
        .get::<ReasonPhrase>()
        .and_then(|reason| std::str::from_utf8(reason.as_bytes()).ok())
}

/// Reads and discards up to [`MAX_DRAIN_BYTES`] of an error body.
///
/// A body that fully drains lets the connection go back to the pool; a
/// larger one is dropped unread. Returns the number of bytes discarded.
async fn drain(mut response: Response) -> usize {
    let mut drained = 0;
    while drained < MAX_DRAIN_BYTES {
        match response.chunk().await {
            Ok(Some(chunk)) => drained += chunk.len(),
            Ok(None) | Err(_) => break,
        }
    }
    trace!(url = %response.url(), bytes = drained, "drained error body");
    drained
}

/// Reads the whole response body.
async fn read_body(response: Response) -> Result<Vec<u8>> {
    let url = response.url().to_string();
    let body = response
        .bytes()
        .await
        .map_err(|e| McrError::from_reqwest(e, &url))?;
    trace!(%url, bytes = body.len(), "read response body");
    Ok(body.to_vec())
}
