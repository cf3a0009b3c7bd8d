//! Manifest results and the media types offered when fetching them.


/// Docker Distribution v2 manifest list (multi-platform).
pub const MANIFEST_LIST_V2: &str = "application/vnd.docker.distribution.manifest.list.v2+json";

/// Docker Distribution v2 image manifest (single platform).
pub const MANIFEST_V2: &str = "application/vnd.docker.distribution.manifest.v2+json";

/// Media types sent as `Accept` headers, richest representation first.
pub const ACCEPTED_MEDIA_TYPES: [&str; 2] = [MANIFEST_LIST_V2, MANIFEST_V2];

/// A manifest as returned by the registry: declared media type plus raw bytes.
///
/// The payload is not parsed. Resolving a manifest list to a platform
/// manifest is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    media_type: String,
    payload: Vec<u8>,
}

impl Manifest {
    /// Creates a manifest from its media type and payload.
    pub fn new<S: Into<String>>(media_type: S, payload: Vec<u8>) -> Self {
        Self {
            media_type: media_type.into(),
            payload,
        }
    }

    /// The `Content-Type` the registry declared; empty when none was sent.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// The raw response body.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Returns true when the declared media type is the manifest list type.
    pub fn is_manifest_list(&self) -> bool {
        self.media_type == MANIFEST_LIST_V2
    }

    /// Splits the manifest into `(media_type, payload)`.
    pub fn into_parts(self) -> (String, Vec<u8>) {
        (self.media_type, self.payload)
    }
}
