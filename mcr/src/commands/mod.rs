/// Image command handlers (repositories, tags, manifests)
pub mod image;

/// Version command handlers
pub mod version;
