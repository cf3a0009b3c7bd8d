//! Handlers for the repository, tag and manifest commands.
//!
//! Handlers take any [`Registry`] and write to caller-supplied sinks so
//! they can run against a fake registry and in-memory buffers.

use crate::format::{self, OutputFormat};
use libmcr::{Context, Registry};
use std::io::Write;
use tracing::info;


/// Handle the repos command (list repositories in the registry)
pub async fn handle_repos<R, W>(
    registry: &R,
    ctx: &Context,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: Registry,
    W: Write,
{
    let repositories = registry.repositories(ctx).await?;
    info!(count = repositories.len(), "listed repositories");
    format::write_list(out, &repositories, format)?;
    Ok(())
}

/// Handle the tags command (list tags for a repository)
pub async fn handle_tags<R, W>(
    registry: &R,
    ctx: &Context,
    repository: &str,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: Registry,
    W: Write,
{
    let tags = registry.tags(ctx, repository).await?;
    info!(repository, count = tags.len(), "listed tags");
    format::write_list(out, &tags, format)?;
    Ok(())
}

/// Handle the manifest command.
///
/// The raw manifest goes to `out` byte for byte; the media type goes to
/// `info_out` so piping the manifest stays clean.
pub async fn handle_manifest<R, W, E>(
    registry: &R,
    ctx: &Context,
    repository: &str,
    reference: &str,
    out: &mut W,
    info_out: &mut E,
) -> anyhow::Result<()>
where
    R: Registry,
    W: Write,
    E: Write,
{
    let manifest = registry.manifest(ctx, repository, reference).await?;
    info!(
        repository,
        reference,
        bytes = manifest.payload().len(),
        "fetched manifest"
    );

    let media_type = if manifest.media_type().is_empty() {
        "(none)"
    } else {
        manifest.media_type()
    };
    writeln!(info_out, "Media type: {}", media_type)?;

    out.write_all(manifest.payload())?;
    out.flush()?;
    Ok(())
}
