//! Basic usage example for the libmcr library.
//!
//! Lists a few repositories, the tags of one of them, and fetches the
//! manifest behind a tag.
//!
//! Run with: cargo run --example basic_usage [endpoint]

use libmcr::{Context, Endpoint, Registry, RegistryClient};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let endpoint = match std::env::args().nth(1) {
        Some(url) => Endpoint::new(&url)?,
        None => Endpoint::default(),
    };
    println!("Registry: {}\n", endpoint);

    let client = RegistryClient::default().with_endpoint(endpoint);
    let ctx = Context::background().with_timeout(Duration::from_secs(30));

    let repositories = match client.repositories(&ctx).await {
        Ok(repositories) => repositories,
        Err(e) => {
            eprintln!("✗ Failed to list repositories: {}", e);
            return Ok(());
        }
    };

    println!("✓ Found {} repositories:\n", repositories.len());
    for repo in repositories.iter().take(10) {
        println!("  - {}", repo);
    }
    if repositories.len() > 10 {
        println!("  ... and {} more", repositories.len() - 10);
    }
    println!();

    let Some(repo) = repositories.first() else {
        return Ok(());
    };

    let tags = client.tags(&ctx, repo).await?;
    println!("✓ Found {} tags in '{}':\n", tags.len(), repo);
    for tag in tags.iter().take(5) {
        println!("  - {}:{}", repo, tag);
    }
    println!();

    if let Some(tag) = tags.first() {
        let manifest = client.manifest(&ctx, repo, tag).await?;
        println!("✓ Manifest for {}:{}", repo, tag);
        println!("  Media type: {}", manifest.media_type());
        println!("  Size:       {} bytes", manifest.payload().len());
        if manifest.is_manifest_list() {
            println!("  (multi-platform manifest list)");
        }
    }

    Ok(())
}
