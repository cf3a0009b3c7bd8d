use libmcr::manifest::{MANIFEST_LIST_V2, MANIFEST_V2};
use libmcr::{Context, Endpoint, Manifest, McrError, Registry, RegistryClient, Result};
use std::collections::HashMap;

/// Registry double backed by in-memory data.
struct FakeRegistry {
    tags: HashMap<String, Vec<String>>,
}

impl FakeRegistry {
    fn new() -> Self {
        let mut tags = HashMap::new();
        tags.insert(
            "dotnet/runtime".to_string(),
            vec!["8.0".to_string(), "6.0".to_string()],
        );
        tags.insert("dotnet/sdk".to_string(), vec!["latest".to_string()]);
        Self { tags }
    }
}

impl Registry for FakeRegistry {
    async fn repositories(&self, ctx: &Context) -> Result<Vec<String>> {
        if let Some(err) = ctx.err() {
            return Err(err);
        }
        let mut repositories: Vec<String> = self.tags.keys().cloned().collect();
        repositories.sort();
        Ok(repositories)
    }

    async fn tags(&self, _ctx: &Context, repository: &str) -> Result<Vec<String>> {
        let mut tags = self
            .tags
            .get(repository)
            .cloned()
            .ok_or_else(|| McrError::upstream(reqwest::StatusCode::NOT_FOUND))?;
        tags.sort();
        Ok(tags)
    }

    async fn manifest(&self, _ctx: &Context, _repository: &str, reference: &str) -> Result<Manifest> {
        let media_type = if reference.starts_with("sha256:") {
            MANIFEST_V2
        } else {
            MANIFEST_LIST_V2
        };
        Ok(Manifest::new(media_type, b"{}".to_vec()))
    }
}

/// Walks the registry the way a caller depending only on the trait would.
async fn newest_tags<R: Registry>(registry: &R, ctx: &Context) -> Result<Vec<(String, String)>> {
    let mut newest = Vec::new();
    for repository in registry.repositories(ctx).await? {
        let tags = registry.tags(ctx, &repository).await?;
        if let Some(tag) = tags.last() {
            newest.push((repository, tag.clone()));
        }
    }
    Ok(newest)
}

#[tokio::test]
async fn test_fake_registry_through_trait() {
    let registry = FakeRegistry::new();
    let newest = newest_tags(&registry, &Context::background()).await.unwrap();

    assert_eq!(
        newest,
        vec![
            ("dotnet/runtime".to_string(), "8.0".to_string()),
            ("dotnet/sdk".to_string(), "latest".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_fake_registry_honours_cancellation() {
    let registry = FakeRegistry::new();
    let ctx = Context::background();
    ctx.cancel();

    let result = newest_tags(&registry, &ctx).await;
    assert!(matches!(result, Err(McrError::Canceled)));
}

#[tokio::test]
async fn test_fake_manifest_media_types() {
    let registry = FakeRegistry::new();
    let ctx = Context::background();

    let by_tag = registry.manifest(&ctx, "dotnet/runtime", "8.0").await.unwrap();
    let by_digest = registry
        .manifest(&ctx, "dotnet/runtime", "sha256:abc")
        .await
        .unwrap();

    assert!(by_tag.is_manifest_list());
    assert_eq!(by_digest.media_type(), MANIFEST_V2);
}

#[test]
fn test_client_construction_from_config() {
    let config = libmcr::Config::from_yaml_str("endpoint: localhost:5000/v2").unwrap();
    let http = config.transport_config().build().unwrap();
    let client = RegistryClient::new(&http).with_endpoint(config.endpoint().unwrap());

    assert_eq!(
        client.endpoint(),
        &Endpoint::new("https://localhost:5000/v2").unwrap()
    );
}

#[test]
fn test_version_is_reported() {
    assert!(!libmcr::version().is_empty());
}
