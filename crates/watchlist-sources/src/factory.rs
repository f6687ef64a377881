use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;
use watchlist_config::{Config, CredentialStore, OMDB_API_KEY_ENV};

use crate::omdb::{OmdbClient, OmdbConfig};
use crate::traits::CatalogSource;

/// Build the configured catalog source.
pub fn create_catalog_source(
    config: &Config,
    credentials: &CredentialStore,
) -> Result<Arc<dyn CatalogSource>> {
    config.validate()?;

    let resolved = config.resolve_api_key(credentials).ok_or_else(|| {
        anyhow::anyhow!(
            "No OMDb API key configured. Run `reelmark config api-key` or set {}",
            OMDB_API_KEY_ENV
        )
    })?;

    let client = OmdbClient::new(OmdbConfig {
        api_key: resolved.key,
        base_url: Some(config.catalog.base_url.clone()),
        timeout: config.catalog.timeout_secs.map(Duration::from_secs),
    })?;

    info!(
        operation = "catalog_init",
        source = client.source_name(),
        base_url = client.base_url(),
        api_key_source = %resolved.source,
        "Catalog source ready"
    );

    Ok(Arc::new(client))
}
