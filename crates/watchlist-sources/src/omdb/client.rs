//! OMDb (Open Movie Database) search client.
//!
//! Every request carries the API key as a query parameter, so URLs are never logged.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use watchlist_config::DEFAULT_OMDB_BASE_URL;

use super::api;
use crate::error::CatalogError;
use crate::traits::{CatalogSearch, CatalogSource};

#[derive(Debug, Clone)]
pub struct OmdbConfig {
    pub api_key: String,
    pub base_url: Option<String>,
    /// Unset leaves reqwest's default (no overall timeout).
    pub timeout: Option<Duration>,
}

pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(config: OmdbConfig) -> Result<Self, CatalogError> {
        if config.api_key.trim().is_empty() {
            return Err(CatalogError::NotConfigured(
                "OMDb API key is required".to_string(),
            ));
        }

        let mut builder = Client::builder().user_agent(concat!("reelmark/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_OMDB_BASE_URL.to_string());

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl CatalogSource for OmdbClient {
    fn source_name(&self) -> &str {
        "omdb"
    }

    async fn search(&self, query: &str) -> Result<CatalogSearch, CatalogError> {
        debug!(operation = "omdb_search", query = query, "OMDb search");

        let url = api::search_url(&self.base_url, query, &self.api_key);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return api::parse_search_response(&body);
        }

        // OMDb reports a bad key or an exhausted quota as a 401 with its usual
        // `"Response": "False"` payload; that is a miss, not a transport failure.
        match api::parse_search_response(&body) {
            Ok(miss @ CatalogSearch::Miss { .. }) => {
                debug!(
                    operation = "omdb_search",
                    status = status.as_u16(),
                    "OMDb rejected the search"
                );
                Ok(miss)
            }
            _ => Err(CatalogError::ApiError {
                status: status.as_u16(),
                message: body,
            }),
        }
    }
}
