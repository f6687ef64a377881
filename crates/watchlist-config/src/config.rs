use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use crate::credentials::CredentialStore;

pub const DEFAULT_OMDB_BASE_URL: &str = "https://www.omdbapi.com";

/// Environment variable that overrides any stored OMDb API key.
pub const OMDB_API_KEY_ENV: &str = "OMDB_API_KEY";

/// Where a resolved API key came from, in lookup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeySource {
    Environment,
    CredentialsFile,
    ConfigFile,
}

impl std::fmt::Display for ApiKeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ApiKeySource::Environment => "environment",
            ApiKeySource::CredentialsFile => "credentials file",
            ApiKeySource::ConfigFile => "config file",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedApiKey {
    pub key: String,
    pub source: ApiKeySource,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CatalogConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Prefer the credential store or `OMDB_API_KEY`; kept here for simple setups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Unset means the HTTP client's own default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Write interactive-session logs to the rolling log file instead of stderr
    #[serde(default = "default_true")]
    pub file: bool,
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_base_url() -> String {
    DEFAULT_OMDB_BASE_URL.to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: default_true(),
            level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file, falling back to defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file found, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.catalog.base_url.trim().is_empty() {
            return Err(anyhow::anyhow!("catalog.base_url cannot be empty"));
        }
        if !self.catalog.base_url.starts_with("http://") && !self.catalog.base_url.starts_with("https://") {
            return Err(anyhow::anyhow!("catalog.base_url must be an http(s) URL: {}", self.catalog.base_url));
        }
        if self.catalog.timeout_secs == Some(0) {
            return Err(anyhow::anyhow!("catalog.timeout_secs must be greater than zero"));
        }
        Ok(())
    }

    /// Resolve the OMDb API key: environment, then credential store, then config file.
    pub fn resolve_api_key(&self, credentials: &CredentialStore) -> Option<ResolvedApiKey> {
        self.resolve_api_key_from(std::env::var(OMDB_API_KEY_ENV).ok(), credentials)
    }

    fn resolve_api_key_from(&self, env_key: Option<String>, credentials: &CredentialStore) -> Option<ResolvedApiKey> {
        let usable = |key: &String| !key.trim().is_empty();
        let found = env_key
            .filter(usable)
            .map(|key| (key, ApiKeySource::Environment))
            .or_else(|| {
                credentials
                    .get_omdb_api_key()
                    .filter(|key| usable(*key))
                    .map(|key| (key.clone(), ApiKeySource::CredentialsFile))
            })
            .or_else(|| {
                self.catalog
                    .api_key
                    .clone()
                    .filter(usable)
                    .map(|key| (key, ApiKeySource::ConfigFile))
            });

        found.map(|(key, source)| {
            debug!(source = %source, "Resolved OMDb API key");
            ResolvedApiKey { key, source }
        })
    }
}
