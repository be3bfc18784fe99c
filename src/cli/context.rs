//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, base URL resolution, and client initialization.

use std::path::PathBuf;
use std::sync::Arc;

use crate::cache::CachedCatalogClient;
use crate::cli::OutputFormat;
use crate::client::HttpCatalogClient;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Context for command execution containing config, client, and runtime
/// options.
pub struct CommandContext {
    /// Loaded configuration (default when no config file exists yet)
    pub config: Config,
    /// Catalog client with caching (Arc-wrapped so view models can share it)
    pub client: Arc<CachedCatalogClient<HttpCatalogClient>>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context with full initialization.
    ///
    /// The base URL resolves flag/env first, then the config file. A missing
    /// config file is fine as long as the URL came from the flag; a malformed
    /// one is always an error.
    pub fn new(
        format: OutputFormat,
        base_url_override: Option<&str>,
        config_path: Option<&str>,
        no_cache: bool,
    ) -> Result<Self> {
        let config = Self::load_config(config_path)?;

        let base_url = match base_url_override {
            Some(url) => url.to_string(),
            None => config.require_base_url()?.to_string(),
        };

        let raw_client = HttpCatalogClient::new(base_url)?;
        let client = Arc::new(CachedCatalogClient::new(raw_client, !no_cache));

        Ok(Self {
            config,
            client,
            format,
        })
    }

    fn load_config(config_path: Option<&str>) -> Result<Config> {
        let result = match config_path {
            Some(path) => Config::load_from(PathBuf::from(path)),
            None => Config::load(),
        };

        match result {
            Ok(config) => Ok(config),
            Err(Error::Config(ConfigError::NotFound)) => Ok(Config::default()),
            Err(e) => Err(e),
        }
    }
}
