//! Error types for the shelf CLI

use thiserror::Error;

/// Result type alias for shelf operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Catalog API errors
///
/// Every network entry point surfaces exactly one of these. The taxonomy
/// exists for logging and diagnostics; view models present all variants
/// identically through `error_message`.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to decode catalog response: {0}")]
    Decode(String),

    #[error("Catalog server error (status {0})")]
    Server(u16),

    #[error("Empty response body")]
    NoData,

    #[error("Resource not found: {0}")]
    NotFound(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CatalogError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            CatalogError::Network("Failed to connect to catalog host".to_string())
        } else {
            CatalogError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `shelf init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Catalog base URL not configured. Run `shelf init` or pass --base-url.")]
    MissingBaseUrl,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Cache storage errors
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Cache I/O error: {0}")]
    Io(String),

    #[error("Could not determine cache directory")]
    NoHome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_invalid_url() {
        let err = CatalogError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn test_catalog_error_not_found() {
        let err = CatalogError::NotFound("categories/tools".to_string());
        assert!(err.to_string().contains("categories/tools"));
    }

    #[test]
    fn test_catalog_error_server_status() {
        let err = CatalogError::Server(503);
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_catalog_error_no_data() {
        let err = CatalogError::NoData;
        assert!(err.to_string().contains("Empty"));
    }

    #[test]
    fn test_catalog_error_decode() {
        let err = CatalogError::Decode("missing field `id`".to_string());
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_config_error_not_found_hint() {
        let err = ConfigError::NotFound;
        assert!(err.to_string().contains("shelf init"));
    }

    #[test]
    fn test_config_error_missing_base_url() {
        let err = ConfigError::MissingBaseUrl;
        assert!(err.to_string().contains("--base-url"));
    }

    #[test]
    fn test_error_from_catalog_error() {
        let err: Error = CatalogError::NoData.into();
        match err {
            Error::Catalog(CatalogError::NoData) => (),
            _ => panic!("Expected Error::Catalog(CatalogError::NoData)"),
        }
    }

    #[test]
    fn test_error_from_config_error() {
        let err: Error = ConfigError::NotFound.into();
        match err {
            Error::Config(ConfigError::NotFound) => (),
            _ => panic!("Expected Error::Config(ConfigError::NotFound)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("bad: [yaml: here").unwrap_err();
        let config_err: ConfigError = yaml_err.into();
        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
