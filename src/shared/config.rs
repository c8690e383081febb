use std::env;
use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

const DEFAULT_CACHE_TTL_SECS: u64 = 1800;

/// Runtime configuration, read from the process environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// PostgreSQL URL; `None` runs the catalog on in-memory repositories
    pub database_url: Option<String>,
    /// Upper bound for the connection pool; `None` sizes it from the CPU count
    pub pool_max_size: Option<u32>,
    pub cache_enabled: bool,
    pub cache_ttl: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            pool_max_size: None,
            cache_enabled: true,
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }
}

impl CatalogConfig {
    /// Load `.env` if present, then read the environment
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let pool_max_size = match lookup("CATALOG_POOL_MAX_SIZE") {
            Some(raw) => {
                let size = parse_number::<u32>("CATALOG_POOL_MAX_SIZE", &raw)?;
                if size == 0 {
                    return Err(AppError::ConfigurationError(
                        "CATALOG_POOL_MAX_SIZE must be positive".to_string(),
                    ));
                }
                Some(size)
            }
            None => defaults.pool_max_size,
        };

        let cache_enabled = match lookup("CATALOG_CACHE_ENABLED") {
            Some(raw) => parse_flag("CATALOG_CACHE_ENABLED", &raw)?,
            None => defaults.cache_enabled,
        };

        let cache_ttl = match lookup("CATALOG_CACHE_TTL_SECS") {
            Some(raw) => Duration::from_secs(parse_number::<u64>("CATALOG_CACHE_TTL_SECS", &raw)?),
            None => defaults.cache_ttl,
        };

        Ok(Self {
            database_url,
            pool_max_size,
            cache_enabled,
            cache_ttl,
        })
    }

    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn without_cache(mut self) -> Self {
        self.cache_enabled = false;
        self
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> AppResult<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| AppError::ConfigurationError(format!("{} is not a valid number: {}", key, raw)))
}

fn parse_flag(key: &str, raw: &str) -> AppResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::ConfigurationError(format!(
            "{} is not a valid flag: {}",
            key, raw
        ))),
    }
}
