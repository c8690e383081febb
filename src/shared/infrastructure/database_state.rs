use super::database::Database;
use crate::shared::config::CatalogConfig;
use crate::shared::errors::AppError;
use std::sync::Arc;

/// Represents the state of the database connection
/// This allows the application to fall back to in-memory storage
/// instead of terminating when PostgreSQL is unreachable
#[derive(Debug, Clone)]
pub enum DatabaseState {
    /// Database is available, migrated and ready for use
    Available(Arc<Database>),
    /// No database configured; the catalog runs in memory
    Disabled,
    /// Database is unavailable with the reason for failure
    Unavailable { reason: String },
}

impl DatabaseState {
    /// Open the pool and apply migrations. Blocking.
    pub fn initialize(config: &CatalogConfig) -> Self {
        if config.database_url.is_none() {
            log::info!("No DATABASE_URL configured, using in-memory storage");
            return DatabaseState::Disabled;
        }

        let result = Database::new(config).and_then(|db| {
            db.run_migrations()?;
            Ok(db)
        });

        match result {
            Ok(db) => {
                log::info!("Database initialized successfully");
                DatabaseState::Available(Arc::new(db))
            }
            Err(e) => {
                log::error!("Database initialization failed: {}", e);
                DatabaseState::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Check if the database is available
    pub fn is_available(&self) -> bool {
        matches!(self, DatabaseState::Available(_))
    }

    /// Get the database if available, otherwise return an error
    pub fn get_database(&self) -> Result<Arc<Database>, AppError> {
        match self {
            DatabaseState::Available(db) => Ok(Arc::clone(db)),
            DatabaseState::Disabled => Err(AppError::ServiceUnavailable(
                "No database configured".to_string(),
            )),
            DatabaseState::Unavailable { reason } => Err(AppError::ServiceUnavailable(format!(
                "Database unavailable: {}",
                reason
            ))),
        }
    }

    /// Get a user-friendly status message for the database state
    pub fn status_message(&self) -> String {
        match self {
            DatabaseState::Available(_) => "Database connected".to_string(),
            DatabaseState::Disabled => "In-memory storage".to_string(),
            DatabaseState::Unavailable { reason } => format!("Database unavailable: {}", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_url_means_disabled() {
        let state = DatabaseState::initialize(&CatalogConfig::default());
        assert!(matches!(state, DatabaseState::Disabled));
        assert!(!state.is_available());
        assert!(state.get_database().is_err());
    }

    #[test]
    fn bad_url_means_unavailable() {
        let config = CatalogConfig::default().with_database_url("mysql://localhost/catalog");
        let state = DatabaseState::initialize(&config);
        assert!(state.status_message().starts_with("Database unavailable"));
    }
}
