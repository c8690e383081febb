use std::sync::Arc;
use std::time::Duration;

use diesel::pg::PgConnection;
use diesel::r2d2::{self, ConnectionManager, Pool};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tokio::task;

use crate::log_info;
use crate::shared::config::CatalogConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

/// Schema migrations compiled into the binary
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(Debug)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    pub fn new(config: &CatalogConfig) -> Result<Self, AppError> {
        let database_url = Self::validated_database_url(config.database_url.as_deref())?;

        let manager = ConnectionManager::<PgConnection>::new(database_url);

        let pool_config = Self::pool_config(config.pool_max_size);
        let pool = r2d2::Pool::builder()
            .max_size(pool_config.max_size)
            .min_idle(Some(pool_config.min_idle))
            .connection_timeout(Duration::from_secs(10))
            .idle_timeout(Some(Duration::from_secs(300)))
            .max_lifetime(Some(Duration::from_secs(1800)))
            .test_on_check_out(true)
            .build(manager)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to create connection pool: {}", e))
            })?;

        log_info!(
            "Database connection pool initialized with max_size: {}, min_idle: {}",
            pool.max_size(),
            pool_config.min_idle
        );

        Ok(Self { pool })
    }

    /// Create a Database instance from an existing pool (useful for testing)
    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    fn validated_database_url(url: Option<&str>) -> Result<&str, AppError> {
        let database_url = url.ok_or_else(|| {
            AppError::ConfigurationError("DATABASE_URL is not configured".to_string())
        })?;

        if !database_url.starts_with("postgres://") && !database_url.starts_with("postgresql://") {
            return Err(AppError::ConfigurationError(
                "Invalid database URL format. Must start with postgres:// or postgresql://"
                    .to_string(),
            ));
        }

        // Log connection attempt without exposing credentials
        log_info!(
            "Initializing database connection to: {}",
            database_url.rsplit('@').next().unwrap_or("unknown_host")
        );

        Ok(database_url)
    }

    /// Pool size from configuration, or derived from the CPU count
    fn pool_config(max_size: Option<u32>) -> PoolConfig {
        let max_size = max_size.unwrap_or_else(|| {
            let cpu_count = std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4);
            std::cmp::min(cpu_count * 2, 20) as u32
        });
        let min_idle = std::cmp::min(max_size, std::cmp::max(1, max_size / 4));

        PoolConfig { max_size, min_idle }
    }

    pub fn get_connection(&self) -> Result<DbConnection, AppError> {
        let start = std::time::Instant::now();

        match self.pool.get() {
            Ok(conn) => {
                let duration = start.elapsed().as_millis() as u64;
                if duration > 100 {
                    LogContext::performance_metric("db_connection_acquire", duration, Some("slow"));
                }
                Ok(conn)
            }
            Err(e) => {
                LogContext::error_with_context(
                    &e,
                    "Failed to acquire database connection from pool",
                );
                Err(AppError::from(e))
            }
        }
    }

    /// Run blocking diesel work on the blocking thread pool
    pub async fn run<F, R>(self: &Arc<Self>, operation: F) -> AppResult<R>
    where
        F: FnOnce(&mut PgConnection) -> AppResult<R> + Send + 'static,
        R: Send + 'static,
    {
        let db = Arc::clone(self);
        task::spawn_blocking(move || {
            let mut conn = db.get_connection()?;
            operation(&mut *conn)
        })
        .await?
    }

    /// Apply pending embedded migrations; returns how many ran
    pub fn run_migrations(&self) -> AppResult<usize> {
        let mut conn = self.get_connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::DatabaseError(format!("Migration failed: {}", e)))?;

        if !applied.is_empty() {
            log_info!("Applied {} database migrations", applied.len());
        }
        Ok(applied.len())
    }

    /// Get pool statistics for monitoring
    pub fn pool_status(&self) -> PoolStatus {
        let state = self.pool.state();
        PoolStatus {
            connections: state.connections,
            idle_connections: state.idle_connections,
            max_size: self.pool.max_size(),
        }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[derive(Debug)]
pub struct PoolStatus {
    pub connections: u32,
    pub idle_connections: u32,
    pub max_size: u32,
}

#[derive(Debug, PartialEq, Eq)]
struct PoolConfig {
    max_size: u32,
    min_idle: u32,
}
