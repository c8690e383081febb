/// Isolated test database that is created for one test and dropped afterwards
///
/// Uses TEST_DATABASE_URL from the environment to reach the database server.
use catalog::shared::infrastructure::database::MIGRATIONS;
use catalog::shared::infrastructure::{Database, DbPool};
use diesel::r2d2::{self, ConnectionManager};
use diesel::{sql_query, Connection, PgConnection, RunQueryDsl};
use diesel_migrations::MigrationHarness;
use futures::future::BoxFuture;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::thread;

static TEST_DB_COUNTER: AtomicU32 = AtomicU32::new(0);

/// # Example
/// ```rust
/// #[tokio::test]
/// #[ignore = "requires TEST_DATABASE_URL"]
/// async fn stores_movies() {
///     let test_db = TestDb::new();
///     test_db.run_test(|db| {
///         Box::pin(async move {
///             let catalog = postgres_catalog(db);
///             // ...
///         })
///     }).await;
/// }
/// ```
pub struct TestDb {
    default_db_url: String,
    name: String,
    pool: DbPool,
}

impl TestDb {
    /// Database name format: catalog_test_{process_id}_{counter}
    pub fn new() -> Self {
        dotenvy::dotenv().ok();

        let name = format!(
            "catalog_test_{}_{}",
            std::process::id(),
            TEST_DB_COUNTER.fetch_add(1, Ordering::SeqCst)
        );

        let test_db_url = std::env::var("TEST_DATABASE_URL")
            .expect("TEST_DATABASE_URL must be set in .env for tests");

        let mut conn = PgConnection::establish(&test_db_url)
            .expect("Failed to connect to test database server");

        sql_query(format!("CREATE DATABASE {}", name))
            .execute(&mut conn)
            .unwrap_or_else(|e| panic!("Failed to create test database {}: {}", name, e));

        // Replace the database name (everything after the last '/')
        let isolated_db_url = match test_db_url.rfind('/') {
            Some(last_slash) => format!("{}/{}", &test_db_url[..last_slash], name),
            None => panic!("Invalid TEST_DATABASE_URL format: {}", test_db_url),
        };

        let manager = ConnectionManager::<PgConnection>::new(isolated_db_url);
        let pool = r2d2::Pool::builder()
            .max_size(5)
            .test_on_check_out(true)
            .build(manager)
            .expect("Failed to build test database connection pool");

        Self {
            default_db_url: test_db_url,
            name,
            pool,
        }
    }

    /// Migrate the database, then run `test` against it
    pub async fn run_test(&self, test: impl Fn(Arc<Database>) -> BoxFuture<'static, ()>) {
        let mut conn = self
            .pool
            .get()
            .expect("Unable to connect to the test database");

        conn.run_pending_migrations(MIGRATIONS)
            .expect("Unable to migrate the test database");
        drop(conn);

        test(Arc::new(Database::from_pool(self.pool.clone()))).await;
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for TestDb {
    /// Terminates connections and drops the database; kept for debugging if the test panicked
    fn drop(&mut self) {
        if thread::panicking() {
            eprintln!(
                "TestDb leaking database '{}' due to panic - database preserved for debugging",
                self.name
            );
            return;
        }

        let mut conn = match PgConnection::establish(&self.default_db_url) {
            Ok(conn) => conn,
            Err(e) => {
                eprintln!("Failed to connect for cleanup of '{}': {}", self.name, e);
                return;
            }
        };

        let terminate_result = sql_query(format!(
            "SELECT pg_terminate_backend(pid) FROM pg_stat_activity WHERE datname = '{}'",
            self.name
        ))
        .execute(&mut conn);

        if let Err(e) = terminate_result {
            eprintln!("Failed to terminate connections for '{}': {}", self.name, e);
        }

        match sql_query(format!("DROP DATABASE IF EXISTS {}", self.name)).execute(&mut conn) {
            Ok(_) => log::debug!("Cleaned up test database: {}", self.name),
            Err(e) => eprintln!("Failed to drop test database '{}': {}", self.name, e),
        }
    }
}
