//! Test database harness: one isolated database per test, created against
//! a `DATABASE_URL` PostgreSQL instance and dropped on cleanup.

use sqlx::PgPool;
use uuid::Uuid;

/// Connection to the PostgreSQL instance tests create scratch databases in.
pub struct PgTestInstance {
    pub base_url: String,
}

/// An isolated database for a single test, dropped when `cleanup` runs.
pub struct TestDatabase {
    pool: PgPool,
    db_name: String,
    base_url: String,
    url: String,
}

impl TestDatabase {
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Connection string for this database, for spawning the `pgdiff` binary
    /// against it in CLI tests.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Execute arbitrary DDL/DML - test setup convenience.
    pub async fn execute(&self, sql: &str) {
        use sqlx::Executor;
        self.pool
            .execute(sql)
            .await
            .unwrap_or_else(|e| panic!("failed to execute SQL: {sql}\nerror: {e}"));
    }

    pub async fn cleanup(self) {
        self.pool.close().await;

        let db_name = self.db_name.clone();
        let base_url = self.base_url.clone();
        let cleanup = async move {
            if let Ok(pool) = PgPool::connect(&base_url).await {
                let drop_sql = format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)");
                let _ = sqlx::query(&drop_sql).execute(&pool).await;
                pool.close().await;
            }
        };
        let _ = tokio::time::timeout(std::time::Duration::from_secs(5), cleanup).await;
    }
}

impl PgTestInstance {
    pub async fn new() -> Self {
        dotenv::dotenv().ok();

        let base_url = std::env::var("DATABASE_URL")
            .expect("DATABASE_URL is required to run pgdiff's catalog integration tests");

        let test_pool = PgPool::connect(&base_url)
            .await
            .expect("failed to connect to DATABASE_URL for catalog integration tests");
        test_pool.close().await;

        Self { base_url }
    }

    pub async fn create_test_database(&self) -> TestDatabase {
        let db_name = format!("pgdiff_test_{}", Uuid::new_v4().simple());

        let base_pool = PgPool::connect(&self.base_url)
            .await
            .expect("failed to connect to PostgreSQL for test database creation");
        sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
            .execute(&base_pool)
            .await
            .expect("failed to create test database");
        base_pool.close().await;

        let db_url = match self.base_url.rfind('/') {
            Some(last_slash) => format!("{}/{db_name}", &self.base_url[..last_slash]),
            None => format!("{}/{db_name}", self.base_url),
        };

        let pool = PgPool::connect(&db_url)
            .await
            .expect("failed to connect to newly created test database");

        TestDatabase {
            pool,
            db_name,
            base_url: self.base_url.clone(),
            url: db_url,
        }
    }
}

/// Runs `test_fn` against a freshly created, isolated database, dropping it
/// afterward regardless of test outcome (best effort).
pub async fn with_test_db<F, R>(test_fn: F) -> R
where
    F: std::ops::AsyncFnOnce(&TestDatabase) -> R,
{
    let pg = PgTestInstance::new().await;
    let db = pg.create_test_database().await;
    let result = test_fn(&db).await;
    db.cleanup().await;
    result
}
