// src/db.rs

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Builds the PostgreSQL connection pool.
///
/// The pool is capped at ten connections, the limit the service has always
/// run with. `connect` establishes an initial connection eagerly, so a bad
/// `DATABASE_URL` fails here rather than on the first request.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
  PgPoolOptions::new()
    .max_connections(10)
    .connect(database_url)
    .await
}

/// Applies the embedded migrations in `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
  sqlx::migrate!("./migrations").run(pool).await
}
