//! Connection provisioning and schema bootstrap for the `hero` and `team` tables.
//! The backend (SQLite or PostgreSQL) is chosen from the scheme of `DATABASE_URL`.

use crate::error::{ConfigError, StoreError};
use sqlx::any::AnyPoolOptions;
use sqlx::{AnyPool, ConnectOptions};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
    Postgres,
}

impl Backend {
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        if url.starts_with("sqlite:") {
            Ok(Backend::Sqlite)
        } else if url.starts_with("postgres:") || url.starts_with("postgresql:") {
            Ok(Backend::Postgres)
        } else {
            Err(ConfigError::UnsupportedDatabase(url.to_string()))
        }
    }

    fn id_column(self) -> &'static str {
        match self {
            Backend::Sqlite => "\"id\" INTEGER PRIMARY KEY AUTOINCREMENT",
            Backend::Postgres => "\"id\" BIGSERIAL PRIMARY KEY",
        }
    }

    fn int_type(self) -> &'static str {
        match self {
            Backend::Sqlite => "INTEGER",
            Backend::Postgres => "BIGINT",
        }
    }

    /// DDL for both tables and their indexes, safe to run against an initialized store.
    pub fn schema_statements(self) -> Vec<String> {
        vec![
            format!(
                r#"
                CREATE TABLE IF NOT EXISTS "team" (
                    {},
                    "name" TEXT NOT NULL,
                    "headquarters" TEXT NOT NULL
                )
                "#,
                self.id_column()
            ),
            format!(
                r#"
                CREATE TABLE IF NOT EXISTS "hero" (
                    {},
                    "name" TEXT NOT NULL,
                    "secret_name" TEXT NOT NULL,
                    "age" {int},
                    "team_id" {int} REFERENCES "team" ("id") ON DELETE SET NULL
                )
                "#,
                self.id_column(),
                int = self.int_type()
            ),
            r#"CREATE INDEX IF NOT EXISTS "ix_team_name" ON "team" ("name")"#.to_string(),
            r#"CREATE INDEX IF NOT EXISTS "ix_hero_name" ON "hero" ("name")"#.to_string(),
            r#"CREATE INDEX IF NOT EXISTS "ix_hero_age" ON "hero" ("age")"#.to_string(),
        ]
    }
}

/// Open a pool against `database_url`. SQLite connections enforce foreign keys by default.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<AnyPool, StoreError> {
    sqlx::any::install_default_drivers();
    let pool = AnyPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Single-connection in-memory SQLite pool that never recycles its connection, so the
/// database lives as long as the pool.
pub async fn connect_in_memory() -> Result<AnyPool, StoreError> {
    sqlx::any::install_default_drivers();
    let pool = AnyPoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    Ok(pool)
}

/// Create the tables and indexes if missing. Run once before serving traffic.
pub async fn init_schema(pool: &AnyPool, backend: Backend) -> Result<(), StoreError> {
    for ddl in backend.schema_statements() {
        tracing::debug!(sql = %ddl.trim(), "schema");
        sqlx::query(&ddl).execute(pool).await?;
    }
    tracing::info!(?backend, "schema ready");
    Ok(())
}

/// Ensure the PostgreSQL database named in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. No-op for SQLite. Call before creating the pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), StoreError> {
    if Backend::from_url(database_url).ok() != Some(Backend::Postgres) {
        return Ok(());
    }
    let (admin_url, db_name) = parse_db_name_from_url(database_url);
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)?;
    let mut conn = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Split a PostgreSQL URL into (maintenance-database URL, database name). The query string
/// is kept on the maintenance URL and never searched for the path separator.
fn parse_db_name_from_url(url: &str) -> (String, String) {
    let (location, query) = match url.split_once('?') {
        Some((location, query)) => (location, Some(query)),
        None => (url, None),
    };
    let path_start = location.rfind('/').map(|i| i + 1).unwrap_or(location.len());
    let db_name = location.get(path_start..).unwrap_or("").trim();
    let base = location.get(..path_start).unwrap_or(location);
    let admin_url = match query {
        Some(q) => format!("{}postgres?{}", base, q),
        None => format!("{}postgres", base),
    };
    (admin_url, db_name.to_string())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
