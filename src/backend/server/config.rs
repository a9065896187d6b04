/**
 * Server Configuration
 *
 * Environment-driven settings, read once at startup, plus the database
 * connection step.
 *
 * # Configuration Sources
 *
 * | Variable       | Required | Default                 |
 * |----------------|----------|-------------------------|
 * | `JWT_SECRET`   | yes      |                         |
 * | `DATABASE_URL` | unless `STORAGE=memory` |          |
 * | `FRONTEND_URL` | no       | `http://localhost:3000` |
 * | `PORT`         | no       | `5000`                  |
 * | `STORAGE`      | no       | `postgres`              |
 * | `BCRYPT_COST`  | no       | `bcrypt::DEFAULT_COST`  |
 *
 * # Error Handling
 *
 * Missing or malformed settings are a `ConfigError` and stop startup. A
 * database that cannot be reached is not: the server starts with a lazily
 * connecting pool, `/api/health` reports the database as disconnected, and
 * migrations run once the pool first connects.
 */

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use sqlx::migrate::MigrateError;
use sqlx::postgres::{PgPool, PgPoolOptions};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Where users and posts live
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres { database_url: String },
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub storage: StorageBackend,
    pub jwt_secret: String,
    pub frontend_url: String,
    pub port: u16,
    pub bcrypt_cost: u32,
}

impl ServerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let storage = match get("STORAGE").as_deref().map(str::to_ascii_lowercase).as_deref() {
            None | Some("postgres") => StorageBackend::Postgres {
                database_url: get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            },
            Some("memory") => StorageBackend::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "STORAGE",
                    value: other.to_string(),
                })
            }
        };

        let port = match get("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw,
            })?,
        };

        let bcrypt_cost = match get("BCRYPT_COST") {
            None => bcrypt::DEFAULT_COST,
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|cost| (4..=31).contains(cost))
                .ok_or(ConfigError::Invalid {
                    name: "BCRYPT_COST",
                    value: raw,
                })?,
        };

        Ok(Self {
            storage,
            jwt_secret,
            frontend_url: get("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string()),
            port,
            bcrypt_cost,
        })
    }
}

/// Pause between connection attempts while the database is unreachable
pub const RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// Connect to PostgreSQL and run migrations
///
/// If the first connection fails the error is logged and a lazy pool is
/// returned instead. A background task keeps trying that pool and runs the
/// migrations as soon as it connects, so a database that comes up after the
/// server still gets its schema.
///
/// # Errors
///
/// Only a `DATABASE_URL` that cannot be parsed at all is fatal.
pub async fn load_database(database_url: &str) -> Result<PgPool, ConfigError> {
    let options = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5));

    tracing::info!("Connecting to database...");

    match options.clone().connect(database_url).await {
        Ok(pool) => {
            tracing::info!("Database connection pool created successfully");
            // Failures are logged; the server still starts.
            let _ = run_migrations(&pool).await;
            Ok(pool)
        }
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            tracing::warn!("Starting in degraded mode; database calls will fail until it is reachable");

            let pool = options
                .connect_lazy(database_url)
                .map_err(|_| ConfigError::Invalid {
                    name: "DATABASE_URL",
                    value: "<redacted>".to_string(),
                })?;
            tokio::spawn(migrate_when_reachable(pool.clone(), RECONNECT_DELAY));
            Ok(pool)
        }
    }
}

/// Apply pending migrations and log the outcome
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    tracing::info!("Running database migrations...");
    let result = sqlx::migrate!().run(pool).await;
    match &result {
        Ok(()) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - schema might not be up to date");
        }
    }
    result
}

/// Wait until `pool` can hand out a connection, then migrate
pub async fn migrate_when_reachable(pool: PgPool, delay: Duration) {
    retry_until_ok(
        "database connection",
        || {
            let pool = pool.clone();
            async move { pool.acquire().await.map(drop) }
        },
        delay,
    )
    .await;

    tracing::info!("Database is reachable");
    let _ = run_migrations(&pool).await;
}

/// Call `attempt` every `delay` until it succeeds
async fn retry_until_ok<F, Fut, T, E>(what: &str, mut attempt: F, delay: Duration) -> T
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    loop {
        match attempt().await {
            Ok(value) => return value,
            Err(e) => {
                tracing::debug!("{} not ready, retrying in {:?}: {}", what, delay, e);
                tokio::time::sleep(delay).await;
            }
        }
    }
}
