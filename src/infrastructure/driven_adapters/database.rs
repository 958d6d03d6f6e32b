//! Database Connection Management
//!
//! Every repository call opens its own connection, checks it with a ping and
//! closes it again before returning. Nothing here is pooled or cached.

use anyhow::Context;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;

use super::config::DatabaseConfig;
use crate::shared::errors::RepositoryError;

/// Build PostgreSQL connect options from configuration
///
/// The options hold a plain copy of the password. Callers build them right
/// before connecting and drop them afterwards, so the only long-lived copy
/// is the zeroizing one inside [`DatabaseConfig`].
#[must_use]
pub fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.username)
        .password(config.password.expose())
        .database(&config.database_name)
        .ssl_mode(config.ssl_mode.into())
}

/// Open a connection and verify it with a round-trip ping
///
/// # Errors
///
/// Returns `RepositoryError::Connection` if the connection cannot be
/// established or does not answer the ping. A connection that fails the ping
/// is closed before returning.
pub async fn establish(config: &DatabaseConfig) -> Result<PgConnection, RepositoryError> {
    let options = connect_options(config);
    let mut conn = PgConnection::connect_with(&options)
        .await
        .map_err(RepositoryError::Connection)?;
    drop(options);

    if let Err(err) = conn.ping().await {
        tracing::warn!(error = %err, "Database connection failed liveness check");
        release(conn).await;
        return Err(RepositoryError::Connection(err));
    }

    Ok(conn)
}

/// Close a connection, logging rather than propagating close failures
pub async fn release(conn: PgConnection) {
    if let Err(err) = conn.close().await {
        tracing::warn!(error = %err, "Failed to close database connection cleanly");
    }
}

/// Apply the bundled migrations over a single short-lived connection
///
/// # Errors
///
/// Returns an error if the connection cannot be established or a migration
/// fails.
pub async fn run_migrations(config: &DatabaseConfig) -> anyhow::Result<()> {
    let mut conn = establish(config)
        .await
        .context("failed to connect for migrations")?;

    let result = sqlx::migrate!("./migrations").run(&mut conn).await;
    release(conn).await;

    result.context("failed to apply migrations")
}
