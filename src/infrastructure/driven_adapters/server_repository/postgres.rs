//! PostgreSQL Server Repository Implementation
//!
//! Implements the ServerRepository trait using SQLx for PostgreSQL. Each call
//! opens a fresh connection, issues one statement and closes the connection
//! on every exit path.

use async_trait::async_trait;

use crate::domain::gateways::ServerRepository;
use crate::domain::models::server_config::{ServerConfig, ServerConfigData, ServerId};
use crate::infrastructure::driven_adapters::config::DatabaseConfig;
use crate::infrastructure::driven_adapters::database;
use crate::shared::errors::RepositoryError;

/// Database row representation for the server table
#[derive(Debug, sqlx::FromRow)]
struct ServerRow {
    id: i64,
    gateway: String,
    hostname: String,
    ip: String,
    netmask: String,
    mac_address: String,
}

impl From<ServerRow> for ServerConfig {
    fn from(row: ServerRow) -> Self {
        ServerConfig::restore(
            ServerId::new(row.id),
            ServerConfigData {
                gateway: row.gateway,
                hostname: row.hostname,
                ip: row.ip,
                netmask: row.netmask,
                mac_address: row.mac_address,
            },
        )
    }
}

/// PostgreSQL implementation of ServerRepository
///
/// Only the configuration is kept; connect options are rebuilt per call.
pub struct PostgresServerRepository {
    config: DatabaseConfig,
}

impl PostgresServerRepository {
    /// Create a repository holding the given connection parameters
    #[must_use]
    pub fn new(config: &DatabaseConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

#[async_trait]
impl ServerRepository for PostgresServerRepository {
    async fn find_all(&self) -> Result<Vec<ServerConfig>, RepositoryError> {
        let mut conn = database::establish(&self.config).await?;

        let result = sqlx::query_as::<_, ServerRow>(
            r#"
            SELECT id, gateway, hostname, ip, netmask, mac_address
            FROM server
            ORDER BY id
            "#,
        )
        .fetch_all(&mut conn)
        .await;
        database::release(conn).await;

        let rows = result?;
        tracing::debug!(count = rows.len(), "Fetched server configurations");

        Ok(rows.into_iter().map(ServerConfig::from).collect())
    }

    async fn find_by_mac(&self, mac_address: &str) -> Result<ServerConfig, RepositoryError> {
        let mut conn = database::establish(&self.config).await?;

        let result = sqlx::query_as::<_, ServerRow>(
            r#"
            SELECT id, gateway, hostname, ip, netmask, mac_address
            FROM server
            WHERE mac_address = $1
            "#,
        )
        .bind(mac_address)
        .fetch_optional(&mut conn)
        .await;
        database::release(conn).await;

        result?
            .map(ServerConfig::from)
            .ok_or_else(|| RepositoryError::NotFound(format!("server with mac_address {mac_address}")))
    }

    async fn delete_by_mac(&self, mac_address: &str) -> Result<(), RepositoryError> {
        let mut conn = database::establish(&self.config).await?;

        let result = sqlx::query("DELETE FROM server WHERE mac_address = $1")
            .bind(mac_address)
            .execute(&mut conn)
            .await;
        database::release(conn).await;

        // Zero rows affected is not an error
        let done = result?;
        tracing::debug!(mac_address, rows = done.rows_affected(), "Deleted server configuration");

        Ok(())
    }

    async fn create(&self, server: &ServerConfig) -> Result<ServerConfig, RepositoryError> {
        let mut conn = database::establish(&self.config).await?;

        let result = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO server (gateway, hostname, ip, netmask, mac_address, created_on)
            VALUES ($1, $2, $3, $4, $5, CURRENT_TIMESTAMP)
            RETURNING id
            "#,
        )
        .bind(server.gateway())
        .bind(server.hostname())
        .bind(server.ip())
        .bind(server.netmask())
        .bind(server.mac_address())
        .fetch_one(&mut conn)
        .await;
        database::release(conn).await;

        let id = ServerId::new(result?);
        tracing::debug!(server_id = %id, mac_address = server.mac_address(), "Inserted server configuration");

        Ok(server.clone().with_id(id))
    }

    async fn update_by_mac(&self, server: &ServerConfig) -> Result<(), RepositoryError> {
        let mut conn = database::establish(&self.config).await?;

        let result = sqlx::query(
            r#"
            UPDATE server
            SET gateway = $1,
                hostname = $2,
                ip = $3,
                netmask = $4
            WHERE mac_address = $5
            "#,
        )
        .bind(server.gateway())
        .bind(server.hostname())
        .bind(server.ip())
        .bind(server.netmask())
        .bind(server.mac_address())
        .execute(&mut conn)
        .await;
        database::release(conn).await;

        // Zero rows affected is not an error
        let done = result?;
        tracing::debug!(
            mac_address = server.mac_address(),
            rows = done.rows_affected(),
            "Updated server configuration"
        );

        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        let mut conn = database::establish(&self.config).await?;

        let result = sqlx::query("DELETE FROM server").execute(&mut conn).await;
        database::release(conn).await;

        let done = result?;
        tracing::debug!(rows = done.rows_affected(), "Deleted all server configurations");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::driven_adapters::config::{DatabasePassword, SslMode};

    fn unreachable_repository() -> PostgresServerRepository {
        PostgresServerRepository::new(&DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            username: "postgres".to_string(),
            password: DatabasePassword::new("postgres"),
            database_name: "pxeboot".to_string(),
            ssl_mode: SslMode::Disable,
            run_migrations: false,
        })
    }

    fn create_test_server() -> ServerConfig {
        ServerConfig::new(ServerConfigData {
            gateway: "10.0.0.1".to_string(),
            hostname: "node1".to_string(),
            ip: "10.0.0.5".to_string(),
            netmask: "255.255.255.0".to_string(),
            mac_address: "AA:BB:CC:DD:EE:FF".to_string(),
        })
    }

    #[test]
    fn test_row_maps_to_server_config() {
        let row = ServerRow {
            id: 3,
            gateway: "10.0.0.1".to_string(),
            hostname: "node1".to_string(),
            ip: "10.0.0.5".to_string(),
            netmask: "255.255.255.0".to_string(),
            mac_address: "AA:BB:CC:DD:EE:FF".to_string(),
        };

        let server = ServerConfig::from(row);

        assert_eq!(server, create_test_server().with_id(ServerId::new(3)));
    }

    #[tokio::test]
    async fn should_fail_every_operation_with_connection_error_when_unreachable() {
        let repo = unreachable_repository();
        let server = create_test_server();

        assert!(repo.find_all().await.unwrap_err().is_connection());
        assert!(repo.find_by_mac("AA:BB:CC:DD:EE:FF").await.unwrap_err().is_connection());
        assert!(repo.delete_by_mac("AA:BB:CC:DD:EE:FF").await.unwrap_err().is_connection());
        assert!(repo.create(&server).await.unwrap_err().is_connection());
        assert!(repo.update_by_mac(&server).await.unwrap_err().is_connection());
        assert!(repo.delete_all().await.unwrap_err().is_connection());
    }
}
