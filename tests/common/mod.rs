//! Common test utilities for integration and e2e tests
//!
//! Provides test infrastructure for spinning up a PostgreSQL container,
//! applying migrations, and building the repository and router under test.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use serde::{Deserialize, Serialize};
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;

use pxeboot_registry::domain::models::server_config::{ServerConfig, ServerConfigData};
use pxeboot_registry::infrastructure::driven_adapters::config::{DatabaseConfig, DatabasePassword, SslMode};
use pxeboot_registry::infrastructure::driven_adapters::database;
use pxeboot_registry::infrastructure::driven_adapters::server_repository::PostgresServerRepository;
use pxeboot_registry::infrastructure::driving_adapters::api_rest::{build_router, AppState};

/// A migrated PostgreSQL database running in a container
pub struct TestDatabase {
    pub config: DatabaseConfig,
    _container: ContainerAsync<Postgres>,
}

impl TestDatabase {
    /// Start a fresh PostgreSQL container and apply migrations
    pub async fn new() -> Self {
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let config = DatabaseConfig {
            host: host.to_string(),
            port,
            username: "postgres".to_string(),
            password: DatabasePassword::new("postgres"),
            database_name: "postgres".to_string(),
            ssl_mode: SslMode::Disable,
            run_migrations: true,
        };

        database::run_migrations(&config)
            .await
            .expect("Failed to run migrations");

        Self {
            config,
            _container: container,
        }
    }

    /// Repository holding this database's connection parameters
    pub fn repository(&self) -> PostgresServerRepository {
        PostgresServerRepository::new(&self.config)
    }
}

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub database: TestDatabase,
}

impl TestApp {
    /// Create a new test application backed by a fresh database
    pub async fn new() -> Self {
        let database = TestDatabase::new().await;
        let router = build_router(AppState::new(Arc::new(database.repository())));

        Self { router, database }
    }
}

/// Server configuration fixture
pub fn server(mac_address: &str) -> ServerConfig {
    ServerConfig::new(ServerConfigData {
        gateway: "10.0.0.1".to_string(),
        hostname: "node1".to_string(),
        ip: "10.0.0.5".to_string(),
        netmask: "255.255.255.0".to_string(),
        mac_address: mac_address.to_string(),
    })
}

/// Helper struct for create request bodies
#[derive(Debug, Serialize)]
pub struct CreateServerRequest {
    pub gateway: String,
    pub hostname: String,
    pub ip: String,
    pub netmask: String,
    pub mac_address: String,
}

impl Default for CreateServerRequest {
    fn default() -> Self {
        Self {
            gateway: "10.0.0.1".to_string(),
            hostname: "node1".to_string(),
            ip: "10.0.0.5".to_string(),
            netmask: "255.255.255.0".to_string(),
            mac_address: "AA:BB:CC:DD:EE:FF".to_string(),
        }
    }
}

impl CreateServerRequest {
    pub fn with_mac(mut self, mac_address: &str) -> Self {
        self.mac_address = mac_address.to_string();
        self
    }
}

/// Helper struct for update request bodies
#[derive(Debug, Serialize)]
pub struct UpdateServerRequest {
    pub gateway: String,
    pub hostname: String,
    pub ip: String,
    pub netmask: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
}

impl Default for UpdateServerRequest {
    fn default() -> Self {
        Self {
            gateway: "10.0.0.2".to_string(),
            hostname: "node1".to_string(),
            ip: "10.0.0.5".to_string(),
            netmask: "255.255.255.0".to_string(),
            mac_address: None,
        }
    }
}

/// Server response structure for deserialization
#[derive(Debug, Deserialize)]
pub struct ServerResponse {
    pub id: i64,
    pub gateway: String,
    pub hostname: String,
    pub ip: String,
    pub netmask: String,
    pub mac_address: String,
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub request_id: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<Vec<FieldError>>,
}

#[derive(Debug, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
