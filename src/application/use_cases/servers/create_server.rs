//! Create Server Use Case
//!
//! Registers the network configuration for a new host.

use std::sync::Arc;

use crate::domain::gateways::ServerRepository;
use crate::domain::models::server_config::{ServerConfig, ServerConfigData};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new server configuration
pub struct CreateServerUseCase {
    server_repository: Arc<dyn ServerRepository>,
}

impl CreateServerUseCase {
    /// Create a new CreateServerUseCase
    #[must_use]
    pub fn new(server_repository: Arc<dyn ServerRepository>) -> Self {
        Self { server_repository }
    }

    /// Execute the use case
    ///
    /// Uniqueness of the MAC address is left to the store; a rejected insert
    /// is reported as a conflict.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Conflict` if a server with the same MAC address already exists.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: ServerConfigData) -> Result<ServerConfig, UseCaseError> {
        tracing::info!(mac_address = %data.mac_address, hostname = %data.hostname, "Creating server");

        let server = ServerConfig::new(data);
        let created = self.server_repository.create(&server).await.map_err(|err| {
            if err.is_unique_violation() {
                tracing::warn!(mac_address = server.mac_address(), "Server with MAC address already exists");
                UseCaseError::Conflict(format!(
                    "Server with mac_address {} already exists",
                    server.mac_address()
                ))
            } else {
                UseCaseError::Repository(err)
            }
        })?;

        tracing::info!(
            server_id = %created.id(),
            mac_address = created.mac_address(),
            "Server created successfully"
        );

        Ok(created)
    }
}
