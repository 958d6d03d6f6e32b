//! Update Server Use Case
//!
//! Overwrites gateway, hostname, ip and netmask of the server matching a MAC
//! address. Updating an unknown MAC address succeeds and changes nothing.

use std::sync::Arc;

use crate::domain::gateways::ServerRepository;
use crate::domain::models::server_config::{ServerConfig, ServerConfigData};
use crate::shared::errors::UseCaseError;

/// Use case for updating a server configuration in place
pub struct UpdateServerUseCase {
    server_repository: Arc<dyn ServerRepository>,
}

impl UpdateServerUseCase {
    /// Create a new UpdateServerUseCase
    #[must_use]
    pub fn new(server_repository: Arc<dyn ServerRepository>) -> Self {
        Self { server_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: ServerConfigData) -> Result<(), UseCaseError> {
        tracing::info!(mac_address = %data.mac_address, "Updating server");

        let server = ServerConfig::new(data);
        self.server_repository.update_by_mac(&server).await?;

        tracing::info!(mac_address = server.mac_address(), "Server updated");
        Ok(())
    }
}
