//! List Servers Use Case
//!
//! Retrieves every registered server configuration.

use std::sync::Arc;

use crate::domain::gateways::ServerRepository;
use crate::domain::models::server_config::ServerConfig;
use crate::shared::errors::UseCaseError;

/// Use case for listing all server configurations
pub struct ListServersUseCase {
    server_repository: Arc<dyn ServerRepository>,
}

impl ListServersUseCase {
    /// Create a new ListServersUseCase
    #[must_use]
    pub fn new(server_repository: Arc<dyn ServerRepository>) -> Self {
        Self { server_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<ServerConfig>, UseCaseError> {
        tracing::debug!("Listing server configurations");

        let servers = self.server_repository.find_all().await?;

        tracing::debug!(count = servers.len(), "Server configurations listed");
        Ok(servers)
    }
}
