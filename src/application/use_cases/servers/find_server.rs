//! Find Server Use Case
//!
//! Retrieves the configuration a booting host presents its MAC address for.

use std::sync::Arc;

use crate::domain::gateways::ServerRepository;
use crate::domain::models::server_config::ServerConfig;
use crate::shared::errors::{RepositoryError, UseCaseError};

/// Use case for finding a server configuration by MAC address
pub struct FindServerUseCase {
    server_repository: Arc<dyn ServerRepository>,
}

impl FindServerUseCase {
    /// Create a new FindServerUseCase
    #[must_use]
    pub fn new(server_repository: Arc<dyn ServerRepository>) -> Self {
        Self { server_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if no server has this MAC address.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, mac_address: &str) -> Result<ServerConfig, UseCaseError> {
        tracing::debug!(mac_address, "Finding server by MAC address");

        let server = self
            .server_repository
            .find_by_mac(mac_address)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound(_) => {
                    tracing::warn!(mac_address, "Server not found");
                    UseCaseError::NotFound {
                        resource: "Server".to_string(),
                        key: mac_address.to_string(),
                    }
                }
                other => UseCaseError::Repository(other),
            })?;

        tracing::debug!(mac_address, server_id = %server.id(), "Server found");
        Ok(server)
    }
}
