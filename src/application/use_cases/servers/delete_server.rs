//! Delete Server Use Case
//!
//! Removes the server configuration for a MAC address. Deleting an unknown
//! MAC address succeeds.

use std::sync::Arc;

use crate::domain::gateways::ServerRepository;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a server configuration
pub struct DeleteServerUseCase {
    server_repository: Arc<dyn ServerRepository>,
}

impl DeleteServerUseCase {
    /// Create a new DeleteServerUseCase
    #[must_use]
    pub fn new(server_repository: Arc<dyn ServerRepository>) -> Self {
        Self { server_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, mac_address: &str) -> Result<(), UseCaseError> {
        tracing::info!(mac_address, "Deleting server");

        self.server_repository.delete_by_mac(mac_address).await?;

        tracing::info!(mac_address, "Server deleted");
        Ok(())
    }
}
