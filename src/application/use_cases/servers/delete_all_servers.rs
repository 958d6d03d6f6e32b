//! Delete All Servers Use Case

use std::sync::Arc;

use crate::domain::gateways::ServerRepository;
use crate::shared::errors::UseCaseError;

/// Use case for removing every server configuration
pub struct DeleteAllServersUseCase {
    server_repository: Arc<dyn ServerRepository>,
}

impl DeleteAllServersUseCase {
    /// Create a new DeleteAllServersUseCase
    #[must_use]
    pub fn new(server_repository: Arc<dyn ServerRepository>) -> Self {
        Self { server_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<(), UseCaseError> {
        tracing::warn!("Deleting all server configurations");

        self.server_repository.delete_all().await?;

        tracing::info!("All server configurations deleted");
        Ok(())
    }
}
