//! Server Repository Gateway
//!
//! Abstract trait defining the contract for server configuration persistence.
//! Every method is self-contained: implementations must not rely on state
//! left behind by a previous call.

use async_trait::async_trait;

use crate::domain::models::server_config::ServerConfig;
use crate::shared::errors::RepositoryError;

/// Repository trait for `ServerConfig` persistence operations
#[async_trait]
pub trait ServerRepository: Send + Sync {
    /// List every server configuration, empty when none exist
    async fn find_all(&self) -> Result<Vec<ServerConfig>, RepositoryError>;

    /// Find the server configuration registered for a MAC address
    ///
    /// A missing row is reported as `RepositoryError::NotFound`.
    async fn find_by_mac(&self, mac_address: &str) -> Result<ServerConfig, RepositoryError>;

    /// Delete the server configuration for a MAC address (no-op if absent)
    async fn delete_by_mac(&self, mac_address: &str) -> Result<(), RepositoryError>;

    /// Persist a new server configuration, returning it with its store ID
    async fn create(&self, server: &ServerConfig) -> Result<ServerConfig, RepositoryError>;

    /// Overwrite gateway, hostname, ip and netmask of the row matching the
    /// server's MAC address (no-op if absent; the ID is ignored)
    async fn update_by_mac(&self, server: &ServerConfig) -> Result<(), RepositoryError>;

    /// Delete every server configuration
    async fn delete_all(&self) -> Result<(), RepositoryError>;
}
