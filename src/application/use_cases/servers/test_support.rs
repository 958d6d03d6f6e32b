//! In-memory repository double shared by the server use case tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::gateways::ServerRepository;
use crate::domain::models::server_config::{ServerConfig, ServerConfigData, ServerId};
use crate::shared::errors::RepositoryError;

pub struct MockServerRepository {
    servers: Mutex<Vec<ServerConfig>>,
    next_id: Mutex<i64>,
    failure: Mutex<Option<RepositoryError>>,
}

impl MockServerRepository {
    pub fn new() -> Self {
        Self {
            servers: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
            failure: Mutex::new(None),
        }
    }

    pub fn with_servers(self, servers: Vec<ServerConfig>) -> Self {
        *self.servers.lock().unwrap() = servers;
        self
    }

    /// Make the next call fail with the given error
    pub fn with_failure(self, error: RepositoryError) -> Self {
        *self.failure.lock().unwrap() = Some(error);
        self
    }

    pub fn stored(&self) -> Vec<ServerConfig> {
        self.servers.lock().unwrap().clone()
    }

    fn take_failure(&self) -> Result<(), RepositoryError> {
        match self.failure.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ServerRepository for MockServerRepository {
    async fn find_all(&self) -> Result<Vec<ServerConfig>, RepositoryError> {
        self.take_failure()?;
        Ok(self.stored())
    }

    async fn find_by_mac(&self, mac_address: &str) -> Result<ServerConfig, RepositoryError> {
        self.take_failure()?;
        self.servers
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.mac_address() == mac_address)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(mac_address.to_string()))
    }

    async fn delete_by_mac(&self, mac_address: &str) -> Result<(), RepositoryError> {
        self.take_failure()?;
        self.servers.lock().unwrap().retain(|s| s.mac_address() != mac_address);
        Ok(())
    }

    async fn create(&self, server: &ServerConfig) -> Result<ServerConfig, RepositoryError> {
        self.take_failure()?;
        let mut next_id = self.next_id.lock().unwrap();
        let created = server.clone().with_id(ServerId::new(*next_id));
        *next_id += 1;
        self.servers.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_by_mac(&self, server: &ServerConfig) -> Result<(), RepositoryError> {
        self.take_failure()?;
        let mut servers = self.servers.lock().unwrap();
        if let Some(existing) = servers.iter_mut().find(|s| s.mac_address() == server.mac_address()) {
            *existing = existing.clone().with_network(
                server.gateway().to_string(),
                server.hostname().to_string(),
                server.ip().to_string(),
                server.netmask().to_string(),
            );
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        self.take_failure()?;
        self.servers.lock().unwrap().clear();
        Ok(())
    }
}

pub fn create_test_data(mac_address: &str) -> ServerConfigData {
    ServerConfigData {
        gateway: "10.0.0.1".to_string(),
        hostname: "node1".to_string(),
        ip: "10.0.0.5".to_string(),
        netmask: "255.255.255.0".to_string(),
        mac_address: mac_address.to_string(),
    }
}

pub fn create_test_server(id: i64, mac_address: &str) -> ServerConfig {
    ServerConfig::restore(ServerId::new(id), create_test_data(mac_address))
}
