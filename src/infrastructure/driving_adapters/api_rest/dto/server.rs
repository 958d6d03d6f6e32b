//! Server DTOs
//!
//! Data transfer objects for server configuration endpoints. Fields are only
//! checked for presence and length; address syntax is left to the caller.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::server_config::{ServerConfig, ServerConfigData};

/// DTO for registering a new server
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateServerDto {
    #[validate(length(min = 1, max = 64, message = "gateway must be between 1 and 64 characters"))]
    pub gateway: String,

    #[validate(length(min = 1, max = 253, message = "hostname must be between 1 and 253 characters"))]
    pub hostname: String,

    #[validate(length(min = 1, max = 64, message = "ip must be between 1 and 64 characters"))]
    pub ip: String,

    #[validate(length(min = 1, max = 64, message = "netmask must be between 1 and 64 characters"))]
    pub netmask: String,

    #[validate(length(min = 1, max = 64, message = "mac_address must be between 1 and 64 characters"))]
    pub mac_address: String,
}

impl From<CreateServerDto> for ServerConfigData {
    fn from(dto: CreateServerDto) -> Self {
        Self {
            gateway: dto.gateway,
            hostname: dto.hostname,
            ip: dto.ip,
            netmask: dto.netmask,
            mac_address: dto.mac_address,
        }
    }
}

/// DTO for updating a server (PUT); the MAC address comes from the path
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateServerDto {
    #[validate(length(min = 1, max = 64, message = "gateway must be between 1 and 64 characters"))]
    pub gateway: String,

    #[validate(length(min = 1, max = 253, message = "hostname must be between 1 and 253 characters"))]
    pub hostname: String,

    #[validate(length(min = 1, max = 64, message = "ip must be between 1 and 64 characters"))]
    pub ip: String,

    #[validate(length(min = 1, max = 64, message = "netmask must be between 1 and 64 characters"))]
    pub netmask: String,

    /// Optional echo of the path MAC address; must match it when present
    #[serde(default)]
    pub mac_address: Option<String>,
}

impl UpdateServerDto {
    /// Whether the body names a different MAC address than the path
    #[must_use]
    pub fn conflicts_with(&self, mac_address: &str) -> bool {
        self.mac_address.as_deref().is_some_and(|body_mac| body_mac != mac_address)
    }

    /// Convert into domain data targeting the given MAC address
    #[must_use]
    pub fn into_data(self, mac_address: String) -> ServerConfigData {
        ServerConfigData {
            gateway: self.gateway,
            hostname: self.hostname,
            ip: self.ip,
            netmask: self.netmask,
            mac_address,
        }
    }
}

/// Server response DTO
#[derive(Debug, Clone, Serialize)]
pub struct ServerResponseDto {
    pub id: i64,
    pub gateway: String,
    pub hostname: String,
    pub ip: String,
    pub netmask: String,
    pub mac_address: String,
}

impl From<ServerConfig> for ServerResponseDto {
    fn from(server: ServerConfig) -> Self {
        Self {
            id: server.id().value(),
            gateway: server.gateway().to_string(),
            hostname: server.hostname().to_string(),
            ip: server.ip().to_string(),
            netmask: server.netmask().to_string(),
            mac_address: server.mac_address().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::server_config::ServerId;

    fn create_dto() -> CreateServerDto {
        CreateServerDto {
            gateway: "10.0.0.1".to_string(),
            hostname: "node1".to_string(),
            ip: "10.0.0.5".to_string(),
            netmask: "255.255.255.0".to_string(),
            mac_address: "AA:BB:CC:DD:EE:FF".to_string(),
        }
    }

    #[test]
    fn test_create_dto_validation() {
        assert!(create_dto().validate().is_ok());

        let empty_mac = CreateServerDto {
            mac_address: String::new(),
            ..create_dto()
        };
        let errors = empty_mac.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("mac_address"));

        let long_hostname = CreateServerDto {
            hostname: "h".repeat(254),
            ..create_dto()
        };
        assert!(long_hostname.validate().is_err());
    }

    #[test]
    fn test_create_dto_does_not_check_address_syntax() {
        let odd_values = CreateServerDto {
            ip: "not-an-ip".to_string(),
            mac_address: "whatever".to_string(),
            ..create_dto()
        };
        assert!(odd_values.validate().is_ok());
    }

    #[test]
    fn test_update_dto_mac_handling() {
        let dto: UpdateServerDto = serde_json::from_str(
            r#"{"gateway":"10.0.0.2","hostname":"node1","ip":"10.0.0.5","netmask":"255.255.255.0"}"#,
        )
        .unwrap();
        assert!(!dto.conflicts_with("AA:BB:CC:DD:EE:FF"));

        let data = dto.into_data("AA:BB:CC:DD:EE:FF".to_string());
        assert_eq!(data.gateway, "10.0.0.2");
        assert_eq!(data.mac_address, "AA:BB:CC:DD:EE:FF");

        let dto: UpdateServerDto = serde_json::from_str(
            r#"{"gateway":"10.0.0.2","hostname":"node1","ip":"10.0.0.5","netmask":"255.255.255.0","mac_address":"11:22:33:44:55:66"}"#,
        )
        .unwrap();
        assert!(dto.conflicts_with("AA:BB:CC:DD:EE:FF"));
    }

    #[test]
    fn test_response_dto_from_server() {
        let server = ServerConfig::restore(ServerId::new(9), create_dto().into());
        let dto = ServerResponseDto::from(server);

        assert_eq!(dto.id, 9);
        assert_eq!(dto.mac_address, "AA:BB:CC:DD:EE:FF");

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["netmask"], "255.255.255.0");
    }
}
