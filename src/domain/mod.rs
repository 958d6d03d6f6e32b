//! Domain Layer
//!
//! Contains the server configuration model and the gateway trait (port) for
//! its persistence. This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::server_repository::ServerRepository;
pub use models::server_config::{ServerConfig, ServerConfigData, ServerId};
