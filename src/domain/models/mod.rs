//! Domain Models
//!
//! Pure domain entities and value objects.

pub mod server_config;

pub use server_config::{ServerConfig, ServerConfigData, ServerId};
