//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories
//! - Configuration
//! - Connection management

pub mod config;
pub mod database;
pub mod server_repository;

pub use config::AppConfig;
pub use server_repository::PostgresServerRepository;
