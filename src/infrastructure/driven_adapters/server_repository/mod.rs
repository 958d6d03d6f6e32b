//! Server Repository Adapters

pub mod postgres;

pub use postgres::PostgresServerRepository;
