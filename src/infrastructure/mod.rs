//! Infrastructure Layer
//!
//! Contains all external concerns: driving adapters (HTTP handlers) and
//! driven adapters (repository, configuration, connection management).

pub mod driven_adapters;
pub mod driving_adapters;
