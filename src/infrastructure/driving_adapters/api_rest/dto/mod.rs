//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod server;

pub use server::{CreateServerDto, ServerResponseDto, UpdateServerDto};
