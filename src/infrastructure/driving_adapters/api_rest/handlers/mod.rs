//! HTTP Handlers

pub mod servers;
