//! PXE Boot Server Registry
//!
//! Stores the static network configuration (gateway, hostname, IP, netmask
//! and MAC address) assigned to hosts before they boot over the network,
//! following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
