//! Server Configuration Domain Model
//!
//! The static network parameters handed to a host before it boots over the
//! network. The MAC address is the natural key; the numeric ID is the store's
//! primary key and round-trips opaquely.

/// Newtype wrapper for the store-assigned server ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ServerId(i64);

impl ServerId {
    /// ID carried by records that have not been persisted yet
    pub const UNASSIGNED: Self = Self(0);

    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }

    /// Whether the store has assigned this ID
    #[must_use]
    pub fn is_assigned(self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for ServerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ServerId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Data required to describe a server, everything except the ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfigData {
    pub gateway: String,
    pub hostname: String,
    pub ip: String,
    pub netmask: String,
    pub mac_address: String,
}

/// Boot-time network configuration of a single host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    id: ServerId,
    gateway: String,
    hostname: String,
    ip: String,
    netmask: String,
    mac_address: String,
}

impl ServerConfig {
    /// Create a not-yet-persisted server configuration
    #[must_use]
    pub fn new(data: ServerConfigData) -> Self {
        Self::restore(ServerId::UNASSIGNED, data)
    }

    /// Restore a server configuration from persisted data
    #[must_use]
    pub fn restore(id: ServerId, data: ServerConfigData) -> Self {
        Self {
            id,
            gateway: data.gateway,
            hostname: data.hostname,
            ip: data.ip,
            netmask: data.netmask,
            mac_address: data.mac_address,
        }
    }

    /// Same configuration carrying the given store ID
    #[must_use]
    pub fn with_id(self, id: ServerId) -> Self {
        Self { id, ..self }
    }

    /// Replace the mutable fields, keeping ID and MAC address
    #[must_use]
    pub fn with_network(self, gateway: String, hostname: String, ip: String, netmask: String) -> Self {
        Self {
            gateway,
            hostname,
            ip,
            netmask,
            ..self
        }
    }

    /// Whether this record has been assigned an ID by the store
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.id.is_assigned()
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> ServerId {
        self.id
    }

    #[must_use]
    pub fn gateway(&self) -> &str {
        &self.gateway
    }

    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    #[must_use]
    pub fn ip(&self) -> &str {
        &self.ip
    }

    #[must_use]
    pub fn netmask(&self) -> &str {
        &self.netmask
    }

    #[must_use]
    pub fn mac_address(&self) -> &str {
        &self.mac_address
    }
}
