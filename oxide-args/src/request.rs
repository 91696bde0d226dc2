//! Connection request handed to the transport
//!
//! [`encode`] maps a frozen [`ClientConfig`] onto a [`ConnectionRequest`].
//! The on-wire encoding of the request belongs to the transport; the types
//! derive serde traits so it can pick one.

use crate::config::{
    BackoffStrategy, ClientConfig, NodeAddress, ProtocolVersion, ReadFrom, ServerCredentials,
    DEFAULT_HOST, DEFAULT_PORT,
};
use oxide_args_core::ArgsResult;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Transport security
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TlsMode {
    /// Plain TCP
    #[default]
    NoTls,
    /// TLS with certificate verification
    SecureTls,
}

/// Read preference as sent to the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReadFromMode {
    /// Primary only
    #[default]
    Primary,
    /// Replicas first
    PreferReplica,
    /// Replicas in the client's availability zone first
    AzAffinity,
    /// Replicas, then the primary, in the client's availability zone first
    AzAffinityReplicasAndPrimary,
}

impl From<ReadFrom> for ReadFromMode {
    fn from(read_from: ReadFrom) -> Self {
        match read_from {
            ReadFrom::Primary => Self::Primary,
            ReadFrom::PreferReplica => Self::PreferReplica,
            ReadFrom::AzAffinity => Self::AzAffinity,
            ReadFrom::AzAffinityReplicasAndPrimary => Self::AzAffinityReplicasAndPrimary,
        }
    }
}

/// Authentication sub-message
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthenticationInfo {
    /// ACL user; empty selects the `default` user
    pub username: String,
    /// Password
    pub password: String,
}

impl std::fmt::Debug for AuthenticationInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticationInfo")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl From<&ServerCredentials> for AuthenticationInfo {
    fn from(credentials: &ServerCredentials) -> Self {
        Self {
            username: credentials.username().unwrap_or_default().to_string(),
            password: credentials.password().to_string(),
        }
    }
}

/// Reconnect backoff sub-message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConnectionRetryStrategy {
    /// Number of retries
    pub number_of_retries: u32,
    /// Delay multiplier
    pub factor: u32,
    /// Exponent base
    pub exponent_base: u32,
}

impl From<BackoffStrategy> for ConnectionRetryStrategy {
    fn from(strategy: BackoffStrategy) -> Self {
        Self {
            number_of_retries: strategy.number_of_retries,
            factor: strategy.factor,
            exponent_base: strategy.exponent_base,
        }
    }
}

/// A single `(host, port)` entry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AddressInfo {
    /// Host name or IP
    pub host: String,
    /// Port
    pub port: u32,
}

impl From<&NodeAddress> for AddressInfo {
    /// Host and port fall back to their defaults independently of each other
    fn from(address: &NodeAddress) -> Self {
        let host = if address.host.is_empty() {
            DEFAULT_HOST.to_string()
        } else {
            address.host.clone()
        };
        let port = if address.port == 0 {
            DEFAULT_PORT
        } else {
            address.port
        };
        Self {
            host,
            port: u32::from(port),
        }
    }
}

/// Everything the transport needs to establish and authenticate a session
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConnectionRequest {
    /// Seed addresses, in the order supplied
    pub addresses: Vec<AddressInfo>,
    /// Transport security
    pub tls_mode: TlsMode,
    /// Whether the client talks to a cluster
    pub cluster_mode_enabled: bool,
    /// Read preference
    pub read_from: ReadFromMode,
    /// Availability zone; only present for the AZ affinity strategies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_az: Option<String>,
    /// Credentials; absent when none were configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_info: Option<AuthenticationInfo>,
    /// Request timeout in milliseconds; 0 leaves the transport default
    pub request_timeout: u32,
    /// Connection timeout in milliseconds; 0 leaves the transport default
    pub connection_timeout: u32,
    /// Client name; empty when unset
    pub client_name: String,
    /// Reconnect backoff; absent when none was configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_retry_strategy: Option<ConnectionRetryStrategy>,
    /// Logical database index
    pub database_id: u32,
    /// Protocol version; absent leaves the transport default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<ProtocolVersion>,
    /// Defer connecting until the first command
    pub lazy_connect: bool,
}

fn duration_to_millis(duration: Option<Duration>) -> u32 {
    duration.map_or(0, |d| u32::try_from(d.as_millis()).unwrap_or(u32::MAX))
}

/// Encode a configuration into a connection request.
///
/// Addresses are copied as given; an empty list stays empty. No current field
/// can fail, the result type is kept for validated fields.
pub fn encode(config: &ClientConfig) -> ArgsResult<ConnectionRequest> {
    let tls_mode = if config.use_tls() {
        TlsMode::SecureTls
    } else {
        TlsMode::NoTls
    };

    let read_from = config.read_from();
    let client_az = if read_from.uses_client_az() {
        config.client_az().map(str::to_string)
    } else {
        None
    };

    let request = ConnectionRequest {
        addresses: config.addresses().iter().map(AddressInfo::from).collect(),
        tls_mode,
        cluster_mode_enabled: config.cluster_mode(),
        read_from: read_from.into(),
        client_az,
        authentication_info: config.credentials().map(AuthenticationInfo::from),
        request_timeout: duration_to_millis(config.request_timeout()),
        connection_timeout: duration_to_millis(config.connection_timeout()),
        client_name: config.client_name().unwrap_or_default().to_string(),
        connection_retry_strategy: config
            .reconnect_strategy()
            .map(ConnectionRetryStrategy::from),
        database_id: config.database_id().unwrap_or_default(),
        protocol: config.protocol(),
        lazy_connect: config.lazy_connect(),
    };

    debug!(
        cluster_mode = request.cluster_mode_enabled,
        tls_mode = ?request.tls_mode,
        addresses = request.addresses.len(),
        authenticated = request.authentication_info.is_some(),
        "Encoded connection request"
    );

    Ok(request)
}
