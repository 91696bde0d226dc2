//! Connection configuration for standalone and cluster clients
//!
//! A [`ClientConfigBuilder`] accumulates settings through by-value `with_*`
//! calls; [`ClientConfigBuilder::build`] freezes it into an immutable
//! [`ClientConfig`] which is then encoded with [`ClientConfig::to_request`].

use crate::request::{self, ConnectionRequest};
use oxide_args_core::ArgsResult;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Host used when an address leaves its host empty
pub const DEFAULT_HOST: &str = "localhost";

/// Port used when an address leaves its port at zero
pub const DEFAULT_PORT: u16 = 6379;

const PLAIN_SCHEME: &str = "redis://";
const TLS_SCHEME: &str = "rediss://";

/// Address of a server node
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodeAddress {
    /// Host name or IP; empty falls back to [`DEFAULT_HOST`]
    pub host: String,
    /// Port; zero falls back to [`DEFAULT_PORT`]
    pub port: u16,
}

impl NodeAddress {
    /// Create a new address
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Parse a single `host[:port]` endpoint.
    ///
    /// A missing or unparsable port falls back to [`DEFAULT_PORT`]; the whole
    /// text then becomes the host.
    #[must_use]
    pub fn from_endpoint(endpoint: &str) -> Self {
        match endpoint.rsplit_once(':') {
            Some((host, port)) => match port.parse::<u16>() {
                Ok(port) => Self::new(host, port),
                Err(_) => Self::new(endpoint, DEFAULT_PORT),
            },
            None => Self::new(endpoint, DEFAULT_PORT),
        }
    }

    /// The address substituted when a client is given none: `localhost:6379`
    #[must_use]
    pub fn default_sentinel() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

/// Which node role serves read commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadFrom {
    /// Always read from the primary
    #[default]
    Primary,
    /// Spread reads across replicas, falling back to the primary
    PreferReplica,
    /// Prefer replicas in the client's availability zone
    AzAffinity,
    /// Prefer replicas, then the primary, in the client's availability zone
    AzAffinityReplicasAndPrimary,
}

impl ReadFrom {
    /// Whether this strategy uses the client availability zone
    #[must_use]
    pub const fn uses_client_az(self) -> bool {
        matches!(self, Self::AzAffinity | Self::AzAffinityReplicasAndPrimary)
    }
}

/// Protocol version preference
///
/// Left unset on a config, the transport picks the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProtocolVersion {
    /// RESP2 (Redis Serialization Protocol version 2)
    Resp2,
    /// RESP3 (Redis Serialization Protocol version 3) - Redis 6.0+
    Resp3,
}

/// Credentials used to authenticate with the server
#[derive(Clone, PartialEq, Eq)]
pub struct ServerCredentials {
    username: Option<String>,
    password: String,
}

impl ServerCredentials {
    /// ACL user and password
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: password.into(),
        }
    }

    /// Password for the `default` user
    pub fn with_default_username(password: impl Into<String>) -> Self {
        Self {
            username: None,
            password: password.into(),
        }
    }

    /// The username, if one was given
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// The password
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for ServerCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Reconnection backoff: wait `factor * exponent_base^attempt` ms, up to
/// `number_of_retries` growing steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffStrategy {
    /// Number of retries with growing delay before the delay stays constant
    pub number_of_retries: u32,
    /// Multiplier applied to every delay
    pub factor: u32,
    /// Base of the exponent
    pub exponent_base: u32,
}

impl BackoffStrategy {
    /// Create a new backoff strategy
    #[must_use]
    pub const fn new(number_of_retries: u32, factor: u32, exponent_base: u32) -> Self {
        Self {
            number_of_retries,
            factor,
            exponent_base,
        }
    }
}

/// Builder for [`ClientConfig`].
///
/// The cluster flag is chosen by the constructor and cannot be changed later.
/// Builders are moved through each call, so sharing one across threads needs
/// external synchronization by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Start configuring a standalone client
    #[must_use]
    pub fn standalone() -> Self {
        Self {
            config: ClientConfig::empty(false),
        }
    }

    /// Start configuring a cluster client
    #[must_use]
    pub fn cluster() -> Self {
        Self {
            config: ClientConfig::empty(true),
        }
    }

    /// Append a seed address
    #[must_use]
    pub fn with_address(mut self, address: NodeAddress) -> Self {
        self.config.addresses.push(address);
        self
    }

    /// Append several seed addresses, in order
    #[must_use]
    pub fn with_addresses(mut self, addresses: impl IntoIterator<Item = NodeAddress>) -> Self {
        self.config.addresses.extend(addresses);
        self
    }

    /// Append the addresses of a connection string such as
    /// `redis://host1:6379,host2:6380`. A `rediss://` scheme enables TLS.
    #[must_use]
    pub fn with_endpoints(mut self, connection_string: &str) -> Self {
        let connection_string = connection_string.trim();
        let endpoints = if let Some(rest) = connection_string.strip_prefix(TLS_SCHEME) {
            self.config.use_tls = true;
            rest
        } else {
            connection_string
                .strip_prefix(PLAIN_SCHEME)
                .unwrap_or(connection_string)
        };
        let addresses = endpoints
            .split(',')
            .map(str::trim)
            .filter(|endpoint| !endpoint.is_empty())
            .map(NodeAddress::from_endpoint);
        self.config.addresses.extend(addresses);
        self
    }

    /// Use TLS for every connection
    #[must_use]
    pub const fn with_use_tls(mut self, use_tls: bool) -> Self {
        self.config.use_tls = use_tls;
        self
    }

    /// Set the read strategy
    #[must_use]
    pub const fn with_read_from(mut self, read_from: ReadFrom) -> Self {
        self.config.read_from = read_from;
        self
    }

    /// Availability zone of the client, used by the AZ affinity strategies
    #[must_use]
    pub fn with_client_az(mut self, az: impl Into<String>) -> Self {
        self.config.client_az = Some(az.into());
        self
    }

    /// Authenticate with these credentials
    #[must_use]
    pub fn with_credentials(mut self, credentials: ServerCredentials) -> Self {
        self.config.credentials = Some(credentials);
        self
    }

    /// Time to wait for a request to complete
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = Some(timeout);
        self
    }

    /// Time to wait for a connection to be established
    #[must_use]
    pub const fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.config.connection_timeout = Some(timeout);
        self
    }

    /// Name sent with `CLIENT SETNAME` on every connection
    #[must_use]
    pub fn with_client_name(mut self, name: impl Into<String>) -> Self {
        self.config.client_name = Some(name.into());
        self
    }

    /// Backoff used when reconnecting
    #[must_use]
    pub const fn with_reconnect_strategy(mut self, strategy: BackoffStrategy) -> Self {
        self.config.reconnect_strategy = Some(strategy);
        self
    }

    /// Logical database to select after connecting
    #[must_use]
    pub const fn with_database_id(mut self, database_id: u32) -> Self {
        self.config.database_id = Some(database_id);
        self
    }

    /// Preferred protocol version
    #[must_use]
    pub const fn with_protocol(mut self, protocol: ProtocolVersion) -> Self {
        self.config.protocol = Some(protocol);
        self
    }

    /// Defer connecting until the first command is sent
    #[must_use]
    pub const fn with_lazy_connect(mut self, lazy_connect: bool) -> Self {
        self.config.lazy_connect = lazy_connect;
        self
    }

    /// Freeze the accumulated settings
    #[must_use]
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// Immutable client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    cluster_mode: bool,
    addresses: Vec<NodeAddress>,
    use_tls: bool,
    read_from: ReadFrom,
    client_az: Option<String>,
    credentials: Option<ServerCredentials>,
    request_timeout: Option<Duration>,
    connection_timeout: Option<Duration>,
    client_name: Option<String>,
    reconnect_strategy: Option<BackoffStrategy>,
    database_id: Option<u32>,
    protocol: Option<ProtocolVersion>,
    lazy_connect: bool,
}

impl ClientConfig {
    const fn empty(cluster_mode: bool) -> Self {
        Self {
            cluster_mode,
            addresses: Vec::new(),
            use_tls: false,
            read_from: ReadFrom::Primary,
            client_az: None,
            credentials: None,
            request_timeout: None,
            connection_timeout: None,
            client_name: None,
            reconnect_strategy: None,
            database_id: None,
            protocol: None,
            lazy_connect: false,
        }
    }

    /// Shorthand for [`ClientConfigBuilder::standalone`]
    #[must_use]
    pub fn standalone() -> ClientConfigBuilder {
        ClientConfigBuilder::standalone()
    }

    /// Shorthand for [`ClientConfigBuilder::cluster`]
    #[must_use]
    pub fn cluster() -> ClientConfigBuilder {
        ClientConfigBuilder::cluster()
    }

    /// Encode into the request handed to the transport
    pub fn to_request(&self) -> ArgsResult<ConnectionRequest> {
        request::encode(self)
    }

    /// Whether this is a cluster client
    #[must_use]
    pub const fn cluster_mode(&self) -> bool {
        self.cluster_mode
    }

    /// Addresses exactly as supplied
    #[must_use]
    pub fn addresses(&self) -> &[NodeAddress] {
        &self.addresses
    }

    /// Addresses to connect to: those supplied, or the default sentinel if none were
    #[must_use]
    pub fn effective_addresses(&self) -> Vec<NodeAddress> {
        if self.addresses.is_empty() {
            vec![NodeAddress::default_sentinel()]
        } else {
            self.addresses.clone()
        }
    }

    /// Whether TLS is enabled
    #[must_use]
    pub const fn use_tls(&self) -> bool {
        self.use_tls
    }

    /// The read strategy
    #[must_use]
    pub const fn read_from(&self) -> ReadFrom {
        self.read_from
    }

    /// The client availability zone, if set
    #[must_use]
    pub fn client_az(&self) -> Option<&str> {
        self.client_az.as_deref()
    }

    /// The credentials, if set
    #[must_use]
    pub const fn credentials(&self) -> Option<&ServerCredentials> {
        self.credentials.as_ref()
    }

    /// The request timeout, if set
    #[must_use]
    pub const fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    /// The connection timeout, if set
    #[must_use]
    pub const fn connection_timeout(&self) -> Option<Duration> {
        self.connection_timeout
    }

    /// The client name, if set
    #[must_use]
    pub fn client_name(&self) -> Option<&str> {
        self.client_name.as_deref()
    }

    /// The reconnect strategy, if set
    #[must_use]
    pub const fn reconnect_strategy(&self) -> Option<BackoffStrategy> {
        self.reconnect_strategy
    }

    /// The database id, if set
    #[must_use]
    pub const fn database_id(&self) -> Option<u32> {
        self.database_id
    }

    /// The protocol preference, if set
    #[must_use]
    pub const fn protocol(&self) -> Option<ProtocolVersion> {
        self.protocol
    }

    /// Whether connecting is deferred to the first command
    #[must_use]
    pub const fn lazy_connect(&self) -> bool {
        self.lazy_connect
    }
}
