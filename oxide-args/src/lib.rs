//! Typed command options and connection requests for Redis/Valkey clients
//!
//! `oxide-args` turns rich option objects into the exact token sequences the
//! server's text protocol expects, and turns a client configuration into the
//! structured request a transport uses to open a session. Every operation is
//! a pure, synchronous transformation: no I/O, no retries, no shared state.
//!
//! # Features
//!
//! - Option builders for `SET`, `GETEX`, `LPOS`, `RESTORE`, `COPY`, `ZPOP*`,
//!   `GEOADD`, `INFO` and `FUNCTION RESTORE`
//! - `ZRANGE` queries by index, score or lex with inclusive, exclusive and
//!   infinite boundaries
//! - Standalone and cluster connection configuration
//!
//! # Quick Start
//!
//! ```
//! use oxide_args::{ClientConfig, Expiry, NodeAddress, SetOptions, ToArgs};
//!
//! let options = SetOptions::new()
//!     .only_if_does_not_exist()
//!     .with_expiry(Expiry::seconds(60));
//! assert_eq!(options.to_args().unwrap(), vec!["NX", "EX", "60"]);
//!
//! let request = ClientConfig::cluster()
//!     .with_address(NodeAddress::new("10.0.0.1", 7000))
//!     .build()
//!     .to_request()
//!     .unwrap();
//! assert!(request.cluster_mode_enabled);
//! ```

#![deny(warnings)]
#![warn(missing_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]

pub mod commands;
pub mod config;
pub mod request;

pub use commands::{
    geo_members_to_args, CopyOptions, Eviction, Expiry, GeoAddOptions, GeospatialData, GetExOptions,
    InfoOptions, LPosOptions, LexBoundary, Limit, OptionValue, RangeByIndex, RangeByLex,
    RangeByScore, RangeQuery, RangeQueryWithScores, RemRangeQuery, RestoreOptions, ScoreBoundary,
    SetOptions, ToArgs, ZPopOptions,
};
pub use config::{
    BackoffStrategy, ClientConfig, ClientConfigBuilder, NodeAddress, ProtocolVersion, ReadFrom,
    ServerCredentials, DEFAULT_HOST, DEFAULT_PORT,
};
pub use oxide_args_core::{
    ArgsError, ArgsResult, ConditionalSet, EvictionKind, ExpiryKind, FunctionRestorePolicy,
    InfBoundary, InfoSection, Keyword,
};
pub use request::{
    encode, AddressInfo, AuthenticationInfo, ConnectionRequest, ConnectionRetryStrategy,
    ReadFromMode, TlsMode,
};
