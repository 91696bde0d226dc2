//! Closed enumerations shared by the option types
//!
//! Each enumeration maps to exactly one wire token and parses back from it.
//! Parsing is case-insensitive; an unknown tag yields [`ArgsError::InvalidTag`].

use crate::error::ArgsError;
use crate::keyword::Keyword;
use std::fmt;
use std::str::FromStr;

macro_rules! wire_tag {
    ($name:ident, $kind:literal, { $($variant:ident => $token:expr),+ $(,)? }) => {
        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The token written to the wire for this variant
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ArgsError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| ArgsError::invalid_tag($kind, s))
            }
        }
    };
}

/// Condition under which a value is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionalSet {
    /// Only write if the key already exists (`XX`)
    OnlyIfExists,
    /// Only write if the key does not exist (`NX`)
    OnlyIfDoesNotExist,
    /// Only write if the current value equals a comparison value (`IFEQ`).
    /// Requires Valkey 8.1+.
    OnlyIfEquals,
}

wire_tag!(ConditionalSet, "conditional set", {
    OnlyIfExists => Keyword::Xx.as_str(),
    OnlyIfDoesNotExist => Keyword::Nx.as_str(),
    OnlyIfEquals => Keyword::IfEq.as_str(),
});

/// Kind of a time-to-live setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpiryKind {
    /// Relative, in seconds (`EX`)
    Seconds,
    /// Relative, in milliseconds (`PX`)
    Milliseconds,
    /// Absolute unix time, in seconds (`EXAT`)
    UnixSeconds,
    /// Absolute unix time, in milliseconds (`PXAT`)
    UnixMilliseconds,
    /// Retain the current time to live (`KEEPTTL`)
    KeepExisting,
    /// Remove the current time to live (`PERSIST`)
    Persist,
}

wire_tag!(ExpiryKind, "expiry", {
    Seconds => Keyword::Ex.as_str(),
    Milliseconds => Keyword::Px.as_str(),
    UnixSeconds => Keyword::ExAt.as_str(),
    UnixMilliseconds => Keyword::PxAt.as_str(),
    KeepExisting => Keyword::KeepTtl.as_str(),
    Persist => Keyword::Persist.as_str(),
});

impl ExpiryKind {
    /// Whether this kind is followed by a numeric magnitude on the wire
    #[must_use]
    pub const fn has_magnitude(self) -> bool {
        !matches!(self, Self::KeepExisting | Self::Persist)
    }

    /// Whether this kind denotes an absolute point in time
    #[must_use]
    pub const fn is_absolute(self) -> bool {
        matches!(self, Self::UnixSeconds | Self::UnixMilliseconds)
    }
}

/// Eviction hint attached to a restored key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvictionKind {
    /// Idle time in seconds, for LRU policies (`IDLETIME`)
    IdleTime,
    /// Access frequency counter, for LFU policies (`FREQ`)
    Freq,
}

wire_tag!(EvictionKind, "eviction", {
    IdleTime => Keyword::IdleTime.as_str(),
    Freq => Keyword::Freq.as_str(),
});

/// Sign of an infinite range boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfBoundary {
    /// Positive infinity (`+`)
    Positive,
    /// Negative infinity (`-`)
    Negative,
}

wire_tag!(InfBoundary, "infinity boundary", {
    Positive => "+",
    Negative => "-",
});

/// Section of the `INFO` reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoSection {
    /// General information about the server
    Server,
    /// Client connections section
    Clients,
    /// Memory consumption related information
    Memory,
    /// RDB and AOF related information
    Persistence,
    /// General statistics
    Stats,
    /// Replication information
    Replication,
    /// CPU consumption statistics
    Cpu,
    /// Command statistics
    CommandStats,
    /// Command latency percentile statistics
    LatencyStats,
    /// Sentinel section (sentinel instances only)
    Sentinel,
    /// Cluster section
    Cluster,
    /// Modules section
    Modules,
    /// Database related statistics
    Keyspace,
    /// Error statistics
    ErrorStats,
    /// All sections (excluding module generated ones)
    All,
    /// The default set of sections
    Default,
    /// All sections, including module generated ones
    Everything,
}

wire_tag!(InfoSection, "info section", {
    Server => "server",
    Clients => "clients",
    Memory => "memory",
    Persistence => "persistence",
    Stats => "stats",
    Replication => "replication",
    Cpu => "cpu",
    CommandStats => "commandstats",
    LatencyStats => "latencystats",
    Sentinel => "sentinel",
    Cluster => "cluster",
    Modules => "modules",
    Keyspace => "keyspace",
    ErrorStats => "errorstats",
    All => "all",
    Default => "default",
    Everything => "everything",
});

/// Policy for `FUNCTION RESTORE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionRestorePolicy {
    /// Append restored libraries, failing on name collisions
    Append,
    /// Delete all existing libraries before restoring
    Flush,
    /// Append restored libraries, replacing existing ones on collision
    Replace,
}

wire_tag!(FunctionRestorePolicy, "function restore policy", {
    Append => Keyword::Append.as_str(),
    Flush => Keyword::Flush.as_str(),
    Replace => Keyword::Replace.as_str(),
});
