//! Error types for argument serialization and request encoding

use thiserror::Error;

/// Result type for serialize/encode operations
pub type ArgsResult<T> = Result<T, ArgsError>;

/// Error returned when an option value cannot be mapped to protocol vocabulary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    /// An enumerated tag that the target command does not recognize
    #[error("invalid {kind} type: {tag}")]
    InvalidTag {
        /// Name of the enumeration (e.g. `expiry`)
        kind: &'static str,
        /// The offending tag as it would appear on the wire
        tag: String,
    },
}

impl ArgsError {
    /// Build an [`ArgsError::InvalidTag`]
    pub fn invalid_tag(kind: &'static str, tag: impl Into<String>) -> Self {
        Self::InvalidTag {
            kind,
            tag: tag.into(),
        }
    }

    /// Name of the enumeration that rejected the tag
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidTag { kind, .. } => *kind,
        }
    }

    /// The rejected tag
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::InvalidTag { tag, .. } => tag.as_str(),
        }
    }
}
