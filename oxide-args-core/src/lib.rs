//! Core vocabulary for oxide-args
//!
//! This crate provides the keyword table, numeric formatting helpers, the
//! closed enumerations and the error type shared by the command option
//! serializers and the connection request encoder.

#![deny(warnings)]
#![warn(missing_docs)]

pub mod error;
pub mod format;
pub mod keyword;
pub mod types;

pub use error::{ArgsError, ArgsResult};
pub use format::{float_to_token, int_to_token, uint_to_token};
pub use keyword::Keyword;
pub use types::{
    ConditionalSet, EvictionKind, ExpiryKind, FunctionRestorePolicy, InfBoundary, InfoSection,
};
