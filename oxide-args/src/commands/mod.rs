//! Option builders for Redis/Valkey commands
//!
//! Each option type serializes into the ordered tokens that follow a command's
//! name and keys. An option type with every field unset produces no tokens.

pub mod generic;
pub mod geo;
pub mod list;
pub mod sorted_set;
pub mod string;

use oxide_args_core::{ArgsResult, FunctionRestorePolicy};

pub use generic::{CopyOptions, Eviction, InfoOptions, RestoreOptions};
pub use geo::{geo_members_to_args, GeoAddOptions, GeospatialData};
pub use list::LPosOptions;
pub use sorted_set::{
    LexBoundary, Limit, RangeByIndex, RangeByLex, RangeByScore, RangeQuery, RangeQueryWithScores,
    RemRangeQuery, ScoreBoundary, ZPopOptions,
};
pub use string::{Expiry, GetExOptions, SetOptions};

/// Trait for values that serialize into command arguments
pub trait ToArgs {
    /// Produce the ordered tokens for this value
    fn to_args(&self) -> ArgsResult<Vec<String>>;

    /// Append the tokens for this value to `args`.
    ///
    /// On error `args` is left untouched.
    fn append_to(&self, args: &mut Vec<String>) -> ArgsResult<()> {
        let tokens = self.to_args()?;
        args.extend(tokens);
        Ok(())
    }
}

impl ToArgs for FunctionRestorePolicy {
    fn to_args(&self) -> ArgsResult<Vec<String>> {
        Ok(vec![self.as_str().to_string()])
    }
}

/// Any option value accepted by a command
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// `SET` options
    Set(SetOptions),
    /// `GETEX` options
    GetEx(GetExOptions),
    /// `LPOS` options
    LPos(LPosOptions),
    /// `RESTORE` options
    Restore(RestoreOptions),
    /// `COPY` options
    Copy(CopyOptions),
    /// `ZPOPMIN`/`ZPOPMAX` options
    ZPop(ZPopOptions),
    /// `GEOADD` options
    GeoAdd(GeoAddOptions),
    /// `INFO` options
    Info(InfoOptions),
    /// `FUNCTION RESTORE` policy
    FunctionRestore(FunctionRestorePolicy),
    /// `ZRANGE` query
    Range(RangeQuery),
}

impl ToArgs for OptionValue {
    fn to_args(&self) -> ArgsResult<Vec<String>> {
        match self {
            Self::Set(options) => options.to_args(),
            Self::GetEx(options) => options.to_args(),
            Self::LPos(options) => options.to_args(),
            Self::Restore(options) => options.to_args(),
            Self::Copy(options) => options.to_args(),
            Self::ZPop(options) => options.to_args(),
            Self::GeoAdd(options) => options.to_args(),
            Self::Info(options) => options.to_args(),
            Self::FunctionRestore(policy) => policy.to_args(),
            Self::Range(query) => query.to_args(),
        }
    }
}

macro_rules! impl_from_option {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl From<$ty> for OptionValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

impl_from_option!(
    Set(SetOptions),
    GetEx(GetExOptions),
    LPos(LPosOptions),
    Restore(RestoreOptions),
    Copy(CopyOptions),
    ZPop(ZPopOptions),
    GeoAdd(GeoAddOptions),
    Info(InfoOptions),
    FunctionRestore(FunctionRestorePolicy),
    Range(RangeQuery),
);
