//! Protocol keyword vocabulary
//!
//! Every fixed keyword emitted by the option serializers lives in this table so
//! the wire vocabulary can be audited in one place.

use std::fmt;

/// A fixed protocol keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `GET` - return the old value from `SET`
    Get,
    /// `NX` - only if the key does not exist
    Nx,
    /// `XX` - only if the key exists
    Xx,
    /// `IFEQ` - only if the current value equals the comparison value
    IfEq,
    /// `EX` - relative expiry in seconds
    Ex,
    /// `PX` - relative expiry in milliseconds
    Px,
    /// `EXAT` - absolute expiry as a unix timestamp in seconds
    ExAt,
    /// `PXAT` - absolute expiry as a unix timestamp in milliseconds
    PxAt,
    /// `KEEPTTL` - retain the existing time to live
    KeepTtl,
    /// `PERSIST` - drop the existing time to live
    Persist,
    /// `RANK`
    Rank,
    /// `MAXLEN`
    MaxLen,
    /// `COUNT`
    Count,
    /// `LIMIT`
    Limit,
    /// `REPLACE`
    Replace,
    /// `ABSTTL`
    AbsTtl,
    /// `IDLETIME`
    IdleTime,
    /// `FREQ`
    Freq,
    /// `DB`
    Db,
    /// `BYSCORE`
    ByScore,
    /// `BYLEX`
    ByLex,
    /// `REV`
    Rev,
    /// `CH` - report changed elements instead of added ones
    Changed,
    /// `APPEND`
    Append,
    /// `FLUSH`
    Flush,
}

impl Keyword {
    /// The token written to the wire for this keyword
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Nx => "NX",
            Self::Xx => "XX",
            Self::IfEq => "IFEQ",
            Self::Ex => "EX",
            Self::Px => "PX",
            Self::ExAt => "EXAT",
            Self::PxAt => "PXAT",
            Self::KeepTtl => "KEEPTTL",
            Self::Persist => "PERSIST",
            Self::Rank => "RANK",
            Self::MaxLen => "MAXLEN",
            Self::Count => "COUNT",
            Self::Limit => "LIMIT",
            Self::Replace => "REPLACE",
            Self::AbsTtl => "ABSTTL",
            Self::IdleTime => "IDLETIME",
            Self::Freq => "FREQ",
            Self::Db => "DB",
            Self::ByScore => "BYSCORE",
            Self::ByLex => "BYLEX",
            Self::Rev => "REV",
            Self::Changed => "CH",
            Self::Append => "APPEND",
            Self::Flush => "FLUSH",
        }
    }

    /// Owned token, ready to push onto an argument list
    #[must_use]
    pub fn token(self) -> String {
        self.as_str().to_string()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Keyword> for String {
    fn from(keyword: Keyword) -> Self {
        keyword.token()
    }
}
