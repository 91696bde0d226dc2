//! Options for keyspace and server commands (`RESTORE`, `COPY`, `INFO`)

use super::ToArgs;
use oxide_args_core::{int_to_token, ArgsResult, EvictionKind, InfoSection, Keyword};

/// Eviction hint for a restored key: `IDLETIME n` or `FREQ n`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eviction {
    /// Which hint to send
    pub kind: EvictionKind,
    /// Idle seconds or frequency counter
    pub count: i64,
}

impl Eviction {
    /// Create a new eviction hint
    #[must_use]
    pub const fn new(kind: EvictionKind, count: i64) -> Self {
        Self { kind, count }
    }
}

/// Optional arguments for `RESTORE`
///
/// `IDLETIME` and `FREQ` are mutually exclusive; setting an eviction hint
/// replaces the previous one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreOptions {
    replace: bool,
    abs_ttl: bool,
    eviction: Option<Eviction>,
}

impl RestoreOptions {
    /// Create empty options; serializes to no tokens
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite an existing key (`REPLACE`)
    #[must_use]
    pub const fn with_replace(mut self) -> Self {
        self.replace = true;
        self
    }

    /// Treat the TTL argument as an absolute unix timestamp in milliseconds (`ABSTTL`)
    #[must_use]
    pub const fn with_abs_ttl(mut self) -> Self {
        self.abs_ttl = true;
        self
    }

    /// Attach an eviction hint
    #[must_use]
    pub const fn with_eviction(mut self, kind: EvictionKind, count: i64) -> Self {
        self.eviction = Some(Eviction::new(kind, count));
        self
    }

    /// The eviction hint, if any
    #[must_use]
    pub const fn eviction(&self) -> Option<Eviction> {
        self.eviction
    }
}

impl ToArgs for RestoreOptions {
    fn to_args(&self) -> ArgsResult<Vec<String>> {
        let mut args = Vec::new();
        if self.replace {
            args.push(Keyword::Replace.token());
        }
        if self.abs_ttl {
            args.push(Keyword::AbsTtl.token());
        }
        if let Some(eviction) = self.eviction {
            args.push(eviction.kind.as_str().to_string());
            args.push(int_to_token(eviction.count));
        }
        Ok(args)
    }
}

/// Optional arguments for `COPY`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyOptions {
    replace: bool,
    destination_db: Option<i64>,
}

impl CopyOptions {
    /// Create empty options; serializes to no tokens
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the destination key before copying (`REPLACE`)
    #[must_use]
    pub const fn with_replace(mut self) -> Self {
        self.replace = true;
        self
    }

    /// Copy into another logical database (`DB n`)
    #[must_use]
    pub const fn with_destination_db(mut self, db: i64) -> Self {
        self.destination_db = Some(db);
        self
    }

    /// The destination database, if set
    #[must_use]
    pub const fn destination_db(&self) -> Option<i64> {
        self.destination_db
    }
}

impl ToArgs for CopyOptions {
    fn to_args(&self) -> ArgsResult<Vec<String>> {
        let mut args = Vec::new();
        if self.replace {
            args.push(Keyword::Replace.token());
        }
        if let Some(db) = self.destination_db {
            args.push(Keyword::Db.token());
            args.push(int_to_token(db));
        }
        Ok(args)
    }
}

/// Optional arguments for `INFO`
///
/// With no sections the server replies with its default set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoOptions {
    sections: Vec<InfoSection>,
}

impl InfoOptions {
    /// Create empty options; serializes to no tokens
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the given sections, in order. Multiple sections need server 7.0+.
    #[must_use]
    pub fn with_sections(mut self, sections: impl IntoIterator<Item = InfoSection>) -> Self {
        self.sections.extend(sections);
        self
    }

    /// The requested sections
    #[must_use]
    pub fn sections(&self) -> &[InfoSection] {
        &self.sections
    }
}

impl ToArgs for InfoOptions {
    fn to_args(&self) -> ArgsResult<Vec<String>> {
        Ok(self
            .sections
            .iter()
            .map(|section| section.as_str().to_string())
            .collect())
    }
}
