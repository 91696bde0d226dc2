//! Options and range queries for sorted set commands
//!
//! Boundaries are built first and then handed to a query, so the same
//! boundary can serve `ZRANGE`, `ZREMRANGEBY*` and `ZLEXCOUNT`.

use super::ToArgs;
use oxide_args_core::format::{EXCLUSIVE_PREFIX, INCLUSIVE_LEX_PREFIX, INFINITY_SUFFIX};
use oxide_args_core::{float_to_token, int_to_token, ArgsResult, InfBoundary, Keyword};
use std::fmt;

/// Endpoint of a score range, already in wire form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScoreBoundary(String);

impl ScoreBoundary {
    /// Inclusive boundary at `score`
    #[must_use]
    pub fn inclusive(score: f64) -> Self {
        Self(float_to_token(score))
    }

    /// Exclusive boundary at `score`, written as `(score`
    #[must_use]
    pub fn exclusive(score: f64) -> Self {
        Self(format!("{EXCLUSIVE_PREFIX}{}", float_to_token(score)))
    }

    /// Boundary at `score`, inclusive or exclusive
    #[must_use]
    pub fn new(score: f64, inclusive: bool) -> Self {
        if inclusive {
            Self::inclusive(score)
        } else {
            Self::exclusive(score)
        }
    }

    /// Infinite boundary, written as `+inf` or `-inf`
    #[must_use]
    pub fn infinite(bound: InfBoundary) -> Self {
        Self(format!("{}{INFINITY_SUFFIX}", bound.as_str()))
    }

    /// The wire token
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScoreBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Endpoint of a lexicographic range, already in wire form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LexBoundary(String);

impl LexBoundary {
    /// Inclusive boundary, written as `[value`
    #[must_use]
    pub fn inclusive(value: &str) -> Self {
        Self(format!("{INCLUSIVE_LEX_PREFIX}{value}"))
    }

    /// Exclusive boundary, written as `(value`
    #[must_use]
    pub fn exclusive(value: &str) -> Self {
        Self(format!("{EXCLUSIVE_PREFIX}{value}"))
    }

    /// Boundary at `value`, inclusive or exclusive
    #[must_use]
    pub fn new(value: &str, inclusive: bool) -> Self {
        if inclusive {
            Self::inclusive(value)
        } else {
            Self::exclusive(value)
        }
    }

    /// Infinite boundary, written as `+` or `-`
    #[must_use]
    pub fn infinite(bound: InfBoundary) -> Self {
        Self(bound.as_str().to_string())
    }

    /// The wire token
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LexBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `LIMIT offset count` clause, like SQL's `LIMIT offset, count`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    /// Zero-based index of the first element to return
    pub offset: i64,
    /// Maximum number of elements; negative returns everything from `offset`
    pub count: i64,
}

impl Limit {
    /// Create a new limit
    #[must_use]
    pub const fn new(offset: i64, count: i64) -> Self {
        Self { offset, count }
    }

    fn push_args(&self, args: &mut Vec<String>) {
        args.push(Keyword::Limit.token());
        args.push(int_to_token(self.offset));
        args.push(int_to_token(self.count));
    }
}

/// Range of elements by index (rank)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeByIndex {
    start: i64,
    end: i64,
    reverse: bool,
}

impl RangeByIndex {
    /// Elements from index `start` through `end`, inclusive
    #[must_use]
    pub const fn new(start: i64, end: i64) -> Self {
        Self {
            start,
            end,
            reverse: false,
        }
    }

    /// Index 0 becomes the element with the highest score
    #[must_use]
    pub const fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }
}

impl ToArgs for RangeByIndex {
    fn to_args(&self) -> ArgsResult<Vec<String>> {
        let mut args = Vec::with_capacity(3);
        args.push(int_to_token(self.start));
        args.push(int_to_token(self.end));
        if self.reverse {
            args.push(Keyword::Rev.token());
        }
        Ok(args)
    }
}

/// Range of elements by score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeByScore {
    start: ScoreBoundary,
    end: ScoreBoundary,
    reverse: bool,
    limit: Option<Limit>,
}

impl RangeByScore {
    /// Elements with scores between `start` and `end`
    #[must_use]
    pub const fn new(start: ScoreBoundary, end: ScoreBoundary) -> Self {
        Self {
            start,
            end,
            reverse: false,
            limit: None,
        }
    }

    /// Iterate from the highest score down
    #[must_use]
    pub const fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Restrict the result with `LIMIT offset count`
    #[must_use]
    pub const fn with_limit(mut self, offset: i64, count: i64) -> Self {
        self.limit = Some(Limit::new(offset, count));
        self
    }

    /// Tokens for `ZREMRANGEBYSCORE` and `ZCOUNT`: `[start, end]`
    #[must_use]
    pub fn to_rem_range_args(&self) -> Vec<String> {
        vec![self.start.0.clone(), self.end.0.clone()]
    }
}

impl ToArgs for RangeByScore {
    fn to_args(&self) -> ArgsResult<Vec<String>> {
        let mut args = Vec::with_capacity(7);
        args.push(self.start.0.clone());
        args.push(self.end.0.clone());
        args.push(Keyword::ByScore.token());
        if self.reverse {
            args.push(Keyword::Rev.token());
        }
        if let Some(limit) = &self.limit {
            limit.push_args(&mut args);
        }
        Ok(args)
    }
}

/// Range of elements by lexicographical order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeByLex {
    start: LexBoundary,
    end: LexBoundary,
    reverse: bool,
    limit: Option<Limit>,
}

impl RangeByLex {
    /// Elements between `start` and `end`
    #[must_use]
    pub const fn new(start: LexBoundary, end: LexBoundary) -> Self {
        Self {
            start,
            end,
            reverse: false,
            limit: None,
        }
    }

    /// Iterate in reverse lexicographical order
    #[must_use]
    pub const fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Restrict the result with `LIMIT offset count`
    #[must_use]
    pub const fn with_limit(mut self, offset: i64, count: i64) -> Self {
        self.limit = Some(Limit::new(offset, count));
        self
    }

    /// Tokens for `ZREMRANGEBYLEX`: `[start, end]`
    #[must_use]
    pub fn to_rem_range_args(&self) -> Vec<String> {
        vec![self.start.0.clone(), self.end.0.clone()]
    }

    /// Tokens for `ZLEXCOUNT`: `[start, end]`
    #[must_use]
    pub fn to_lex_count_args(&self) -> Vec<String> {
        self.to_rem_range_args()
    }
}

impl ToArgs for RangeByLex {
    fn to_args(&self) -> ArgsResult<Vec<String>> {
        let mut args = Vec::with_capacity(7);
        args.push(self.start.0.clone());
        args.push(self.end.0.clone());
        args.push(Keyword::ByLex.token());
        if self.reverse {
            args.push(Keyword::Rev.token());
        }
        if let Some(limit) = &self.limit {
            limit.push_args(&mut args);
        }
        Ok(args)
    }
}

/// Query for `ZRANGE` and `ZRANGESTORE`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeQuery {
    /// By index; never carries `BYSCORE`, `BYLEX` or a limit
    ByIndex(RangeByIndex),
    /// By score; always carries `BYSCORE`
    ByScore(RangeByScore),
    /// By lexicographical order; always carries `BYLEX`
    ByLex(RangeByLex),
}

impl ToArgs for RangeQuery {
    fn to_args(&self) -> ArgsResult<Vec<String>> {
        match self {
            Self::ByIndex(query) => query.to_args(),
            Self::ByScore(query) => query.to_args(),
            Self::ByLex(query) => query.to_args(),
        }
    }
}

impl From<RangeByIndex> for RangeQuery {
    fn from(query: RangeByIndex) -> Self {
        Self::ByIndex(query)
    }
}

impl From<RangeByScore> for RangeQuery {
    fn from(query: RangeByScore) -> Self {
        Self::ByScore(query)
    }
}

impl From<RangeByLex> for RangeQuery {
    fn from(query: RangeByLex) -> Self {
        Self::ByLex(query)
    }
}

/// Query for `ZRANGE ... WITHSCORES`; `BYLEX` cannot be combined with scores
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeQueryWithScores {
    /// By index
    ByIndex(RangeByIndex),
    /// By score
    ByScore(RangeByScore),
}

impl ToArgs for RangeQueryWithScores {
    fn to_args(&self) -> ArgsResult<Vec<String>> {
        match self {
            Self::ByIndex(query) => query.to_args(),
            Self::ByScore(query) => query.to_args(),
        }
    }
}

impl From<RangeByIndex> for RangeQueryWithScores {
    fn from(query: RangeByIndex) -> Self {
        Self::ByIndex(query)
    }
}

impl From<RangeByScore> for RangeQueryWithScores {
    fn from(query: RangeByScore) -> Self {
        Self::ByScore(query)
    }
}

/// Query for `ZREMRANGEBYSCORE` / `ZREMRANGEBYLEX`.
///
/// Removal by index takes plain integers and has no query type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemRangeQuery {
    /// By score
    ByScore(RangeByScore),
    /// By lexicographical order
    ByLex(RangeByLex),
}

impl RemRangeQuery {
    /// Tokens for the removal command: `[start, end]`
    #[must_use]
    pub fn to_rem_range_args(&self) -> Vec<String> {
        match self {
            Self::ByScore(query) => query.to_rem_range_args(),
            Self::ByLex(query) => query.to_rem_range_args(),
        }
    }
}

impl From<RangeByScore> for RemRangeQuery {
    fn from(query: RangeByScore) -> Self {
        Self::ByScore(query)
    }
}

impl From<RangeByLex> for RemRangeQuery {
    fn from(query: RangeByLex) -> Self {
        Self::ByLex(query)
    }
}

/// Optional arguments for `ZPOPMIN`, `ZPOPMAX` and `ZMPOP`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZPopOptions {
    count: Option<i64>,
}

impl ZPopOptions {
    /// Create empty options; pops a single member
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of members to pop. Counts that are not positive are omitted.
    #[must_use]
    pub const fn with_count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    fn positive_count(&self) -> Option<i64> {
        self.count.filter(|count| *count > 0)
    }

    /// Tokens for `ZMPOP`, which tags the count with `COUNT`
    #[must_use]
    pub fn to_args_with_count_keyword(&self) -> Vec<String> {
        match self.positive_count() {
            Some(count) => vec![Keyword::Count.token(), int_to_token(count)],
            None => Vec::new(),
        }
    }
}

impl ToArgs for ZPopOptions {
    /// Tokens for `ZPOPMIN`/`ZPOPMAX`: the bare count
    fn to_args(&self) -> ArgsResult<Vec<String>> {
        Ok(self
            .positive_count()
            .map(int_to_token)
            .into_iter()
            .collect())
    }
}
