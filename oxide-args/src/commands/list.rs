//! Options for list commands

use super::ToArgs;
use oxide_args_core::{int_to_token, ArgsResult, Keyword};

/// Optional arguments for `LPOS`
///
/// Tokens are emitted as `RANK n`, `MAXLEN n`, then `COUNT n`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LPosOptions {
    rank: Option<i64>,
    max_len: Option<i64>,
    count: Option<i64>,
}

impl LPosOptions {
    /// Create empty options; serializes to no tokens
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Which match to return; negative ranks search from the tail
    #[must_use]
    pub const fn with_rank(mut self, rank: i64) -> Self {
        self.rank = Some(rank);
        self
    }

    /// Maximum number of list elements to compare
    #[must_use]
    pub const fn with_max_len(mut self, max_len: i64) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Number of matching positions to return (0 returns all)
    #[must_use]
    pub const fn with_count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    /// The rank, if set
    #[must_use]
    pub const fn rank(&self) -> Option<i64> {
        self.rank
    }

    /// The max length, if set
    #[must_use]
    pub const fn max_len(&self) -> Option<i64> {
        self.max_len
    }

    /// The count, if set
    #[must_use]
    pub const fn count(&self) -> Option<i64> {
        self.count
    }
}

impl ToArgs for LPosOptions {
    fn to_args(&self) -> ArgsResult<Vec<String>> {
        let mut args = Vec::new();

        if let Some(rank) = self.rank {
            args.push(Keyword::Rank.token());
            args.push(int_to_token(rank));
        }

        if let Some(max_len) = self.max_len {
            args.push(Keyword::MaxLen.token());
            args.push(int_to_token(max_len));
        }

        if let Some(count) = self.count {
            args.push(Keyword::Count.token());
            args.push(int_to_token(count));
        }

        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lpos_rank_and_max_len() {
        let options = LPosOptions::new().with_max_len(1000).with_rank(-2);
        assert_eq!(
            options.to_args().unwrap(),
            vec!["RANK", "-2", "MAXLEN", "1000"]
        );
    }

    #[test]
    fn test_lpos_zero_values_are_emitted() {
        let options = LPosOptions::new().with_max_len(0).with_count(0);
        assert_eq!(
            options.to_args().unwrap(),
            vec!["MAXLEN", "0", "COUNT", "0"]
        );
    }
}
