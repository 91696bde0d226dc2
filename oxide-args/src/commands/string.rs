//! Options for string commands (`SET`, `GETEX`) and the shared expiry type

use super::ToArgs;
use oxide_args_core::{uint_to_token, ArgsError, ArgsResult, ConditionalSet, ExpiryKind, Keyword};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Expiry kinds accepted by `SET`
const SET_EXPIRY_KINDS: &[ExpiryKind] = &[
    ExpiryKind::Seconds,
    ExpiryKind::Milliseconds,
    ExpiryKind::UnixSeconds,
    ExpiryKind::UnixMilliseconds,
    ExpiryKind::KeepExisting,
];

/// Expiry kinds accepted by `GETEX`
const GETEX_EXPIRY_KINDS: &[ExpiryKind] = &[
    ExpiryKind::Seconds,
    ExpiryKind::Milliseconds,
    ExpiryKind::UnixSeconds,
    ExpiryKind::UnixMilliseconds,
    ExpiryKind::Persist,
];

/// Lifetime of a value.
///
/// Built through one factory per kind and immutable afterwards. Timed kinds
/// carry the number written after the keyword, in the unit of the kind.
/// `KEEPTTL` and `PERSIST` carry nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiry {
    kind: ExpiryKind,
    magnitude: Option<u64>,
}

impl Expiry {
    const fn timed(kind: ExpiryKind, magnitude: u64) -> Self {
        Self {
            kind,
            magnitude: Some(magnitude),
        }
    }

    /// Expire after `seconds` (`EX`)
    #[must_use]
    pub const fn seconds(seconds: u64) -> Self {
        Self::timed(ExpiryKind::Seconds, seconds)
    }

    /// Expire after `millis` milliseconds (`PX`)
    #[must_use]
    pub const fn milliseconds(millis: u64) -> Self {
        Self::timed(ExpiryKind::Milliseconds, millis)
    }

    /// Expire at a unix timestamp given in seconds (`EXAT`)
    #[must_use]
    pub const fn unix_seconds(timestamp: u64) -> Self {
        Self::timed(ExpiryKind::UnixSeconds, timestamp)
    }

    /// Expire at a unix timestamp given in milliseconds (`PXAT`)
    #[must_use]
    pub const fn unix_milliseconds(timestamp: u64) -> Self {
        Self::timed(ExpiryKind::UnixMilliseconds, timestamp)
    }

    /// Expire after `duration`.
    ///
    /// Uses `EX` when the duration is a whole number of seconds and `PX`
    /// otherwise. Sub-millisecond precision is truncated and a millisecond
    /// count beyond `u64::MAX` saturates.
    #[must_use]
    pub fn in_duration(duration: Duration) -> Self {
        if duration.subsec_nanos() == 0 {
            Self::seconds(duration.as_secs())
        } else {
            Self::milliseconds(saturating_millis(duration))
        }
    }

    /// Expire at `timestamp`.
    ///
    /// Uses `EXAT` when the timestamp falls on a whole second and `PXAT`
    /// otherwise. Timestamps before the unix epoch encode as zero and a
    /// millisecond count beyond `u64::MAX` saturates.
    #[must_use]
    pub fn at(timestamp: SystemTime) -> Self {
        let since_epoch = timestamp.duration_since(UNIX_EPOCH).unwrap_or_default();
        if since_epoch.subsec_nanos() == 0 {
            Self::unix_seconds(since_epoch.as_secs())
        } else {
            Self::unix_milliseconds(saturating_millis(since_epoch))
        }
    }

    /// Keep the time to live already associated with the key (`KEEPTTL`)
    #[must_use]
    pub const fn keep_existing() -> Self {
        Self {
            kind: ExpiryKind::KeepExisting,
            magnitude: None,
        }
    }

    /// Remove the time to live associated with the key (`PERSIST`)
    #[must_use]
    pub const fn persist() -> Self {
        Self {
            kind: ExpiryKind::Persist,
            magnitude: None,
        }
    }

    /// The expiry kind
    #[must_use]
    pub const fn kind(&self) -> ExpiryKind {
        self.kind
    }

    /// The magnitude written after the keyword, in the unit of the kind.
    ///
    /// `None` for `KEEPTTL` and `PERSIST`.
    #[must_use]
    pub const fn magnitude(&self) -> Option<u64> {
        self.magnitude
    }

    /// Tokens for this expiry, provided its kind is in `accepted`
    pub(crate) fn to_args_for(&self, accepted: &[ExpiryKind]) -> ArgsResult<Vec<String>> {
        if !accepted.contains(&self.kind) {
            debug!(kind = %self.kind, "expiry kind rejected by command");
            return Err(ArgsError::invalid_tag("expiry", self.kind.as_str()));
        }
        let mut args = vec![self.kind.as_str().to_string()];
        if let Some(magnitude) = self.magnitude {
            args.push(uint_to_token(magnitude));
        }
        Ok(args)
    }
}

fn saturating_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Optional arguments for `SET`
///
/// Tokens are emitted in the order: condition, comparison value, `GET`, expiry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetOptions {
    condition: Option<ConditionalSet>,
    comparison_value: Option<String>,
    return_old_value: bool,
    expiry: Option<Expiry>,
}

impl SetOptions {
    /// Create empty options; serializes to no tokens
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a condition, clearing any previous comparison value.
    ///
    /// Prefer the dedicated `only_if_*` methods; `OnlyIfEquals` set through
    /// here compares against the empty string.
    #[must_use]
    pub fn conditional_set(mut self, condition: ConditionalSet) -> Self {
        self.condition = Some(condition);
        self.comparison_value = None;
        self
    }

    /// Only set the key if it already exists (`XX`)
    #[must_use]
    pub fn only_if_exists(self) -> Self {
        self.conditional_set(ConditionalSet::OnlyIfExists)
    }

    /// Only set the key if it does not exist (`NX`)
    #[must_use]
    pub fn only_if_does_not_exist(self) -> Self {
        self.conditional_set(ConditionalSet::OnlyIfDoesNotExist)
    }

    /// Only set the key if its current value equals `comparison_value` (`IFEQ`).
    ///
    /// Requires Valkey 8.1 or newer.
    #[must_use]
    pub fn only_if_equals(mut self, comparison_value: impl Into<String>) -> Self {
        self.condition = Some(ConditionalSet::OnlyIfEquals);
        self.comparison_value = Some(comparison_value.into());
        self
    }

    /// Return the previously stored value (`GET`)
    #[must_use]
    pub const fn with_return_old_value(mut self, return_old_value: bool) -> Self {
        self.return_old_value = return_old_value;
        self
    }

    /// Set the expiry. `PERSIST` is not accepted by `SET` and fails at serialization.
    #[must_use]
    pub const fn with_expiry(mut self, expiry: Expiry) -> Self {
        self.expiry = Some(expiry);
        self
    }

    /// The active condition, if any
    #[must_use]
    pub const fn condition(&self) -> Option<ConditionalSet> {
        self.condition
    }

    /// The comparison value for `IFEQ`, if any
    #[must_use]
    pub fn comparison_value(&self) -> Option<&str> {
        self.comparison_value.as_deref()
    }

    /// Whether `GET` is emitted
    #[must_use]
    pub const fn return_old_value(&self) -> bool {
        self.return_old_value
    }

    /// The expiry, if any
    #[must_use]
    pub const fn expiry(&self) -> Option<&Expiry> {
        self.expiry.as_ref()
    }
}

impl ToArgs for SetOptions {
    fn to_args(&self) -> ArgsResult<Vec<String>> {
        let mut args = Vec::new();

        if let Some(condition) = self.condition {
            args.push(condition.as_str().to_string());
            if condition == ConditionalSet::OnlyIfEquals {
                args.push(self.comparison_value.clone().unwrap_or_default());
            }
        }

        if self.return_old_value {
            args.push(Keyword::Get.token());
        }

        if let Some(expiry) = &self.expiry {
            args.extend(expiry.to_args_for(SET_EXPIRY_KINDS)?);
        }

        Ok(args)
    }
}

/// Optional arguments for `GETEX`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetExOptions {
    expiry: Option<Expiry>,
}

impl GetExOptions {
    /// Create empty options; serializes to no tokens
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the expiry. `KEEPTTL` is not accepted by `GETEX` and fails at serialization.
    #[must_use]
    pub const fn with_expiry(mut self, expiry: Expiry) -> Self {
        self.expiry = Some(expiry);
        self
    }

    /// The expiry, if any
    #[must_use]
    pub const fn expiry(&self) -> Option<&Expiry> {
        self.expiry.as_ref()
    }
}

impl ToArgs for GetExOptions {
    fn to_args(&self) -> ArgsResult<Vec<String>> {
        match &self.expiry {
            Some(expiry) => expiry.to_args_for(GETEX_EXPIRY_KINDS),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_in_duration_picks_unit() {
        assert_eq!(
            Expiry::in_duration(Duration::from_secs(10)),
            Expiry::seconds(10)
        );
        assert_eq!(
            Expiry::in_duration(Duration::from_millis(1500)),
            Expiry::milliseconds(1500)
        );
    }

    #[test]
    fn test_expiry_at_picks_unit() {
        let whole = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let expiry = Expiry::at(whole);
        assert_eq!(expiry.kind(), ExpiryKind::UnixSeconds);
        assert_eq!(expiry.magnitude(), Some(1_700_000_000));

        let fractional = UNIX_EPOCH + Duration::from_millis(1_700_000_000_250);
        let expiry = Expiry::at(fractional);
        assert_eq!(expiry.kind(), ExpiryKind::UnixMilliseconds);
        assert_eq!(expiry.magnitude(), Some(1_700_000_000_250));
    }

    #[test]
    fn test_expiry_before_epoch_encodes_zero() {
        let expiry = Expiry::at(UNIX_EPOCH - Duration::from_secs(5));
        assert_eq!(expiry.kind(), ExpiryKind::UnixSeconds);
        assert_eq!(expiry.magnitude(), Some(0));
    }

    #[test]
    fn test_unix_factories() {
        assert_eq!(Expiry::unix_seconds(42).magnitude(), Some(42));
        assert_eq!(Expiry::unix_milliseconds(42_001).magnitude(), Some(42_001));
        assert_eq!(Expiry::persist().magnitude(), None);
    }

    #[test]
    fn test_timed_kinds_at_u64_max() {
        let max = u64::MAX.to_string();
        let cases = [
            (Expiry::seconds(u64::MAX), "EX"),
            (Expiry::milliseconds(u64::MAX), "PX"),
            (Expiry::unix_seconds(u64::MAX), "EXAT"),
            (Expiry::unix_milliseconds(u64::MAX), "PXAT"),
        ];
        for (expiry, keyword) in cases {
            let args = SetOptions::new().with_expiry(expiry).to_args().unwrap();
            assert_eq!(args, vec![keyword, max.as_str()]);
        }
    }

    #[test]
    fn test_millisecond_overflow_saturates() {
        let duration = Duration::new(u64::MAX, 1_000_000);
        let expiry = Expiry::in_duration(duration);
        assert_eq!(expiry, Expiry::milliseconds(u64::MAX));
    }

    #[test]
    fn test_far_timestamp_saturates_millis() {
        let seconds = 20_000_000_000_000_000;
        let Some(timestamp) = UNIX_EPOCH.checked_add(Duration::new(seconds, 5_000_000)) else {
            return;
        };
        let expiry = Expiry::at(timestamp);
        assert_eq!(expiry.kind(), ExpiryKind::UnixMilliseconds);
        assert_eq!(expiry.magnitude(), Some(u64::MAX));

        let Some(timestamp) = UNIX_EPOCH.checked_add(Duration::from_secs(seconds)) else {
            return;
        };
        assert_eq!(Expiry::at(timestamp), Expiry::unix_seconds(seconds));
    }

    #[test]
    fn test_set_options_empty() {
        assert!(SetOptions::new().to_args().unwrap().is_empty());
    }

    #[test]
    fn test_set_options_full_order() {
        let options = SetOptions::new()
            .only_if_equals("old")
            .with_return_old_value(true)
            .with_expiry(Expiry::seconds(60));
        assert_eq!(
            options.to_args().unwrap(),
            vec!["IFEQ", "old", "GET", "EX", "60"]
        );
    }

    #[test]
    fn test_set_condition_clears_comparison_value() {
        let options = SetOptions::new().only_if_equals("old").only_if_exists();
        assert_eq!(options.comparison_value(), None);
        assert_eq!(options.to_args().unwrap(), vec!["XX"]);
    }

    #[test]
    fn test_set_keep_ttl() {
        let options = SetOptions::new()
            .only_if_does_not_exist()
            .with_expiry(Expiry::keep_existing());
        assert_eq!(options.to_args().unwrap(), vec!["NX", "KEEPTTL"]);
    }

    #[test]
    fn test_set_rejects_persist() {
        let options = SetOptions::new().with_expiry(Expiry::persist());
        let error = options.to_args().unwrap_err();
        assert_eq!(error.to_string(), "invalid expiry type: PERSIST");
    }

    #[test]
    fn test_getex_options() {
        assert!(GetExOptions::new().to_args().unwrap().is_empty());
        assert_eq!(
            GetExOptions::new()
                .with_expiry(Expiry::unix_milliseconds(1_000))
                .to_args()
                .unwrap(),
            vec!["PXAT", "1000"]
        );
        assert_eq!(
            GetExOptions::new()
                .with_expiry(Expiry::persist())
                .to_args()
                .unwrap(),
            vec!["PERSIST"]
        );
    }

    #[test]
    fn test_getex_rejects_keep_ttl() {
        let options = GetExOptions::new().with_expiry(Expiry::keep_existing());
        assert_eq!(
            options.to_args(),
            Err(ArgsError::invalid_tag("expiry", "KEEPTTL"))
        );
    }
}
