//! Integration tests for command option serialization
//!
//! These tests check the exact token sequences produced for each option type,
//! as a command dispatcher would append them after the command name and keys.

#![allow(clippy::uninlined_format_args)]

use oxide_args::{
    geo_members_to_args, ArgsError, ConditionalSet, CopyOptions, EvictionKind, Expiry, ExpiryKind,
    FunctionRestorePolicy, GeoAddOptions, GeospatialData, GetExOptions, InfoOptions, InfoSection,
    LPosOptions, OptionValue, RestoreOptions, SetOptions, ToArgs, ZPopOptions,
};
use std::collections::HashMap;
use std::time::{Duration, UNIX_EPOCH};

fn set_command(key: &str, value: &str, options: &SetOptions) -> Result<Vec<String>, ArgsError> {
    let mut args = vec!["SET".to_string(), key.to_string(), value.to_string()];
    options.append_to(&mut args)?;
    Ok(args)
}

#[test]
fn test_set_with_comparison_condition() -> Result<(), ArgsError> {
    let options = SetOptions::new()
        .only_if_equals("expected")
        .with_return_old_value(true)
        .with_expiry(Expiry::milliseconds(1500));

    assert_eq!(
        options.to_args()?,
        vec!["IFEQ", "expected", "GET", "PX", "1500"]
    );
    assert_eq!(options.condition(), Some(ConditionalSet::OnlyIfEquals));
    assert_eq!(options.comparison_value(), Some("expected"));
    Ok(())
}

#[test]
fn test_set_switching_condition_drops_comparison_value() -> Result<(), ArgsError> {
    let options = SetOptions::new()
        .only_if_equals("expected")
        .only_if_does_not_exist()
        .with_return_old_value(true);

    assert_eq!(options.to_args()?, vec!["NX", "GET"]);
    Ok(())
}

#[test]
fn test_set_conditional_set_equals_without_value() -> Result<(), ArgsError> {
    let options = SetOptions::new()
        .only_if_equals("expected")
        .conditional_set(ConditionalSet::OnlyIfEquals);

    assert_eq!(options.to_args()?, vec!["IFEQ", ""]);
    Ok(())
}

#[test]
fn test_set_command_with_base_args() -> Result<(), ArgsError> {
    let options = SetOptions::new().with_expiry(Expiry::seconds(10));
    assert_eq!(
        set_command("session", "abc", &options)?,
        vec!["SET", "session", "abc", "EX", "10"]
    );
    Ok(())
}

#[test]
fn test_expiry_kinds_in_set() -> Result<(), ArgsError> {
    let cases = [
        (Expiry::seconds(5), vec!["EX", "5"]),
        (Expiry::milliseconds(5), vec!["PX", "5"]),
        (
            Expiry::unix_seconds(1_700_000_000),
            vec!["EXAT", "1700000000"],
        ),
        (
            Expiry::unix_milliseconds(1_700_000_000_123),
            vec!["PXAT", "1700000000123"],
        ),
        (Expiry::keep_existing(), vec!["KEEPTTL"]),
        (
            Expiry::in_duration(Duration::from_millis(2_500)),
            vec!["PX", "2500"],
        ),
        (
            Expiry::at(UNIX_EPOCH + Duration::from_secs(60)),
            vec!["EXAT", "60"],
        ),
    ];

    for (expiry, expected) in cases {
        let args = SetOptions::new().with_expiry(expiry).to_args()?;
        assert_eq!(args, expected, "{:?}", expiry);
    }
    Ok(())
}

#[test]
fn test_invalid_expiry_kind_yields_error_and_no_tokens() {
    let set = SetOptions::new()
        .only_if_exists()
        .with_expiry(Expiry::persist());
    let error = set.to_args().unwrap_err();
    assert_eq!(
        error,
        ArgsError::InvalidTag {
            kind: "expiry",
            tag: "PERSIST".to_string(),
        }
    );
    assert_eq!(error.to_string(), "invalid expiry type: PERSIST");

    let mut args = vec!["SET".to_string()];
    assert!(set.append_to(&mut args).is_err());
    assert_eq!(args, vec!["SET"]);
}

#[test]
fn test_getex_expiry() -> Result<(), ArgsError> {
    let relative = GetExOptions::new().with_expiry(Expiry::seconds(30));
    assert_eq!(relative.to_args()?, vec!["EX", "30"]);

    let persist = GetExOptions::new().with_expiry(Expiry::persist());
    assert_eq!(persist.to_args()?, vec!["PERSIST"]);

    let keep = GetExOptions::new().with_expiry(Expiry::keep_existing());
    assert!(keep.to_args().is_err());
    Ok(())
}

#[test]
fn test_expiry_kind_round_trips_through_keyword() -> Result<(), ArgsError> {
    for kind in ExpiryKind::ALL {
        assert_eq!(kind.as_str().parse::<ExpiryKind>()?, *kind);
    }
    assert!("TTL".parse::<ExpiryKind>().is_err());
    Ok(())
}

#[test]
fn test_lpos_options() -> Result<(), ArgsError> {
    let options = LPosOptions::new().with_rank(1).with_max_len(10);
    assert_eq!(options.to_args()?, vec!["RANK", "1", "MAXLEN", "10"]);

    let options = LPosOptions::new().with_count(3);
    assert_eq!(options.to_args()?, vec!["COUNT", "3"]);
    Ok(())
}

#[test]
fn test_restore_and_copy_options() -> Result<(), ArgsError> {
    let restore = RestoreOptions::new()
        .with_replace()
        .with_abs_ttl()
        .with_eviction(EvictionKind::IdleTime, 60);
    assert_eq!(
        restore.to_args()?,
        vec!["REPLACE", "ABSTTL", "IDLETIME", "60"]
    );

    let copy = CopyOptions::new().with_replace().with_destination_db(2);
    assert_eq!(copy.to_args()?, vec!["REPLACE", "DB", "2"]);
    Ok(())
}

#[test]
fn test_zpop_count_forms() -> Result<(), ArgsError> {
    let options = ZPopOptions::new().with_count(5);
    assert_eq!(options.to_args()?, vec!["5"]);
    assert_eq!(options.to_args_with_count_keyword(), vec!["COUNT", "5"]);
    Ok(())
}

#[test]
fn test_geoadd_palermo() -> Result<(), ArgsError> {
    let mut members = HashMap::new();
    members.insert("Palermo".to_string(), GeospatialData::new(38.11, 13.36));

    let mut args = vec!["GEOADD".to_string(), "Sicily".to_string()];
    GeoAddOptions::new()
        .with_conditional_change(ConditionalSet::OnlyIfDoesNotExist)
        .with_changed(true)
        .append_to(&mut args)?;
    args.extend(geo_members_to_args(&members));

    assert_eq!(
        args,
        vec!["GEOADD", "Sicily", "NX", "CH", "13.36", "38.11", "Palermo"]
    );
    assert_eq!(args[4].parse::<f64>().unwrap(), 13.36);
    assert_eq!(args[5].parse::<f64>().unwrap(), 38.11);
    Ok(())
}

#[test]
fn test_info_and_function_restore() -> Result<(), ArgsError> {
    let info = InfoOptions::new().with_sections([InfoSection::Server, InfoSection::Keyspace]);
    assert_eq!(info.to_args()?, vec!["server", "keyspace"]);

    assert_eq!(FunctionRestorePolicy::Replace.to_args()?, vec!["REPLACE"]);
    Ok(())
}

#[test]
fn test_serialize_is_idempotent() -> Result<(), ArgsError> {
    let options = SetOptions::new()
        .only_if_equals("v1")
        .with_expiry(Expiry::unix_seconds(99));
    let value = OptionValue::from(options);
    let first = value.to_args()?;
    let second = value.to_args()?;
    assert_eq!(first, second);
    Ok(())
}
