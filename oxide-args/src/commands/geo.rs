//! Options and member encoding for `GEOADD`

use super::ToArgs;
use oxide_args_core::{float_to_token, ArgsResult, ConditionalSet, Keyword};
use std::collections::HashMap;
use tracing::debug;

/// A position on the earth.
///
/// The server accepts longitudes in -180..=180 and latitudes in
/// -85.05112878..=85.05112878.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeospatialData {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl GeospatialData {
    /// Create a position from latitude and longitude
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Flatten members into repeating `longitude latitude member` triples.
///
/// Triples follow the map's iteration order, which is unspecified.
#[must_use]
pub fn geo_members_to_args<S>(members: &HashMap<String, GeospatialData, S>) -> Vec<String> {
    let mut args = Vec::with_capacity(members.len() * 3);
    for (member, position) in members {
        args.push(float_to_token(position.longitude));
        args.push(float_to_token(position.latitude));
        args.push(member.clone());
    }
    args
}

/// Optional arguments for `GEOADD`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeoAddOptions {
    conditional_change: Option<ConditionalSet>,
    changed: bool,
}

impl GeoAddOptions {
    /// Create empty options; serializes to no tokens
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only update existing members (`XX`) or only add new ones (`NX`).
    ///
    /// `GEOADD` has no value comparison, so `OnlyIfEquals` contributes nothing.
    #[must_use]
    pub const fn with_conditional_change(mut self, condition: ConditionalSet) -> Self {
        self.conditional_change = Some(condition);
        self
    }

    /// Return the number of changed members instead of added ones (`CH`)
    #[must_use]
    pub const fn with_changed(mut self, changed: bool) -> Self {
        self.changed = changed;
        self
    }
}

impl ToArgs for GeoAddOptions {
    fn to_args(&self) -> ArgsResult<Vec<String>> {
        let mut args = Vec::new();

        match self.conditional_change {
            Some(condition @ ConditionalSet::OnlyIfEquals) => {
                debug!(%condition, "condition dropped by GEOADD");
            }
            Some(condition) => args.push(condition.as_str().to_string()),
            None => {}
        }

        if self.changed {
            args.push(Keyword::Changed.token());
        }

        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_member_order() {
        let palermo = GeospatialData::new(38.11, 13.36);
        let members = HashMap::from([("Palermo".to_string(), palermo)]);
        assert_eq!(
            geo_members_to_args(&members),
            vec!["13.36", "38.11", "Palermo"]
        );
    }

    #[test]
    fn test_members_are_triples() {
        let members = HashMap::from([
            (
                "Palermo".to_string(),
                GeospatialData::new(38.115_556_395_496_3, 13.361_389_338_970_184),
            ),
            (
                "Catania".to_string(),
                GeospatialData::new(37.502_669_286_077_7, 15.087_267_458_438_873),
            ),
        ]);
        let args = geo_members_to_args(&members);
        assert_eq!(args.len(), 6);
        for triple in args.chunks(3) {
            let position = &members[&triple[2]];
            assert_eq!(triple[0].parse::<f64>().unwrap(), position.longitude);
            assert_eq!(triple[1].parse::<f64>().unwrap(), position.latitude);
        }
    }

    #[test]
    fn test_geoadd_options() {
        let options = GeoAddOptions::new()
            .with_changed(true)
            .with_conditional_change(ConditionalSet::OnlyIfExists);
        assert_eq!(options.to_args().unwrap(), vec!["XX", "CH"]);
    }

    #[test]
    fn test_geoadd_ignores_value_comparison() {
        let options = GeoAddOptions::new().with_conditional_change(ConditionalSet::OnlyIfEquals);
        assert!(options.to_args().unwrap().is_empty());
        assert_eq!(options.with_changed(true).to_args().unwrap(), vec!["CH"]);
    }
}
