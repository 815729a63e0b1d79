//! Hunt configuration: geofence parameters and the landmark table.
//!
//! The table is usually compiled from KML by `landmark-kml-parser` and
//! shipped with the app as JSON. Every field has a default, so an empty JSON
//! object yields the built-in San Francisco hunt.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    error::ConfigError,
    geofence::Centimeters,
    identifiers::LandmarkIdentifier,
    landmark::{LandmarkRecord, LandmarkRegistry},
};

pub const GEOFENCE_RADIUS_IN_METERS: f64 = 100.0;
pub const GEOFENCE_EXPIRATION_IN_SECONDS: u64 = 60 * 60;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HuntConfig {
    pub geofence_radius_meters: f64,
    pub geofence_expiration_secs: u64,
    /// Background location is needed for geofences on Android 10 and later.
    pub require_background_location: bool,
    pub landmarks: Vec<LandmarkEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LandmarkEntry {
    pub id: LandmarkIdentifier,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hint: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub found_message: String,
}

impl From<&LandmarkEntry> for LandmarkRecord {
    fn from(entry: &LandmarkEntry) -> Self {
        LandmarkRecord::new(entry.id.clone(), entry.latitude, entry.longitude)
            .with_hint(&entry.hint)
            .with_found_message(&entry.found_message)
    }
}

impl Default for HuntConfig {
    fn default() -> Self {
        Self {
            geofence_radius_meters: GEOFENCE_RADIUS_IN_METERS,
            geofence_expiration_secs: GEOFENCE_EXPIRATION_IN_SECONDS,
            require_background_location: true,
            landmarks: default_landmarks(),
        }
    }
}

impl HuntConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: HuntConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.geofence_radius_meters > 0.0 && self.geofence_radius_meters.is_finite()) {
            return Err(ConfigError::InvalidRadius(self.geofence_radius_meters));
        }
        if self.landmarks.is_empty() {
            return Err(ConfigError::NoLandmarks);
        }
        self.registry().map(|_| ())
    }

    /// Builds the ordered registry, checking ids and coordinates.
    pub fn registry(&self) -> Result<LandmarkRegistry, ConfigError> {
        LandmarkRegistry::new(self.landmarks.iter().map(LandmarkRecord::from).collect())
    }

    pub fn geofence_radius(&self) -> Centimeters {
        Centimeters::from_meters(self.geofence_radius_meters as f32)
    }

    pub fn geofence_expiration(&self) -> Duration {
        Duration::from_secs(self.geofence_expiration_secs)
    }
}

fn landmark(id: &str, latitude: f64, longitude: f64, hint: &str, found: &str) -> LandmarkEntry {
    LandmarkEntry {
        id: LandmarkIdentifier::new(id),
        latitude,
        longitude,
        hint: hint.to_owned(),
        found_message: found.to_owned(),
    }
}

fn default_landmarks() -> Vec<LandmarkEntry> {
    vec![
        landmark(
            "golden_gate_bridge",
            37.819927,
            -122.478256,
            "Find the orange span that greets ships at the mouth of the bay.",
            "You found the Golden Gate Bridge!",
        ),
        landmark(
            "ferry_building",
            37.795490,
            -122.394276,
            "Look for the clock tower where the commuter boats dock.",
            "You found the Ferry Building!",
        ),
        landmark(
            "pier_39",
            37.808674,
            -122.409821,
            "Sea lions bark on the docks of this waterfront pier.",
            "You found Pier 39!",
        ),
        landmark(
            "union_square",
            37.788151,
            -122.407570,
            "Finish at the plaza ringed by the city's big department stores.",
            "You found Union Square!",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = HuntConfig::default();
        config.validate().unwrap();

        let registry = config.registry().unwrap();
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.resolve("golden_gate_bridge"), Some(0));
        assert_eq!(registry.resolve("union_square"), Some(3));
        assert_eq!(config.geofence_radius(), Centimeters(10_000));
        assert_eq!(config.geofence_expiration(), Duration::from_secs(3600));
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = HuntConfig::from_json_str("{}").unwrap();
        assert_eq!(config, HuntConfig::default());
    }

    #[test]
    fn test_parse_custom_table() {
        let config = HuntConfig::from_json_str(
            r#"{
                "geofence_radius_meters": 50.0,
                "require_background_location": false,
                "landmarks": [
                    { "id": "A", "latitude": 1.0, "longitude": 2.0, "hint": "first" },
                    { "id": "B", "latitude": 3.0, "longitude": 4.0 }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.geofence_radius(), Centimeters(5_000));
        assert_eq!(config.geofence_expiration_secs, GEOFENCE_EXPIRATION_IN_SECONDS);
        assert!(!config.require_background_location);

        let registry = config.registry().unwrap();
        assert_eq!(&*registry.get(0).unwrap().hint, "first");
        assert_eq!(&*registry.get(1).unwrap().hint, "");
        assert_eq!(registry.get(1).unwrap().latitude(), 3.0);
    }

    #[test]
    fn test_rejects_bad_tables() {
        assert!(matches!(
            HuntConfig::from_json_str(r#"{ "landmarks": [] }"#),
            Err(ConfigError::NoLandmarks)
        ));
        assert!(matches!(
            HuntConfig::from_json_str(
                r#"{ "landmarks": [
                    { "id": "A", "latitude": 1.0, "longitude": 2.0 },
                    { "id": "A", "latitude": 3.0, "longitude": 4.0 }
                ] }"#
            ),
            Err(ConfigError::DuplicateLandmark(_))
        ));
        assert!(matches!(
            HuntConfig::from_json_str(
                r#"{ "landmarks": [ { "id": "A", "latitude": 91.0, "longitude": 2.0 } ] }"#
            ),
            Err(ConfigError::CoordinateOutOfRange { .. })
        ));
        assert!(matches!(
            HuntConfig::from_json_str(
                r#"{ "landmarks": [ { "id": "", "latitude": 1.0, "longitude": 2.0 } ] }"#
            ),
            Err(ConfigError::EmptyLandmarkId(0))
        ));
        assert!(matches!(
            HuntConfig::from_json_str(r#"{ "geofence_radius_meters": 0.0 }"#),
            Err(ConfigError::InvalidRadius(_))
        ));
        assert!(matches!(
            HuntConfig::from_json_str("not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
