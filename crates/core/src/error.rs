use crate::{geofence::RegionErrorKind, hunt::progress::HuntState, identifiers::LandmarkIdentifier};

/// Failures raised while driving a hunt. None of them are fatal: the session
/// logs them and declines to advance.
#[derive(Debug, thiserror::Error)]
pub enum HuntError {
    #[error("Unknown geofence: {0}")]
    UnknownTrigger(LandmarkIdentifier),

    #[error("Geofence event carried no triggering geofence")]
    NoTriggeringGeofence,

    #[error("Region watch error: {0}")]
    RegionWatchError(RegionErrorKind),

    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Location settings not satisfied")]
    SettingsUnsatisfied,

    #[error("{operation} is not valid while {state}")]
    InvalidTransition {
        operation: &'static str,
        state: HuntState,
    },
}

pub type Result<T> = std::result::Result<T, HuntError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse hunt config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("hunt config contains no landmarks")]
    NoLandmarks,

    #[error("landmark at position {0} has an empty id")]
    EmptyLandmarkId(usize),

    #[error("duplicate landmark id: {0}")]
    DuplicateLandmark(LandmarkIdentifier),

    #[error("landmark {id} has out of range coordinates ({latitude}, {longitude})")]
    CoordinateOutOfRange {
        id: LandmarkIdentifier,
        latitude: f64,
        longitude: f64,
    },

    #[error("geofence radius must be positive, got {0}m")]
    InvalidRadius(f64),
}
