//! Monitored-region requests handed to the host geofencing service.

use std::time::Duration;

use crate::{config::HuntConfig, identifiers::LandmarkIdentifier, landmark::LandmarkRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Centimeters(pub i32);

impl Centimeters {
    pub fn as_meters(&self) -> f32 {
        self.0 as f32 / 100.0
    }

    pub fn from_meters(m: f32) -> Self {
        Centimeters((m * 100.0) as i32)
    }
}

/// Geofence transition types, using the platform's bit values. Only entry
/// is ever watched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Transition {
    Enter = 1,
}

impl Transition {
    pub fn mask(&self) -> u8 {
        *self as u8
    }
}

/// A "register monitored region" request for exactly one landmark.
#[derive(Clone, Debug, PartialEq)]
pub struct GeofenceRequest {
    pub id: LandmarkIdentifier,
    pub center: geo::Point,
    pub radius: Centimeters,
    /// The host drops the region on its own once this elapses.
    pub expiry: Duration,
    /// Fire an enter transition immediately if the device is already inside.
    pub initial_trigger_enter: bool,
    pub transitions: Transition,
}

impl GeofenceRequest {
    pub fn for_landmark(landmark: &LandmarkRecord, config: &HuntConfig) -> Self {
        Self {
            id: landmark.id.clone(),
            center: landmark.position,
            radius: config.geofence_radius(),
            expiry: config.geofence_expiration(),
            initial_trigger_enter: true,
            transitions: Transition::Enter,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.center.y()
    }

    pub fn longitude(&self) -> f64 {
        self.center.x()
    }
}

/// Decoded form of the opaque error code a region watch reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum RegionErrorKind {
    #[strum(to_string = "Geofence service is not available now")]
    NotAvailable,
    #[strum(to_string = "Your app has registered too many geofences")]
    TooManyGeofences,
    #[strum(to_string = "You have provided too many PendingIntents to the addGeofences() call")]
    TooManyPendingIntents,
    #[strum(to_string = "Unknown geofence error")]
    Unknown(i32),
}

impl RegionErrorKind {
    pub const GEOFENCE_NOT_AVAILABLE: i32 = 1000;
    pub const GEOFENCE_TOO_MANY_GEOFENCES: i32 = 1001;
    pub const GEOFENCE_TOO_MANY_PENDING_INTENTS: i32 = 1002;

    pub fn from_code(code: i32) -> Self {
        match code {
            Self::GEOFENCE_NOT_AVAILABLE => Self::NotAvailable,
            Self::GEOFENCE_TOO_MANY_GEOFENCES => Self::TooManyGeofences,
            Self::GEOFENCE_TOO_MANY_PENDING_INTENTS => Self::TooManyPendingIntents,
            other => Self::Unknown(other),
        }
    }
}
