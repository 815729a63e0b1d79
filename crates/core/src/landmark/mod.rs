//! Landmarks: the named checkpoints a hunt walks through in order.

use std::sync::Arc;

use crate::identifiers::LandmarkIdentifier;

pub mod registry;

pub use registry::LandmarkRegistry;

#[derive(Clone, Debug, PartialEq)]
pub struct LandmarkRecord {
    pub id: LandmarkIdentifier,
    /// x = longitude, y = latitude
    pub position: geo::Point,
    /// Shown while this landmark is the current target.
    pub hint: Arc<str>,
    /// Copy for the notification posted when the landmark is found.
    pub found_message: Arc<str>,
}

impl LandmarkRecord {
    pub fn new(id: impl Into<LandmarkIdentifier>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            position: geo::Point::new(longitude, latitude),
            hint: "".into(),
            found_message: "".into(),
        }
    }

    pub fn with_hint(mut self, hint: impl AsRef<str>) -> Self {
        self.hint = hint.as_ref().into();
        self
    }

    pub fn with_found_message(mut self, message: impl AsRef<str>) -> Self {
        self.found_message = message.as_ref().into();
        self
    }

    pub fn latitude(&self) -> f64 {
        self.position.y()
    }

    pub fn longitude(&self) -> f64 {
        self.position.x()
    }

    pub fn has_valid_coordinates(&self) -> bool {
        let (latitude, longitude) = (self.latitude(), self.longitude());
        (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude)
    }
}
