//! # treasure-hunt-core
//!
//! Game logic for a geofence-driven treasure hunt. The player is given a hint
//! for one landmark at a time; entering that landmark's geofence reveals it
//! and moves the hunt on to the next hint.
//!
//! The host platform owns geofencing, notifications and permission prompts.
//! This crate only decides what to ask for: a [`HuntSession`] takes one
//! [`HostEvent`] at a time and answers with the [`Effect`]s to carry out.
//!
//! ## Example
//!
//! ```
//! use treasure_hunt_core::prelude::*;
//!
//! let mut session = HuntSession::new(HuntConfig::default()).unwrap();
//!
//! let effects = session.handle(HostEvent::Started { permission_granted: true });
//! assert_eq!(effects, vec![Effect::CheckLocationSettings { resolve: true }]);
//!
//! let effects = session.handle(HostEvent::SettingsResult { satisfied: true, resolvable: false });
//! assert!(matches!(&effects[1], Effect::RegisterRegion(request) if request.id.as_str() == "golden_gate_bridge"));
//!
//! session.handle(HostEvent::RegistrationSucceeded { id: "golden_gate_bridge".into() });
//! session.handle(HostEvent::RegionEntered { triggering_ids: vec!["golden_gate_bridge".into()] });
//! assert_eq!(session.progress().state(), HuntState::Idle(1));
//! ```

pub mod config;
pub mod error;
pub mod geofence;
pub mod hunt;
pub mod identifiers;
pub mod landmark;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::{HuntConfig, LandmarkEntry};
    pub use crate::error::{ConfigError, HuntError};
    pub use crate::geofence::{Centimeters, GeofenceRequest, RegionErrorKind, Transition};
    pub use crate::hunt::{Activation, Effect, Hint, HostEvent, HuntProgress, HuntSession, HuntState};
    pub use crate::identifiers::*;
    pub use crate::landmark::{LandmarkRecord, LandmarkRegistry};
}

pub use prelude::*;
