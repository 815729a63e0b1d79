use treasure_hunt_core::{
    geofence::GeofenceRequest,
    hunt::{Effect, Hint},
};

/// The host side of the game, implemented in Kotlin or Swift. Every method is
/// a request; results come back through `HuntController`.
#[uniffi::export(with_foreign)]
pub trait HostPlatform: Send + Sync {
    fn request_location_permission(&self, background: bool);
    fn check_location_settings(&self, resolve: bool);
    fn resolve_location_settings(&self);
    fn explain_permission_denied(&self);
    fn explain_location_required(&self);
    /// Report the outcome with `request.id` through
    /// `HuntController::on_registration_succeeded` or `on_registration_failed`.
    fn register_region(&self, request: RegionRequest);
    fn deregister_regions(&self);
    fn show_found_notification(&self, index: u32, message: String);
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct RegionRequest {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: f32,
    pub expiration_millis: u64,
    pub initial_trigger_enter: bool,
    /// Bitmask of transition types using the platform's values.
    pub transition_types: u8,
}

impl From<&GeofenceRequest> for RegionRequest {
    fn from(request: &GeofenceRequest) -> Self {
        Self {
            id: request.id.to_string(),
            latitude: request.latitude(),
            longitude: request.longitude(),
            radius_meters: request.radius.as_meters(),
            expiration_millis: u64::try_from(request.expiry.as_millis()).unwrap_or(u64::MAX),
            initial_trigger_enter: request.initial_trigger_enter,
            transition_types: request.transitions.mask(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, uniffi::Enum)]
pub enum HintView {
    Landmark { index: u32, text: String },
    Finished,
}

impl From<Hint> for HintView {
    fn from(hint: Hint) -> Self {
        match hint {
            Hint::Landmark { index, text } => HintView::Landmark {
                index: ffi_index(index),
                text: text.to_string(),
            },
            Hint::Finished => HintView::Finished,
        }
    }
}

pub(crate) fn ffi_index(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}

pub(crate) fn apply(platform: &dyn HostPlatform, effect: Effect) {
    match effect {
        Effect::RequestLocationPermission { background } => {
            platform.request_location_permission(background)
        }
        Effect::CheckLocationSettings { resolve } => platform.check_location_settings(resolve),
        Effect::ResolveLocationSettings => platform.resolve_location_settings(),
        Effect::ExplainPermissionDenied => platform.explain_permission_denied(),
        Effect::ExplainLocationRequired => platform.explain_location_required(),
        Effect::RegisterRegion(request) => platform.register_region(RegionRequest::from(&request)),
        Effect::DeregisterRegions => platform.deregister_regions(),
        Effect::ShowFoundNotification { index, message } => {
            platform.show_found_notification(ffi_index(index), message.to_string())
        }
    }
}
