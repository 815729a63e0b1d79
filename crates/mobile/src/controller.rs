use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use treasure_hunt_core::{
    config::HuntConfig,
    hunt::{HostEvent, HuntSession},
};

use crate::platform::{self, HintView, HostPlatform, ffi_index};

#[derive(Debug, thiserror::Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum ControllerError {
    #[error("{0}")]
    Config(String),
}

/// Owns one hunt session for the lifetime of the game screen and forwards
/// host callbacks into it. Effects are handed to the platform in order, after
/// the session lock is released, so the host may call back in right away.
#[derive(uniffi::Object)]
pub struct HuntController {
    platform: Arc<dyn HostPlatform>,
    session: Mutex<HuntSession>,
}

#[uniffi::export]
impl HuntController {
    /// `config_json` replaces the built-in landmark table when given.
    #[uniffi::constructor]
    pub fn new(
        platform: Arc<dyn HostPlatform>,
        config_json: Option<String>,
    ) -> Result<Self, ControllerError> {
        crate::logging::init_logging();

        let config = match config_json {
            Some(json) => HuntConfig::from_json_str(&json)
                .map_err(|e| ControllerError::Config(e.to_string()))?,
            None => HuntConfig::default(),
        };
        let session =
            HuntSession::new(config).map_err(|e| ControllerError::Config(e.to_string()))?;

        Ok(Self {
            platform,
            session: Mutex::new(session),
        })
    }

    pub fn on_start(&self, permission_granted: bool) {
        self.deliver(HostEvent::Started { permission_granted });
    }

    pub fn on_permission_result(&self, granted: bool) {
        self.deliver(HostEvent::PermissionResult { granted });
    }

    pub fn on_settings_result(&self, satisfied: bool, resolvable: bool) {
        self.deliver(HostEvent::SettingsResult {
            satisfied,
            resolvable,
        });
    }

    pub fn on_settings_resolution_finished(&self) {
        self.deliver(HostEvent::SettingsResolutionFinished);
    }

    pub fn on_region_entered(&self, triggering_ids: Vec<String>) {
        self.deliver(HostEvent::RegionEntered { triggering_ids });
    }

    pub fn on_region_error(&self, code: i32) {
        self.deliver(HostEvent::RegionError { code });
    }

    pub fn on_notification_opened(&self, index: u32) {
        self.deliver(HostEvent::NotificationOpened {
            index: index as usize,
        });
    }

    /// `id` is the `RegionRequest::id` the outcome belongs to.
    pub fn on_registration_succeeded(&self, id: String) {
        self.deliver(HostEvent::RegistrationSucceeded { id });
    }

    pub fn on_registration_failed(&self, id: String, reason: String) {
        self.deliver(HostEvent::RegistrationFailed { id, reason });
    }

    pub fn on_destroy(&self) {
        self.deliver(HostEvent::Destroyed);
    }

    pub fn current_hint(&self) -> HintView {
        self.session().current_hint().into()
    }

    pub fn is_active(&self) -> bool {
        self.session().is_active()
    }

    pub fn is_complete(&self) -> bool {
        self.session().is_complete()
    }

    /// Index of the next landmark to find.
    pub fn progress(&self) -> u32 {
        ffi_index(self.session().progress().cursor())
    }

    pub fn landmark_count(&self) -> u32 {
        ffi_index(self.session().registry().len())
    }
}

impl HuntController {
    fn session(&self) -> MutexGuard<'_, HuntSession> {
        // The session never panics mid-update; keep going with its state.
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn deliver(&self, event: HostEvent) {
        let effects = self.session().handle(event);
        for effect in effects {
            platform::apply(self.platform.as_ref(), effect);
        }
    }
}
