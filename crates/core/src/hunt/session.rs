use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::{
    config::HuntConfig,
    error::{ConfigError, HuntError, Result},
    geofence::{GeofenceRequest, RegionErrorKind},
    hunt::progress::{Activation, HuntProgress, HuntState},
    landmark::LandmarkRegistry,
};

/// Callbacks delivered by the host platform, one at a time.
#[derive(Clone, Debug, PartialEq)]
pub enum HostEvent {
    /// The game screen came to the foreground. Carries the host's current
    /// location permission check.
    Started { permission_granted: bool },
    PermissionResult { granted: bool },
    SettingsResult { satisfied: bool, resolvable: bool },
    /// The user closed the location settings resolution dialog.
    SettingsResolutionFinished,
    RegionEntered { triggering_ids: Vec<String> },
    RegionError { code: i32 },
    /// The found notification for landmark `index` was opened. The index is
    /// only compared with progress for logging; the cursor decides what comes
    /// next.
    NotificationOpened { index: usize },
    /// The host confirmed the region registered for landmark `id`.
    RegistrationSucceeded { id: String },
    RegistrationFailed { id: String, reason: String },
    Destroyed,
}

/// Requests the host must carry out, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    RequestLocationPermission { background: bool },
    /// Check device location settings. When `resolve` is set the host may
    /// report the failure as resolvable.
    CheckLocationSettings { resolve: bool },
    ResolveLocationSettings,
    /// Explain why the permission is needed and offer the app settings page.
    ExplainPermissionDenied,
    /// Explain that location must be on. Retrying is reported as `Started`.
    ExplainLocationRequired,
    RegisterRegion(GeofenceRequest),
    DeregisterRegions,
    ShowFoundNotification { index: usize, message: Arc<str> },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Hint {
    Landmark { index: usize, text: Arc<str> },
    Finished,
}

/// One play-through. Created when the game screen is created and dropped
/// when it is destroyed; nothing outlives it.
pub struct HuntSession {
    config: HuntConfig,
    registry: LandmarkRegistry,
    progress: HuntProgress,

    permission_granted: bool,
    settings_satisfied: bool,
    resolution_offered: bool,
    pending_registration: Option<usize>,
    finished: bool,
    ended: bool,
}

impl HuntSession {
    pub fn new(config: HuntConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        let registry = config.registry()?;
        let progress = HuntProgress::new(registry.len());

        info!("starting hunt with {} landmarks", registry.len());

        Ok(Self {
            config,
            registry,
            progress,
            permission_granted: false,
            settings_satisfied: false,
            resolution_offered: false,
            pending_registration: None,
            finished: false,
            ended: false,
        })
    }

    pub fn handle(&mut self, event: HostEvent) -> Vec<Effect> {
        if self.ended {
            debug!("session ended, dropping {event:?}");
            return Vec::new();
        }

        debug!("handling {event:?} while {}", self.progress.state());

        match self.dispatch(event) {
            Ok(effects) => effects,
            Err(
                error @ (HuntError::UnknownTrigger(_)
                | HuntError::NoTriggeringGeofence
                | HuntError::RegionWatchError(_)),
            ) => {
                error!("{error}");
                Vec::new()
            }
            Err(error) => {
                warn!("{error}");
                Vec::new()
            }
        }
    }

    fn dispatch(&mut self, event: HostEvent) -> Result<Vec<Effect>> {
        match event {
            HostEvent::Started { permission_granted } => {
                self.permission_granted = permission_granted;
                Ok(self.start_geofencing())
            }
            HostEvent::PermissionResult { granted } => {
                self.permission_granted = granted;
                if granted {
                    Ok(self.check_settings(true))
                } else {
                    warn!("{}", HuntError::PermissionDenied);
                    Ok(vec![Effect::ExplainPermissionDenied])
                }
            }
            HostEvent::SettingsResult {
                satisfied,
                resolvable,
            } => self.on_settings_result(satisfied, resolvable),
            // Check again, but don't offer the dialog a second time so the
            // user can't get stuck in a loop.
            HostEvent::SettingsResolutionFinished => Ok(self.check_settings(false)),
            HostEvent::RegionEntered { triggering_ids } => self.on_region_entered(&triggering_ids),
            HostEvent::RegionError { code } => {
                Err(HuntError::RegionWatchError(RegionErrorKind::from_code(code)))
            }
            HostEvent::NotificationOpened { index } => {
                info!("notification for landmark {index} opened");
                let last_found = self.progress.cursor().checked_sub(1);
                if last_found != Some(index) {
                    warn!("notification for landmark {index} opened, last found was {last_found:?}");
                }
                Ok(self.start_geofencing())
            }
            HostEvent::RegistrationSucceeded { id } => self.on_registration_succeeded(&id),
            HostEvent::RegistrationFailed { id, reason } => {
                match self.take_pending(&id) {
                    Some(index) => warn!("failed to add geofence for landmark {index}: {reason}"),
                    None => warn!("registration of {id} failed, but it is not pending: {reason}"),
                }
                Ok(Vec::new())
            }
            HostEvent::Destroyed => {
                info!("session destroyed, removing geofences");
                self.ended = true;
                self.pending_registration = None;
                Ok(vec![Effect::DeregisterRegions])
            }
        }
    }

    /// Starts the permission and settings gate unless the current landmark is
    /// already being watched.
    fn start_geofencing(&mut self) -> Vec<Effect> {
        if self.is_busy() {
            return Vec::new();
        }

        if self.permission_granted {
            self.check_settings(true)
        } else {
            vec![Effect::RequestLocationPermission {
                background: self.config.require_background_location,
            }]
        }
    }

    fn check_settings(&mut self, resolve: bool) -> Vec<Effect> {
        self.resolution_offered = resolve;
        vec![Effect::CheckLocationSettings { resolve }]
    }

    fn on_settings_result(&mut self, satisfied: bool, resolvable: bool) -> Result<Vec<Effect>> {
        self.settings_satisfied = satisfied;

        if satisfied {
            return self.register_next();
        }

        if resolvable && self.resolution_offered {
            self.resolution_offered = false;
            return Ok(vec![Effect::ResolveLocationSettings]);
        }

        warn!("{}", HuntError::SettingsUnsatisfied);
        Ok(vec![Effect::ExplainLocationRequired])
    }

    fn register_next(&mut self) -> Result<Vec<Effect>> {
        if self.is_busy() {
            return Ok(Vec::new());
        }

        let index = self.progress.cursor();
        if let Some(landmark) = self.registry.get(index) {
            let request = GeofenceRequest::for_landmark(landmark, &self.config);
            info!("adding geofence for landmark {index} ({})", landmark.id);
            self.pending_registration = Some(index);

            // Replace whatever the host is still watching.
            return Ok(vec![
                Effect::DeregisterRegions,
                Effect::RegisterRegion(request),
            ]);
        }

        if self.progress.activate_next()? == Activation::HuntComplete {
            info!("hunt complete, removing geofences");
            self.finished = true;
        }
        Ok(vec![Effect::DeregisterRegions])
    }

    /// Clears the pending registration if it is the one for `id`.
    fn take_pending(&mut self, id: &str) -> Option<usize> {
        let index = self.pending_registration?;
        if self.registry.get(index).is_some_and(|landmark| landmark.id == *id) {
            self.pending_registration = None;
            Some(index)
        } else {
            None
        }
    }

    fn on_registration_succeeded(&mut self, id: &str) -> Result<Vec<Effect>> {
        let Some(index) = self.take_pending(id) else {
            debug!("registration of {id} confirmed, but it is not pending");
            return Ok(Vec::new());
        };

        match self.progress.activate_next()? {
            Activation::Activated(active) => info!("geofence for landmark {active} active"),
            Activation::HuntComplete => warn!("registration for landmark {index} after the hunt ended"),
        }
        Ok(Vec::new())
    }

    fn on_region_entered(&mut self, triggering_ids: &[String]) -> Result<Vec<Effect>> {
        info!("geofence entered");

        let trigger = triggering_ids
            .first()
            .ok_or(HuntError::NoTriggeringGeofence)?;
        let index = self
            .registry
            .resolve(trigger)
            .ok_or_else(|| HuntError::UnknownTrigger(trigger.as_str().into()))?;
        let message = self
            .registry
            .get(index)
            .map(|landmark| Arc::clone(&landmark.found_message))
            .unwrap_or_default();

        // The platform may report the initial enter before confirming the
        // registration.
        if self.pending_registration == Some(index) {
            self.pending_registration = None;
            self.progress.activate_next()?;
        }

        if self.progress.state() == HuntState::Active(index) {
            self.progress.on_entered()?;
            info!("landmark {index} found");
        } else {
            debug!("entered landmark {index}, which is not being watched");
        }

        Ok(vec![Effect::ShowFoundNotification { index, message }])
    }

    fn is_busy(&self) -> bool {
        self.finished || self.progress.is_active() || self.pending_registration.is_some()
    }

    pub fn current_hint(&self) -> Hint {
        if self.finished {
            return Hint::Finished;
        }

        let index = self.progress.cursor();
        match self.registry.get(index) {
            Some(landmark) => Hint::Landmark {
                index,
                text: Arc::clone(&landmark.hint),
            },
            None => Hint::Finished,
        }
    }

    pub fn is_active(&self) -> bool {
        self.progress.is_active()
    }

    pub fn is_complete(&self) -> bool {
        self.finished
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn settings_satisfied(&self) -> bool {
        self.settings_satisfied
    }

    pub fn progress(&self) -> &HuntProgress {
        &self.progress
    }

    pub fn registry(&self) -> &LandmarkRegistry {
        &self.registry
    }

    pub fn config(&self) -> &HuntConfig {
        &self.config
    }
}
