use std::fmt;

use crate::error::{HuntError, Result};

/// Where the hunt stands. The index is the hunt progress cursor: the next
/// landmark to activate while idle, the watched landmark while active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HuntState {
    Idle(usize),
    Active(usize),
}

impl fmt::Display for HuntState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HuntState::Idle(index) => write!(f, "idle at landmark {index}"),
            HuntState::Active(index) => write!(f, "watching landmark {index}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    Activated(usize),
    HuntComplete,
}

/// Tracks progress through a registry of `landmark_count` landmarks.
///
/// The cursor only moves forward. A landmark can be activated once: after
/// `on_entered` the tracker is idle at the next index, so the same geofence is
/// never registered twice.
#[derive(Clone, Debug)]
pub struct HuntProgress {
    state: HuntState,
    landmark_count: usize,
}

impl HuntProgress {
    pub fn new(landmark_count: usize) -> Self {
        Self {
            state: HuntState::Idle(0),
            landmark_count,
        }
    }

    pub fn state(&self) -> HuntState {
        self.state
    }

    pub fn cursor(&self) -> usize {
        match self.state {
            HuntState::Idle(index) | HuntState::Active(index) => index,
        }
    }

    pub fn landmark_count(&self) -> usize {
        self.landmark_count
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, HuntState::Active(_))
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.state, HuntState::Idle(index) if index >= self.landmark_count)
    }

    pub fn activate_next(&mut self) -> Result<Activation> {
        match self.state {
            HuntState::Idle(index) if index >= self.landmark_count => Ok(Activation::HuntComplete),
            HuntState::Idle(index) => {
                self.state = HuntState::Active(index);
                Ok(Activation::Activated(index))
            }
            state @ HuntState::Active(_) => Err(HuntError::InvalidTransition {
                operation: "activate_next",
                state,
            }),
        }
    }

    /// Returns the index of the landmark that was just reached.
    pub fn on_entered(&mut self) -> Result<usize> {
        match self.state {
            HuntState::Active(index) => {
                self.state = HuntState::Idle(index + 1);
                Ok(index)
            }
            state @ HuntState::Idle(_) => Err(HuntError::InvalidTransition {
                operation: "on_entered",
                state,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle_at_zero() {
        let progress = HuntProgress::new(3);
        assert_eq!(progress.state(), HuntState::Idle(0));
        assert!(!progress.is_active());
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_full_walkthrough() {
        let mut progress = HuntProgress::new(3);

        for index in 0..3 {
            assert_eq!(progress.activate_next().unwrap(), Activation::Activated(index));
            assert_eq!(progress.state(), HuntState::Active(index));
            assert!(progress.is_active());

            assert_eq!(progress.on_entered().unwrap(), index);
            assert_eq!(progress.state(), HuntState::Idle(index + 1));
            assert!(!progress.is_active());
        }

        assert_eq!(progress.activate_next().unwrap(), Activation::HuntComplete);
        assert_eq!(progress.state(), HuntState::Idle(3));
        assert!(progress.is_complete());

        // Completion is terminal and repeatable.
        assert_eq!(progress.activate_next().unwrap(), Activation::HuntComplete);
        assert_eq!(progress.state(), HuntState::Idle(3));
    }

    #[test]
    fn test_double_enter_is_rejected() {
        let mut progress = HuntProgress::new(3);
        progress.activate_next().unwrap();
        progress.on_entered().unwrap();

        let err = progress.on_entered().unwrap_err();
        assert!(matches!(
            err,
            HuntError::InvalidTransition {
                operation: "on_entered",
                state: HuntState::Idle(1)
            }
        ));
        assert_eq!(progress.state(), HuntState::Idle(1));
    }

    #[test]
    fn test_double_activate_is_rejected() {
        let mut progress = HuntProgress::new(3);
        progress.activate_next().unwrap();

        assert!(progress.activate_next().is_err());
        assert_eq!(progress.state(), HuntState::Active(0));
    }

    #[test]
    fn test_enter_before_activate_is_rejected() {
        let mut progress = HuntProgress::new(1);
        assert!(progress.on_entered().is_err());
        assert_eq!(progress.state(), HuntState::Idle(0));
    }

    #[test]
    fn test_empty_hunt_is_complete_immediately() {
        let mut progress = HuntProgress::new(0);
        assert!(progress.is_complete());
        assert_eq!(progress.activate_next().unwrap(), Activation::HuntComplete);
        assert!(!progress.is_active());
    }
}
