use std::collections::HashSet;

use tracing::debug;

use crate::{error::ConfigError, landmark::LandmarkRecord};

/// The ordered, fixed landmark table. Order defines the hunt sequence and ids
/// are unique.
#[derive(Clone, Debug)]
pub struct LandmarkRegistry {
    landmarks: Vec<LandmarkRecord>,
}

impl LandmarkRegistry {
    pub fn new(landmarks: Vec<LandmarkRecord>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::with_capacity(landmarks.len());

        for (position, landmark) in landmarks.iter().enumerate() {
            if landmark.id.as_str().is_empty() {
                return Err(ConfigError::EmptyLandmarkId(position));
            }

            if !landmark.has_valid_coordinates() {
                return Err(ConfigError::CoordinateOutOfRange {
                    id: landmark.id.clone(),
                    latitude: landmark.latitude(),
                    longitude: landmark.longitude(),
                });
            }

            if !seen.insert(&landmark.id) {
                return Err(ConfigError::DuplicateLandmark(landmark.id.clone()));
            }
        }

        debug!("landmark registry holds {} landmarks", landmarks.len());

        Ok(Self { landmarks })
    }

    /// Position of the landmark whose id equals `trigger`.
    ///
    /// This is a linear scan. Hunts hold a handful of landmarks, so a lookup
    /// table would buy nothing.
    pub fn resolve(&self, trigger: &str) -> Option<usize> {
        self.landmarks
            .iter()
            .position(|landmark| landmark.id == *trigger)
    }

    pub fn get(&self, index: usize) -> Option<&LandmarkRecord> {
        self.landmarks.get(index)
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LandmarkRecord> {
        self.landmarks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> LandmarkRegistry {
        LandmarkRegistry::new(vec![
            LandmarkRecord::new("A", 0.0, 0.0),
            LandmarkRecord::new("B", 1.0, 1.0),
            LandmarkRecord::new("C", 2.0, 2.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_resolve_known_ids() {
        let registry = abc();
        assert_eq!(registry.resolve("A"), Some(0));
        assert_eq!(registry.resolve("B"), Some(1));
        assert_eq!(registry.resolve("C"), Some(2));
    }

    #[test]
    fn test_resolve_unknown_id() {
        let registry = abc();
        assert_eq!(registry.resolve("Z"), None);
        assert_eq!(registry.resolve(""), None);
        assert_eq!(registry.resolve("a"), None);
    }

    #[test]
    fn test_resolve_matches_position_at_any_size() {
        for size in 1..40 {
            let registry = LandmarkRegistry::new(
                (0..size)
                    .map(|i| LandmarkRecord::new(format!("landmark_{i}"), 0.0, 0.0))
                    .collect(),
            )
            .unwrap();

            for i in 0..size {
                let id = format!("landmark_{i}");
                assert_eq!(registry.resolve(&id), Some(i));
                assert_eq!(registry.get(i).unwrap().id.as_str(), id);
            }
            assert_eq!(registry.resolve(&format!("landmark_{size}")), None);
        }
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = LandmarkRegistry::new(vec![
            LandmarkRecord::new("A", 0.0, 0.0),
            LandmarkRecord::new("A", 1.0, 1.0),
        ]);
        assert!(matches!(result, Err(ConfigError::DuplicateLandmark(id)) if id.as_str() == "A"));
    }

    #[test]
    fn test_rejects_empty_id() {
        let result = LandmarkRegistry::new(vec![
            LandmarkRecord::new("A", 0.0, 0.0),
            LandmarkRecord::new("", 1.0, 1.0),
        ]);
        assert!(matches!(result, Err(ConfigError::EmptyLandmarkId(1))));
    }

    #[test]
    fn test_rejects_out_of_range_coordinates() {
        let result = LandmarkRegistry::new(vec![LandmarkRecord::new("far", 120.0, 0.0)]);
        assert!(matches!(result, Err(ConfigError::CoordinateOutOfRange { .. })));
    }

    #[test]
    fn test_empty_registry() {
        let registry = LandmarkRegistry::new(vec![]).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.resolve("A"), None);
    }
}
