//! End-to-end walk through a three landmark hunt using only the public API.

use treasure_hunt_core::prelude::*;

fn abc_registry() -> LandmarkRegistry {
    LandmarkRegistry::new(vec![
        LandmarkRecord::new("A", 37.0, -122.0),
        LandmarkRecord::new("B", 37.1, -122.1),
        LandmarkRecord::new("C", 37.2, -122.2),
    ])
    .expect("registry should be valid")
}

#[test]
fn test_progress_walkthrough() {
    let registry = abc_registry();
    let mut progress = HuntProgress::new(registry.len());

    assert_eq!(progress.state(), HuntState::Idle(0));
    for index in 0..registry.len() {
        assert_eq!(progress.activate_next().unwrap(), Activation::Activated(index));
        assert!(progress.is_active());
        assert_eq!(progress.on_entered().unwrap(), index);
        assert!(!progress.is_active());
        assert_eq!(progress.state(), HuntState::Idle(index + 1));
    }

    assert_eq!(progress.activate_next().unwrap(), Activation::HuntComplete);
    assert_eq!(progress.state(), HuntState::Idle(3));
}

#[test]
fn test_resolution_against_registry() {
    let registry = abc_registry();

    assert_eq!(registry.resolve("A"), Some(0));
    assert_eq!(registry.resolve("C"), Some(2));
    assert_eq!(registry.resolve("Z"), None);
}

#[test]
fn test_session_from_json_table() {
    let config = HuntConfig::from_json_str(
        r#"{
            "geofence_radius_meters": 75.0,
            "geofence_expiration_secs": 600,
            "require_background_location": false,
            "landmarks": [
                { "id": "A", "latitude": 37.0, "longitude": -122.0, "found_message": "A!" },
                { "id": "B", "latitude": 37.1, "longitude": -122.1, "found_message": "B!" }
            ]
        }"#,
    )
    .unwrap();
    let mut session = HuntSession::new(config).unwrap();

    for id in ["A", "B"] {
        session.handle(HostEvent::Started {
            permission_granted: true,
        });
        let effects = session.handle(HostEvent::SettingsResult {
            satisfied: true,
            resolvable: false,
        });

        let Some(Effect::RegisterRegion(request)) = effects.last() else {
            panic!("expected a registration, got {effects:?}");
        };
        assert_eq!(request.id.as_str(), id);
        assert_eq!(request.radius, Centimeters::from_meters(75.0));
        assert_eq!(request.expiry.as_secs(), 600);

        session.handle(HostEvent::RegistrationSucceeded { id: id.to_owned() });
        let effects = session.handle(HostEvent::RegionEntered {
            triggering_ids: vec![id.to_owned()],
        });
        assert!(matches!(
            effects.as_slice(),
            [Effect::ShowFoundNotification { message, .. }] if **message == format!("{id}!")
        ));
    }

    session.handle(HostEvent::Started {
        permission_granted: true,
    });
    session.handle(HostEvent::SettingsResult {
        satisfied: true,
        resolvable: false,
    });
    assert!(session.is_complete());
    assert_eq!(session.current_hint(), Hint::Finished);
    assert_eq!(session.handle(HostEvent::Destroyed), vec![Effect::DeregisterRegions]);
}
