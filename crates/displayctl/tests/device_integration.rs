//! Integration tests for screen listing and mode changes.
//!
//! These tests exercise `displayctl-core` end-to-end through the in-memory
//! `FakeDisplayService`: enumeration, mode listing, and the test-then-commit
//! change sequence, including concurrent changes to one adapter.

use std::sync::Arc;
use std::thread;

use displayctl::infrastructure::display_service::{FakeAdapter, FakeDisplayService};
use displayctl_core::{
    list_screens, ChangeMode, ChangeOutcome, Device, DeviceError, DisplayConfig, ModeChangeError,
    ModeInfo,
};

fn mode(width: u32, height: u32, refresh: u32) -> ModeInfo {
    ModeInfo {
        bits_per_pel: 32,
        ..ModeInfo::new(width, height, refresh)
    }
}

/// Screen 1 attached, screen 2 inactive, screen 3 attached with modes.
fn workstation() -> FakeDisplayService {
    FakeDisplayService::new(vec![
        FakeAdapter::attached(r"\\.\DISPLAY1", "GPU Output 1", "Dell U2720Q")
            .primary()
            .with_current(mode(3840, 2160, 60))
            .with_modes(vec![mode(3840, 2160, 60), mode(2560, 1440, 60)]),
        FakeAdapter::inactive(r"\\.\DISPLAY2", "GPU Output 2"),
        FakeAdapter::attached(r"\\.\DISPLAY3", "GPU Output 3", "LG 27GL850")
            .with_current(mode(1920, 1080, 60))
            .with_modes(vec![
                mode(1920, 1080, 60),
                mode(1920, 1080, 60),
                mode(1280, 720, 60),
                mode(1920, 1080, 144),
            ]),
    ])
}

// ── Screen listing ────────────────────────────────────────────────────────────

#[test]
fn test_list_screens_then_query_each_attached_screen() {
    let service = workstation();

    let screens = list_screens(&service, false);
    let numbers: Vec<_> = screens.iter().map(Device::screen).collect();
    assert_eq!(numbers, vec![1, 3]);

    let current: Vec<_> = screens
        .iter()
        .map(|d| d.get_settings(&service).expect("attached screen").key())
        .collect();
    assert_eq!(current, vec![(3840, 2160, 60), (1920, 1080, 60)]);
}

#[test]
fn test_list_screens_with_inactive_includes_adapter_without_monitor() {
    let service = workstation();

    let screens = list_screens(&service, true);

    assert_eq!(screens.len(), 3);
    assert_eq!(screens[1].source(), Some("GPU Output 2"));
    assert!(screens[1].sink().is_none());
}

#[test]
fn test_attached_adapter_without_monitor_is_skipped() {
    let service = FakeDisplayService::new(vec![
        FakeAdapter::attached(r"\\.\DISPLAY1", "A", "M").without_monitor(),
        FakeAdapter::attached(r"\\.\DISPLAY2", "B", "N"),
    ]);

    let screens = list_screens(&service, true);

    assert_eq!(screens.len(), 1);
    assert_eq!(screens[0].screen(), 2);
}

#[test]
fn test_inactive_screen_has_no_current_mode() {
    let service = workstation();
    let result = Device::new(2).get_settings(&service);
    assert_eq!(result, Err(DeviceError::NotFound { screen: 2 }));
}

// ── Mode listing ──────────────────────────────────────────────────────────────

#[test]
fn test_list_possible_configs_dedups_sorts_and_tags_current() {
    let service = workstation();

    let configs = Device::new(3).list_possible_configs(&service).expect("modes");

    let rendered: Vec<_> = configs.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec!["1920x1080@144Hz", "1920x1080@60Hz  # current", "1280x720@60Hz"]
    );
}

// ── Mode changes ──────────────────────────────────────────────────────────────

#[test]
fn test_change_settings_runs_test_then_commit_and_applies_mode() {
    // Arrange
    let service = workstation();

    // Act
    let result = Device::new(3).change_settings(&service, 1280, 720, 60);

    // Assert
    assert_eq!(result, Ok(()));
    let requests = service.requests();
    let changes: Vec<_> = requests.iter().map(|r| r.change).collect();
    assert_eq!(changes, vec![ChangeMode::Test, ChangeMode::Commit]);
    assert!(requests.iter().all(|r| r.adapter == 2));
    assert_eq!(
        Device::new(3).get_settings(&service).map(|c| c.key()),
        Ok((1280, 720, 60))
    );
}

#[test]
fn test_failed_test_phase_records_no_commit() {
    let service = workstation().with_outcomes(ChangeOutcome::Failed, ChangeOutcome::Successful);

    let result = Device::new(3).change_settings(&service, 1920, 1080, 60);

    assert_eq!(result, Err(ModeChangeError::ValidationFailed { screen: 3 }));
    let changes: Vec<_> = service.requests().iter().map(|r| r.change).collect();
    assert_eq!(changes, vec![ChangeMode::Test]);
}

#[test]
fn test_restart_required_fails_after_exactly_one_test_and_commit() {
    let service =
        workstation().with_outcomes(ChangeOutcome::Successful, ChangeOutcome::RestartRequired);

    let result = Device::new(1).change_settings(&service, 2560, 1440, 60);

    assert_eq!(result, Err(ModeChangeError::RestartRequired { screen: 1 }));
    let changes: Vec<_> = service.requests().iter().map(|r| r.change).collect();
    assert_eq!(changes, vec![ChangeMode::Test, ChangeMode::Commit]);
    assert_eq!(service.current_mode(0).map(|m| m.width), Some(3840));
}

#[test]
fn test_change_to_listed_config_round_trips() {
    let service = workstation();
    let device = Device::new(3);

    let fastest = device
        .list_possible_configs(&service)
        .expect("modes")
        .into_iter()
        .next()
        .expect("at least one mode");
    device.change_to(&service, &fastest).expect("change");

    let now = device.get_settings(&service).expect("current");
    assert_eq!(now, DisplayConfig::new(1920, 1080, 144));
}

#[test]
fn test_concurrent_changes_to_one_adapter_do_not_interleave() {
    // Arrange
    let service = Arc::new(workstation());
    let targets = [(1280, 720, 60), (1920, 1080, 144), (1920, 1080, 60), (800, 600, 60)];

    // Act
    let handles: Vec<_> = targets
        .into_iter()
        .map(|(w, h, r)| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                for _ in 0..10 {
                    Device::new(3)
                        .change_settings(service.as_ref(), w, h, r)
                        .expect("change");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker thread");
    }

    // Assert: every test request is immediately followed by the commit of
    // the same mode.
    let requests = service.requests();
    assert_eq!(requests.len(), targets.len() * 10 * 2);
    for pair in requests.chunks(2) {
        assert_eq!(pair[0].change, ChangeMode::Test);
        assert_eq!(pair[1].change, ChangeMode::Commit);
        assert_eq!(pair[0].mode, pair[1].mode);
    }
}
