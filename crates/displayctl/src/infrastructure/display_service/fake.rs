//! In-memory display adapter for tests.
//!
//! # Why a fake adapter?
//!
//! The Win32 adapter talks to the real display driver: it needs a desktop
//! session, and a successful `set` actually changes the resolution of the
//! test machine.  `FakeDisplayService` replaces the OS with a scripted list of
//! adapters and records every mode change request so tests can assert on
//! exactly what was submitted and in what order.
//!
//! A committed change with outcome `Successful` updates the adapter's
//! current mode, so a `set` followed by `current` behaves like the real thing.
//!
//! # Usage in tests
//!
//! ```ignore
//! let service = FakeDisplayService::single_1080p();
//! Device::new(1).change_settings(&service, 1280, 720, 60)?;
//! let requests = service.requests();
//! assert_eq!(requests.len(), 2); // test + commit
//! ```

use std::sync::{Mutex, PoisonError};

use displayctl_core::{
    ChangeMode, ChangeOutcome, DeviceInfo, DisplayService, ModeInfo, ModeQuery, StateFlags,
};

/// One scripted adapter.
#[derive(Debug, Clone)]
pub struct FakeAdapter {
    pub info: DeviceInfo,
    /// Monitor reported at index 0; `None` makes the monitor lookup fail.
    pub monitor: Option<DeviceInfo>,
    /// Answer to `ModeQuery::Current`; `None` makes the query fail.
    pub current: Option<ModeInfo>,
    /// Mode list in driver order (duplicates allowed).
    pub modes: Vec<ModeInfo>,
}

impl FakeAdapter {
    /// An adapter attached to the desktop with one monitor.
    pub fn attached(name: &str, description: &str, monitor: &str) -> Self {
        Self {
            info: DeviceInfo {
                name: name.to_string(),
                description: description.to_string(),
                state_flags: StateFlags::ATTACHED_TO_DESKTOP,
                ..DeviceInfo::default()
            },
            monitor: Some(DeviceInfo {
                name: format!(r"{name}\Monitor0"),
                description: monitor.to_string(),
                state_flags: StateFlags::ATTACHED_TO_DESKTOP,
                ..DeviceInfo::default()
            }),
            current: None,
            modes: Vec::new(),
        }
    }

    /// An adapter that is not part of the desktop and has no monitor.
    pub fn inactive(name: &str, description: &str) -> Self {
        Self {
            info: DeviceInfo {
                name: name.to_string(),
                description: description.to_string(),
                ..DeviceInfo::default()
            },
            monitor: None,
            current: None,
            modes: Vec::new(),
        }
    }

    /// Marks the adapter as the primary display.
    pub fn primary(mut self) -> Self {
        self.info.state_flags |= StateFlags::PRIMARY_DEVICE;
        self
    }

    /// Sets the current mode.
    pub fn with_current(mut self, mode: ModeInfo) -> Self {
        self.current = Some(mode);
        self
    }

    /// Sets the mode list.
    pub fn with_modes(mut self, modes: Vec<ModeInfo>) -> Self {
        self.modes = modes;
        self
    }

    /// Drops the monitor so the monitor lookup fails.
    pub fn without_monitor(mut self) -> Self {
        self.monitor = None;
        self
    }
}

/// A recorded call to `request_mode_change`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeRequest {
    /// Index of the adapter the request was addressed to.
    pub adapter: usize,
    pub mode: ModeInfo,
    pub change: ChangeMode,
}

/// A [`DisplayService`] backed by a scripted adapter list.
pub struct FakeDisplayService {
    adapters: Mutex<Vec<FakeAdapter>>,
    /// Every mode change request, in call order.
    pub requests: Mutex<Vec<ChangeRequest>>,
    /// Outcome returned for `ChangeMode::Test` requests.
    pub test_outcome: ChangeOutcome,
    /// Outcome returned for `ChangeMode::Commit` requests.
    pub commit_outcome: ChangeOutcome,
}

impl FakeDisplayService {
    /// Creates a service with the given adapters; all requests succeed.
    pub fn new(adapters: Vec<FakeAdapter>) -> Self {
        Self {
            adapters: Mutex::new(adapters),
            requests: Mutex::new(Vec::new()),
            test_outcome: ChangeOutcome::Successful,
            commit_outcome: ChangeOutcome::Successful,
        }
    }

    /// One primary 1920×1080@60Hz screen with a typical mode list, including
    /// the duplicate records real drivers report per color depth.
    pub fn single_1080p() -> Self {
        let modes = [
            (1920, 1080, 60),
            (1920, 1080, 60),
            (1920, 1080, 144),
            (1680, 1050, 60),
            (1280, 720, 60),
            (1280, 720, 60),
            (1024, 768, 60),
            (800, 600, 60),
        ]
        .into_iter()
        .map(|(w, h, r)| ModeInfo {
            bits_per_pel: 32,
            ..ModeInfo::new(w, h, r)
        })
        .collect();

        Self::new(vec![FakeAdapter::attached(
            r"\\.\DISPLAY1",
            "Fake Graphics Adapter",
            "Fake 24in Monitor",
        )
        .primary()
        .with_current(ModeInfo {
            bits_per_pel: 32,
            ..ModeInfo::new(1920, 1080, 60)
        })
        .with_modes(modes)])
    }

    /// Sets the outcomes returned for test and commit requests.
    pub fn with_outcomes(mut self, test: ChangeOutcome, commit: ChangeOutcome) -> Self {
        self.test_outcome = test;
        self.commit_outcome = commit;
        self
    }

    /// Snapshot of the recorded requests.
    pub fn requests(&self) -> Vec<ChangeRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Current mode of adapter `index`, as last committed.
    pub fn current_mode(&self, index: usize) -> Option<ModeInfo> {
        self.adapters().get(index).and_then(|a| a.current)
    }

    fn adapters(&self) -> std::sync::MutexGuard<'_, Vec<FakeAdapter>> {
        self.adapters.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.adapters().iter().position(|a| a.info.name == name)
    }
}

impl DisplayService for FakeDisplayService {
    fn enumerate_adapters(&self, index: u32) -> Option<DeviceInfo> {
        self.adapters().get(index as usize).map(|a| a.info.clone())
    }

    fn enumerate_monitors(&self, adapter_name: &str, index: u32) -> Option<DeviceInfo> {
        if index != 0 {
            return None;
        }
        self.adapters()
            .iter()
            .find(|a| a.info.name == adapter_name)
            .and_then(|a| a.monitor.clone())
    }

    fn enumerate_modes(&self, device_name: &str, query: ModeQuery) -> Option<ModeInfo> {
        let adapters = self.adapters();
        let adapter = adapters.iter().find(|a| a.info.name == device_name)?;
        match query {
            ModeQuery::Current => adapter.current,
            ModeQuery::Index(i) => adapter.modes.get(i as usize).copied(),
        }
    }

    fn request_mode_change(
        &self,
        device_name: &str,
        mode: &ModeInfo,
        change: ChangeMode,
    ) -> ChangeOutcome {
        let Some(adapter) = self.position(device_name) else {
            return ChangeOutcome::Failed;
        };

        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ChangeRequest {
                adapter,
                mode: *mode,
                change,
            });

        match change {
            ChangeMode::Test => self.test_outcome,
            ChangeMode::Commit => {
                if self.commit_outcome == ChangeOutcome::Successful {
                    if let Some(entry) = self.adapters().get_mut(adapter) {
                        entry.current = Some(*mode);
                    }
                }
                self.commit_outcome
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
