//! Device: one screen, addressed by its position in the OS adapter list.
//!
//! A [`Device`] stores only the 1-based screen number and the display names
//! captured at discovery time.  Every operation resolves the adapter name
//! again from the screen number, so a `Device` never holds an OS handle that
//! could go stale.  The flip side is that the screen number itself is not
//! stable: if adapters are added or removed between [`list_screens`] and a
//! later call, the same number may refer to a different adapter.
//!
//! # Mode changes
//!
//! [`Device::change_settings`] never applies a mode the driver has not
//! validated first:
//!
//! ```text
//! resolve adapter ─► read current mode ─► patch width/height/refresh
//!        │                   │                      │
//!        └──── Unresolved ◄──┘                      ▼
//!                                        request (Test) ── Failed ──► ValidationFailed
//!                                                   │
//!                                                   ▼
//!                                        request (Commit)
//!                                          ├─ Successful      ─► Ok
//!                                          ├─ RestartRequired ─► RestartRequired
//!                                          └─ anything else   ─► CommitFailed
//! ```
//!
//! [`list_screens`]: super::list_screens::list_screens

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::adapter_lock::adapter_locks;
use super::display_service::DisplayService;
use crate::domain::device_info::{ChangeMode, ChangeOutcome, ModeInfo, ModeQuery};
use crate::domain::mode::{DisplayConfig, CURRENT_COMMENT};

/// Error returned when a device's current mode cannot be read.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The adapter could not be resolved or did not report a current mode.
    ///
    /// This means "could not determine", not "no mode exists".
    #[error("failed to get current settings for screen {screen}")]
    NotFound { screen: u32 },
}

/// Error returned by [`Device::change_settings`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModeChangeError {
    /// The adapter or its current mode could not be read; nothing was submitted.
    #[error("failed to change the resolution of screen {screen}: adapter or current mode unavailable")]
    Unresolved { screen: u32 },

    /// The driver rejected the mode during the test phase; nothing was applied.
    #[error("unable to process your request: screen {screen} rejected the requested mode")]
    ValidationFailed { screen: u32 },

    /// The mode was committed but only takes effect after a restart.
    #[error("screen {screen} needs a restart before the new mode takes effect")]
    RestartRequired { screen: u32 },

    /// The mode passed the test phase but the commit did not succeed.
    #[error("failed to change the resolution of screen {screen}: commit returned {outcome:?}")]
    CommitFailed { screen: u32, outcome: ChangeOutcome },
}

/// A screen discovered by [`list_screens`](super::list_screens::list_screens).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Device {
    screen: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sink: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    primary: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Device {
    /// Addresses screen number `screen` (1-based) without any display names.
    ///
    /// Screen 0 never resolves to an adapter.
    pub fn new(screen: u32) -> Self {
        Self {
            screen,
            source: None,
            sink: None,
            primary: false,
        }
    }

    pub(crate) fn discovered(
        screen: u32,
        source: String,
        sink: Option<String>,
        primary: bool,
    ) -> Self {
        Self {
            screen,
            source: Some(source),
            sink,
            primary,
        }
    }

    /// 1-based screen number.
    pub fn screen(&self) -> u32 {
        self.screen
    }

    /// Adapter description.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Attached monitor description; `None` for an adapter without a monitor.
    pub fn sink(&self) -> Option<&str> {
        self.sink.as_deref()
    }

    /// Whether the OS reported this adapter as the primary display at
    /// discovery time.
    pub fn is_primary(&self) -> bool {
        self.primary
    }

    /// Reads the mode currently active on this screen.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::NotFound`] if the adapter cannot be resolved or
    /// its current mode cannot be read.
    pub fn get_settings(&self, service: &dyn DisplayService) -> Result<DisplayConfig, DeviceError> {
        let (_, current) = self.current_mode(service)?;
        Ok(DisplayConfig::from_mode(&current))
    }

    /// Lists every mode the adapter reports, one entry per distinct
    /// (width, height, refresh), tallest first, then widest, then fastest.
    ///
    /// The entry matching the active mode is annotated `"current"`.  An empty
    /// list means the adapter reported no modes.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::NotFound`] if the adapter cannot be resolved or
    /// its current mode cannot be read.
    pub fn list_possible_configs(
        &self,
        service: &dyn DisplayService,
    ) -> Result<Vec<DisplayConfig>, DeviceError> {
        let (adapter, current) = self.current_mode(service)?;

        // Drivers report one record per color depth / timing, so the same
        // triple shows up many times.  `HashSet::insert` keeps the entry
        // already present, which makes the first record in enumeration order
        // the one retained.
        let mut distinct = HashSet::new();
        let mut reported = 0usize;
        for mode in raw_modes(service, &adapter) {
            reported += 1;
            let config = DisplayConfig::from_mode(&mode);
            let config = if config.matches(&current) {
                config.with_comment(CURRENT_COMMENT)
            } else {
                config
            };
            distinct.insert(config);
        }

        let mut configs: Vec<DisplayConfig> = distinct.into_iter().collect();
        configs.sort_by(DisplayConfig::display_order);
        debug!(
            screen = self.screen,
            adapter = %adapter,
            reported,
            distinct = configs.len(),
            "listed display modes"
        );
        Ok(configs)
    }

    /// Switches this screen to `width`×`height`@`refresh`.
    ///
    /// The current mode is used as the template for the request, so every
    /// other field (color depth, display flags) is preserved.  The mode is
    /// validated with a test request before it is committed; a rejected test
    /// means the commit is never attempted.
    ///
    /// # Errors
    ///
    /// See [`ModeChangeError`] for the failure stages.  `RestartRequired` is
    /// reported as an error because the new mode is not live yet.
    pub fn change_settings(
        &self,
        service: &dyn DisplayService,
        width: u32,
        height: u32,
        refresh: u32,
    ) -> Result<(), ModeChangeError> {
        let Some(adapter) = self.adapter_name(service) else {
            error!(screen = self.screen, "failed to change the resolution");
            return Err(ModeChangeError::Unresolved {
                screen: self.screen,
            });
        };

        adapter_locks().with_adapter(&adapter, || {
            self.apply_mode(service, &adapter, width, height, refresh)
        })
    }

    /// Switches this screen to the mode described by `config`.
    ///
    /// # Errors
    ///
    /// Same as [`Device::change_settings`].
    pub fn change_to(
        &self,
        service: &dyn DisplayService,
        config: &DisplayConfig,
    ) -> Result<(), ModeChangeError> {
        self.change_settings(service, config.width(), config.height(), config.refresh())
    }

    /// Test-then-commit sequence.  Caller holds the adapter's lock.
    fn apply_mode(
        &self,
        service: &dyn DisplayService,
        adapter: &str,
        width: u32,
        height: u32,
        refresh: u32,
    ) -> Result<(), ModeChangeError> {
        let screen = self.screen;

        let Some(template) = service.enumerate_modes(adapter, ModeQuery::Current) else {
            error!(screen, adapter, "failed to change the resolution");
            return Err(ModeChangeError::Unresolved { screen });
        };

        let candidate = ModeInfo {
            width,
            height,
            refresh,
            ..template
        };
        debug!(screen, adapter, width, height, refresh, "testing display mode");

        if service.request_mode_change(adapter, &candidate, ChangeMode::Test) == ChangeOutcome::Failed {
            error!(screen, adapter, "unable to process your request");
            return Err(ModeChangeError::ValidationFailed { screen });
        }

        match service.request_mode_change(adapter, &candidate, ChangeMode::Commit) {
            ChangeOutcome::Successful => {
                info!(screen, adapter, "display mode changed to {width}x{height}@{refresh}Hz");
                Ok(())
            }
            ChangeOutcome::RestartRequired => {
                warn!(
                    screen,
                    adapter,
                    "you need to reboot for the change to happen; if you have any problem \
                     after rebooting, change the resolution in safe mode"
                );
                Err(ModeChangeError::RestartRequired { screen })
            }
            outcome => {
                error!(screen, adapter, ?outcome, "failed to change the resolution");
                Err(ModeChangeError::CommitFailed { screen, outcome })
            }
        }
    }

    /// Resolves the OS name of this screen's adapter.
    fn adapter_name(&self, service: &dyn DisplayService) -> Option<String> {
        let index = self.screen.checked_sub(1)?;
        service.enumerate_adapters(index).map(|adapter| adapter.name)
    }

    /// Resolves the adapter name and reads its current mode.
    fn current_mode(&self, service: &dyn DisplayService) -> Result<(String, ModeInfo), DeviceError> {
        let resolved = self.adapter_name(service).and_then(|adapter| {
            let current = service.enumerate_modes(&adapter, ModeQuery::Current)?;
            Some((adapter, current))
        });
        resolved.ok_or_else(|| {
            error!(screen = self.screen, "failed to get current settings");
            DeviceError::NotFound {
                screen: self.screen,
            }
        })
    }
}

/// Every mode record of `adapter`, from index 0 until the adapter reports no
/// more entries.
fn raw_modes<'a>(
    service: &'a dyn DisplayService,
    adapter: &'a str,
) -> impl Iterator<Item = ModeInfo> + 'a {
    (0u32..).map_while(move |index| service.enumerate_modes(adapter, ModeQuery::Index(index)))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
