//! Records exchanged with the display subsystem adapter.
//!
//! These are plain data: the adapter fills them from whatever fixed-size OS
//! structures it marshals, and the core reads them without knowing how they
//! were produced.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// State word reported for a display device.
    ///
    /// Bits not listed here are retained as-is (see [`StateFlags::from_raw`]).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct StateFlags: u32 {
        /// The device is part of the desktop.
        const ATTACHED_TO_DESKTOP = 0x0000_0001;
        const MULTI_DRIVER = 0x0000_0002;
        /// The primary desktop is on this device.
        const PRIMARY_DEVICE = 0x0000_0004;
        /// Pseudo device used to mirror drawing for remoting.
        const MIRRORING_DRIVER = 0x0000_0008;
        const VGA_COMPATIBLE = 0x0000_0010;
        /// Removable device; cannot be the primary display.
        const REMOVABLE = 0x0000_0020;
        const DISCONNECT = 0x0200_0000;
        const REMOTE = 0x0400_0000;
        /// The device has more modes than its outputs support.
        const MODES_PRUNED = 0x0800_0000;
    }
}

impl StateFlags {
    /// Wraps a raw OS state word, keeping unknown bits.
    pub fn from_raw(raw: u32) -> Self {
        Self::from_bits_retain(raw)
    }

    pub fn is_attached(self) -> bool {
        self.contains(Self::ATTACHED_TO_DESKTOP)
    }

    pub fn is_primary(self) -> bool {
        self.contains(Self::PRIMARY_DEVICE)
    }
}

/// One display device as reported by the adapter: either a top-level
/// adapter (GPU output) or a monitor attached to one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceInfo {
    /// System-assigned name used to address the device, e.g. `\\.\DISPLAY1`.
    pub name: String,
    /// Human-readable description (adapter or monitor model).
    pub description: String,
    pub state_flags: StateFlags,
    pub device_id: String,
    pub device_key: String,
}

/// A raw display mode record.
///
/// Only `width`, `height` and `refresh` are interpreted by the core.  The
/// remaining fields are carried through unchanged so that a mode fetched as
/// the current settings can be resubmitted as a complete change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeInfo {
    pub width: u32,
    pub height: u32,
    /// Refresh rate in Hz.
    pub refresh: u32,
    /// Color depth in bits per pixel.
    pub bits_per_pel: u32,
    pub display_flags: u32,
    /// Bitmask of the fields the driver considers valid in this record.
    pub fields: u32,
    pub spec_version: u16,
    pub driver_version: u16,
    /// Desktop coordinates of the screen's top-left corner.
    pub position_x: i32,
    pub position_y: i32,
    /// Rotation code reported by the driver (0 = landscape).
    pub orientation: u32,
    /// How a lower-resolution mode is stretched or centered on a fixed panel.
    pub fixed_output: u32,
}

impl ModeInfo {
    /// Creates a record with only the resolution and refresh rate set.
    pub fn new(width: u32, height: u32, refresh: u32) -> Self {
        Self {
            width,
            height,
            refresh,
            ..Self::default()
        }
    }
}

/// Which mode record to read from a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeQuery {
    /// The mode currently active on the device.
    Current,
    /// The n-th entry of the driver's mode list, starting at 0.
    Index(u32),
}

/// How a mode change request is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeMode {
    /// Ask the driver whether the mode would be accepted, without applying it.
    Test,
    /// Apply the mode and persist it.
    Commit,
}

/// Result code of a mode change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOutcome {
    Successful,
    /// Accepted, but only takes effect after the machine restarts.
    RestartRequired,
    Failed,
    /// Any other code the OS returned.
    Other(i32),
}

// ── Tests ─────────────────────────────────────────────────────────────────────
