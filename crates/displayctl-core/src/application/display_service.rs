//! The port through which the core reaches the OS display subsystem.

use crate::domain::device_info::{ChangeMode, ChangeOutcome, DeviceInfo, ModeInfo, ModeQuery};

/// Primitive operations of the OS display subsystem.
///
/// Every method is a single blocking call.  Enumeration methods return
/// `None` once `index` runs past the last entry (or when the OS call fails;
/// the underlying APIs do not distinguish the two).
///
/// Implementations must not cache device handles between calls: callers
/// re-resolve adapters by index every time because the OS may renumber
/// devices on hot-plug.
#[cfg_attr(test, mockall::automock)]
pub trait DisplayService: Send + Sync {
    /// Returns the top-level adapter at `index`.
    fn enumerate_adapters(&self, index: u32) -> Option<DeviceInfo>;

    /// Returns the monitor at `index` attached to the adapter named
    /// `adapter_name`.
    fn enumerate_monitors(&self, adapter_name: &str, index: u32) -> Option<DeviceInfo>;

    /// Reads one mode record of the device named `device_name`.
    fn enumerate_modes(&self, device_name: &str, query: ModeQuery) -> Option<ModeInfo>;

    /// Submits `mode` for the device named `device_name`, either as a dry run
    /// ([`ChangeMode::Test`]) or for real ([`ChangeMode::Commit`]).
    fn request_mode_change(&self, device_name: &str, mode: &ModeInfo, change: ChangeMode)
        -> ChangeOutcome;
}
