//! Screen enumeration: one [`Device`] per adapter that drives a screen.

use tracing::{debug, error};

use super::device::Device;
use super::display_service::DisplayService;

/// Walks the OS adapter list and returns the screens found, in adapter order.
///
/// Adapters not attached to the desktop are skipped unless
/// `include_inactive` is set, in which case they are returned with only the
/// adapter description (there is no monitor to name).  For an attached
/// adapter the first monitor on it supplies the sink name; if that lookup
/// fails the adapter is logged and skipped, and enumeration carries on.
///
/// Screen numbers are the adapter's index plus one.
pub fn list_screens(service: &dyn DisplayService, include_inactive: bool) -> Vec<Device> {
    let mut screens = Vec::new();

    for index in 0u32.. {
        let Some(adapter) = service.enumerate_adapters(index) else {
            break;
        };
        let screen = index + 1;
        let attached = adapter.state_flags.is_attached();
        let primary = adapter.state_flags.is_primary();

        if !attached {
            if include_inactive {
                screens.push(Device::discovered(screen, adapter.description, None, primary));
            } else {
                debug!(screen, adapter = %adapter.name, "skipping adapter not attached to desktop");
            }
            continue;
        }

        match service.enumerate_monitors(&adapter.name, 0) {
            Some(monitor) => screens.push(Device::discovered(
                screen,
                adapter.description,
                Some(monitor.description),
                primary,
            )),
            None => error!(screen, adapter = %adapter.name, "failed to get device info for screen {screen}"),
        }
    }

    screens
}

// ── Tests ─────────────────────────────────────────────────────────────────────
