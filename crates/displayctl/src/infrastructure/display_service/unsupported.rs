//! Display adapter for platforms without a supported mode-setting API.
//!
//! Reports no adapters, so `displayctl screens` prints nothing and every
//! screen number resolves to "not found".  Mode change requests are refused.

use displayctl_core::{ChangeMode, ChangeOutcome, DeviceInfo, DisplayService, ModeInfo, ModeQuery};
use tracing::debug;

/// [`DisplayService`] that has nothing to enumerate.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedDisplayService;

impl UnsupportedDisplayService {
    pub fn new() -> Self {
        Self
    }
}

impl DisplayService for UnsupportedDisplayService {
    fn enumerate_adapters(&self, index: u32) -> Option<DeviceInfo> {
        if index == 0 {
            debug!("display mode control is not supported on this platform");
        }
        None
    }

    fn enumerate_monitors(&self, _adapter_name: &str, _index: u32) -> Option<DeviceInfo> {
        None
    }

    fn enumerate_modes(&self, _device_name: &str, _query: ModeQuery) -> Option<ModeInfo> {
        None
    }

    fn request_mode_change(
        &self,
        _device_name: &str,
        _mode: &ModeInfo,
        _change: ChangeMode,
    ) -> ChangeOutcome {
        ChangeOutcome::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use displayctl_core::list_screens;

    #[test]
    fn test_unsupported_service_lists_no_screens() {
        let service = UnsupportedDisplayService::new();
        assert!(list_screens(&service, true).is_empty());
    }

    #[test]
    fn test_unsupported_service_refuses_mode_changes() {
        let service = UnsupportedDisplayService::new();
        let outcome =
            service.request_mode_change("any", &ModeInfo::new(1920, 1080, 60), ChangeMode::Test);
        assert_eq!(outcome, ChangeOutcome::Failed);
    }
}
