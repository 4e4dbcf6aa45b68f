//! Windows display adapter via `EnumDisplayDevicesW` / `EnumDisplaySettingsW`
//! / `ChangeDisplaySettingsExW`.
//!
//! The Win32 records (`DISPLAY_DEVICEW`, `DEVMODEW`) are fixed-size structs
//! with inline UTF-16 name buffers.  They are built and read only inside
//! this module; the core sees plain [`DeviceInfo`] / [`ModeInfo`] values.

use std::iter;
use std::mem;

use displayctl_core::{
    ChangeMode, ChangeOutcome, DeviceInfo, DisplayService, ModeInfo, ModeQuery, StateFlags,
};
use tracing::debug;

use windows::core::PCWSTR;
use windows::Win32::Foundation::{HWND, POINTL};
use windows::Win32::Graphics::Gdi::{
    ChangeDisplaySettingsExW, EnumDisplayDevicesW, EnumDisplaySettingsW, CDS_TEST,
    CDS_UPDATEREGISTRY, DEVMODEW, DEVMODEW_0, DEVMODEW_0_1, DEVMODE_DISPLAY_FIXED_OUTPUT,
    DEVMODE_DISPLAY_ORIENTATION, DEVMODE_FIELD_FLAGS, DISPLAY_DEVICEW, DISP_CHANGE_FAILED,
    DISP_CHANGE_RESTART, DISP_CHANGE_SUCCESSFUL, ENUM_CURRENT_SETTINGS,
    ENUM_DISPLAY_SETTINGS_MODE,
};

/// `DEVMODEW.dmFields` bits.
#[cfg(test)]
const DM_POSITION: u32 = 0x0000_0020;
#[cfg(test)]
const DM_DISPLAYORIENTATION: u32 = 0x0000_0080;
#[cfg(test)]
const DM_DISPLAYFIXEDOUTPUT: u32 = 0x2000_0000;
const DM_BITSPERPEL: u32 = 0x0004_0000;
const DM_PELSWIDTH: u32 = 0x0008_0000;
const DM_PELSHEIGHT: u32 = 0x0010_0000;
const DM_DISPLAYFREQUENCY: u32 = 0x0040_0000;

/// Win32 implementation of [`DisplayService`].
///
/// Stateless: every call goes straight to the OS.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsDisplayService;

impl WindowsDisplayService {
    pub fn new() -> Self {
        Self
    }
}

impl DisplayService for WindowsDisplayService {
    fn enumerate_adapters(&self, index: u32) -> Option<DeviceInfo> {
        enum_display_device(None, index)
    }

    fn enumerate_monitors(&self, adapter_name: &str, index: u32) -> Option<DeviceInfo> {
        enum_display_device(Some(adapter_name), index)
    }

    fn enumerate_modes(&self, device_name: &str, query: ModeQuery) -> Option<ModeInfo> {
        let name = to_wide(device_name);
        let mode_num = match query {
            ModeQuery::Current => ENUM_CURRENT_SETTINGS,
            ModeQuery::Index(i) => ENUM_DISPLAY_SETTINGS_MODE(i),
        };

        let mut dm = empty_devmode();
        // SAFETY: `name` is a NUL-terminated UTF-16 buffer that outlives the
        // call, and `dm` is a zeroed DEVMODEW with `dmSize` set.
        let ok = unsafe { EnumDisplaySettingsW(PCWSTR(name.as_ptr()), mode_num, &mut dm) };
        if !ok.as_bool() {
            return None;
        }
        Some(mode_from_devmode(&dm))
    }

    fn request_mode_change(
        &self,
        device_name: &str,
        mode: &ModeInfo,
        change: ChangeMode,
    ) -> ChangeOutcome {
        let name = to_wide(device_name);
        let dm = devmode_from_mode(mode);
        let flags = match change {
            ChangeMode::Test => CDS_TEST,
            ChangeMode::Commit => CDS_UPDATEREGISTRY,
        };

        // SAFETY: `name` and `dm` outlive the call; no window handle or
        // video parameters are passed.
        let code = unsafe {
            ChangeDisplaySettingsExW(
                PCWSTR(name.as_ptr()),
                Some(&dm as *const DEVMODEW),
                HWND::default(),
                flags,
                None,
            )
        };
        debug!(device = device_name, ?change, code = code.0, "ChangeDisplaySettingsExW");

        match code.0 {
            c if c == DISP_CHANGE_SUCCESSFUL.0 => ChangeOutcome::Successful,
            c if c == DISP_CHANGE_RESTART.0 => ChangeOutcome::RestartRequired,
            c if c == DISP_CHANGE_FAILED.0 => ChangeOutcome::Failed,
            other => ChangeOutcome::Other(other),
        }
    }
}

/// Calls `EnumDisplayDevicesW`: top-level adapters when `parent` is `None`,
/// monitors of the named adapter otherwise.
fn enum_display_device(parent: Option<&str>, index: u32) -> Option<DeviceInfo> {
    let parent = parent.map(to_wide);
    let parent_ptr = parent
        .as_ref()
        .map_or(PCWSTR::null(), |p| PCWSTR(p.as_ptr()));

    // SAFETY: DISPLAY_DEVICEW is plain old data; zero initialization is valid.
    let mut dd: DISPLAY_DEVICEW = unsafe { mem::zeroed() };
    dd.cb = mem::size_of::<DISPLAY_DEVICEW>() as u32;

    // SAFETY: `parent_ptr` is null or points at a NUL-terminated buffer owned
    // by `parent`, and `dd.cb` holds the struct size.
    let ok = unsafe { EnumDisplayDevicesW(parent_ptr, index, &mut dd, 0) };
    if !ok.as_bool() {
        return None;
    }

    Some(DeviceInfo {
        name: from_wide(&dd.DeviceName),
        description: from_wide(&dd.DeviceString),
        state_flags: StateFlags::from_raw(dd.StateFlags.0),
        device_id: from_wide(&dd.DeviceID),
        device_key: from_wide(&dd.DeviceKey),
    })
}

fn empty_devmode() -> DEVMODEW {
    // SAFETY: DEVMODEW is plain old data; zero initialization is valid.
    let mut dm: DEVMODEW = unsafe { mem::zeroed() };
    dm.dmSize = mem::size_of::<DEVMODEW>() as u16;
    dm
}

fn mode_from_devmode(dm: &DEVMODEW) -> ModeInfo {
    // SAFETY: for display devices the first union holds the placement
    // struct; every member is plain integers, so any bit pattern is valid.
    let placement = unsafe { dm.Anonymous1.Anonymous2 };
    ModeInfo {
        width: dm.dmPelsWidth,
        height: dm.dmPelsHeight,
        refresh: dm.dmDisplayFrequency,
        bits_per_pel: dm.dmBitsPerPel,
        // SAFETY: both union members are u32; reading either is defined.
        display_flags: unsafe { dm.Anonymous2.dmDisplayFlags },
        fields: dm.dmFields.0,
        spec_version: dm.dmSpecVersion,
        driver_version: dm.dmDriverVersion,
        position_x: placement.dmPosition.x,
        position_y: placement.dmPosition.y,
        orientation: placement.dmDisplayOrientation.0,
        fixed_output: placement.dmDisplayFixedOutput.0,
    }
}

fn devmode_from_mode(mode: &ModeInfo) -> DEVMODEW {
    let mut dm = empty_devmode();
    dm.dmSpecVersion = mode.spec_version;
    dm.dmDriverVersion = mode.driver_version;
    dm.dmPelsWidth = mode.width;
    dm.dmPelsHeight = mode.height;
    dm.dmDisplayFrequency = mode.refresh;
    dm.dmBitsPerPel = mode.bits_per_pel;
    dm.Anonymous2.dmDisplayFlags = mode.display_flags;
    dm.Anonymous1 = DEVMODEW_0 {
        Anonymous2: DEVMODEW_0_1 {
            dmPosition: POINTL {
                x: mode.position_x,
                y: mode.position_y,
            },
            dmDisplayOrientation: DEVMODE_DISPLAY_ORIENTATION(mode.orientation),
            dmDisplayFixedOutput: DEVMODE_DISPLAY_FIXED_OUTPUT(mode.fixed_output),
        },
    };

    let mut fields = mode.fields | DM_PELSWIDTH | DM_PELSHEIGHT | DM_DISPLAYFREQUENCY;
    if mode.bits_per_pel == 0 {
        fields &= !DM_BITSPERPEL;
    }
    dm.dmFields = DEVMODE_FIELD_FLAGS(fields);
    dm
}

/// UTF-16 with a trailing NUL, for `PCWSTR` arguments.
fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(iter::once(0)).collect()
}

/// Reads a NUL-terminated (or full-length) UTF-16 buffer.
fn from_wide(buf: &[u16]) -> String {
    let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    String::from_utf16_lossy(&buf[..len])
}

// ── Tests ─────────────────────────────────────────────────────────────────────
