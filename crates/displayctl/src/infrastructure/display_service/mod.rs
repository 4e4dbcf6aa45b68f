//! Platform-specific display subsystem adapters.
//!
//! Each platform implements [`DisplayService`]; the correct one is selected
//! at compile time via `#[cfg(target_os = ...)]` and re-exported as
//! `NativeDisplayService`:
//!
//! | Module        | OS     | API used                                                        |
//! |---------------|--------|-----------------------------------------------------------------|
//! | `windows`     | Windows| `EnumDisplayDevicesW`, `EnumDisplaySettingsW`, `ChangeDisplaySettingsExW` |
//! | `unsupported` | others | none; reports no adapters                                       |
//!
//! The [`fake`] module is always compiled (not guarded by `#[cfg]`) so tests
//! on any platform can drive the core without a physical display.
//!
//! [`DisplayService`]: displayctl_core::DisplayService

pub mod fake;
pub mod unsupported;

pub use fake::{ChangeRequest, FakeAdapter, FakeDisplayService};

// ── Windows implementation ────────────────────────────────────────────────────

#[cfg(target_os = "windows")]
pub mod windows;

/// Re-export the Win32 adapter as `NativeDisplayService` on Windows.
#[cfg(target_os = "windows")]
pub use windows::WindowsDisplayService as NativeDisplayService;

// ── Everything else ───────────────────────────────────────────────────────────

/// No display mode API is wired up outside Windows.
#[cfg(not(target_os = "windows"))]
pub use unsupported::UnsupportedDisplayService as NativeDisplayService;
