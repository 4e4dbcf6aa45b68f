//! Infrastructure layer for displayctl.
//!
//! Contains the OS-facing adapters and file access.
//!
//! **Dependency rule**: this layer may depend on `application`, `domain` and
//! `displayctl_core`, but MUST NOT be imported by the `domain` layer.
//!
//! # Sub-modules
//!
//! - **`display_service`** – Implementations of
//!   [`DisplayService`](displayctl_core::DisplayService).  The platform
//!   implementation is selected at compile time using `#[cfg(target_os)]` and
//!   re-exported as `NativeDisplayService`.  A `FakeDisplayService` is also
//!   provided for tests.
//!
//! - **`storage`** – Reads the optional TOML settings file.

pub mod display_service;
pub mod storage;
