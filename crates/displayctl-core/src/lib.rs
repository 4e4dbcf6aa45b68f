//! # displayctl-core
//!
//! Shared library for displayctl containing the display mode value types,
//! the port through which the operating-system display subsystem is reached,
//! and the device operations built on top of it.
//!
//! This crate has zero dependencies on OS APIs.  Every call into the display
//! subsystem goes through the [`DisplayService`] trait; the `displayctl`
//! crate supplies the Win32 implementation and an in-memory fake.
//!
//! # Architecture overview
//!
//! - **`domain`** – Plain data: [`DisplayConfig`] (one width/height/refresh
//!   mode), and the adapter records [`DeviceInfo`], [`ModeInfo`] and
//!   [`StateFlags`].
//!
//! - **`application`** – The operations: [`list_screens`] walks the OS
//!   adapters and returns a [`Device`] per screen; a `Device` reads its
//!   current mode, lists the modes it supports (deduplicated and sorted), and
//!   applies a new mode using a test-then-commit sequence.

pub mod application;
pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `displayctl_core::Device` instead of `displayctl_core::application::device::Device`.
pub use application::device::{Device, DeviceError, ModeChangeError};
pub use application::display_service::DisplayService;
pub use application::list_screens::list_screens;
pub use domain::device_info::{ChangeMode, ChangeOutcome, DeviceInfo, ModeInfo, ModeQuery, StateFlags};
pub use domain::mode::DisplayConfig;
