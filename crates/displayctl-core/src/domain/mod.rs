//! Domain entities for displayctl.
//!
//! This module contains plain data with no infrastructure dependencies.
//! Values here are built from whatever the display subsystem reports (or
//! from user input) and never hold an OS handle, so they can be compiled and
//! tested on any platform.

/// A single display mode and its identity/ordering rules.
///
/// See [`mode::DisplayConfig`] for the main type.
pub mod mode;

/// Records exchanged with the display subsystem adapter.
pub mod device_info;
