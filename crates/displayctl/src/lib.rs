//! displayctl library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does displayctl do?
//!
//! It is a command-line front end over `displayctl-core`:
//!
//! 1. Lists the screens the OS reports (`displayctl screens`).
//! 2. Shows the active mode of a screen (`displayctl current`).
//! 3. Lists every mode a screen supports, deduplicated and sorted
//!    (`displayctl modes`).
//! 4. Switches a screen to a new resolution and refresh rate, validating the
//!    mode with the driver before committing it (`displayctl set`).
//!
//! The OS is reached through a `DisplayService` implementation chosen at
//! compile time: Win32 on Windows, an always-empty adapter elsewhere.  An
//! in-memory fake is always compiled for tests.

/// Domain layer: output format selection.
pub mod domain;

/// Application layer: the CLI commands and their rendering.
pub mod application;

/// Infrastructure layer: OS display adapters and the settings file.
pub mod infrastructure;
