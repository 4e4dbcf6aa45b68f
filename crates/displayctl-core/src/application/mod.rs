//! Application layer: the operations callers run against a display adapter.
//!
//! - **`display_service`** – The [`DisplayService`](display_service::DisplayService)
//!   port.  Every OS interaction goes through it; implementations live in the
//!   `displayctl` crate's infrastructure layer.
//!
//! - **`device`** – [`Device`](device::Device): current mode, supported mode
//!   listing, and the test-then-commit mode change.
//!
//! - **`list_screens`** – Walks the OS adapters and produces one `Device` per
//!   screen.
//!
//! - **`adapter_lock`** – Per-adapter critical sections that keep two mode
//!   changes for the same adapter from interleaving.

pub mod adapter_lock;
pub mod device;
pub mod display_service;
pub mod list_screens;
