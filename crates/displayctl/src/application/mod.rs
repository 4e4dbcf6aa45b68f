//! Application layer use cases for displayctl.
//!
//! - **`commands`** – One function per CLI command.  Each runs the matching
//!   `displayctl-core` operation against an injected `DisplayService` and
//!   renders the result as text or JSON.  Keeping this out of `main.rs` lets
//!   the integration tests exercise every command against the fake adapter.

pub mod commands;
