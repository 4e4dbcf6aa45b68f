//! Storage infrastructure: the optional settings file.
//!
//! The `settings` sub-module reads `settings.toml` from the
//! platform-appropriate directory (or an explicit path) and falls back to
//! defaults when the file does not exist.  displayctl never writes it.

pub mod settings;
