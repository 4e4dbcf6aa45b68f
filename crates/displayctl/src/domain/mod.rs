//! Domain types for the displayctl front end.
//!
//! Only plain values live here; loading them from disk or from the command
//! line is the job of the infrastructure layer and `main.rs`.

pub mod output_format;

pub use output_format::{OutputFormat, ParseOutputFormatError};
