//! CLI commands and their output rendering.

use displayctl_core::{list_screens, Device, DeviceError, DisplayConfig, DisplayService, ModeChangeError};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::domain::OutputFormat;

/// A parsed command, independent of how it was parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List screens, optionally including adapters not attached to the desktop.
    Screens { include_inactive: bool },
    /// Show the active mode of a screen.
    Current { screen: u32 },
    /// List the supported modes of a screen; `as_args` renders each mode as
    /// `set` flags instead of `WxH@RHz`.
    Modes { screen: u32, as_args: bool },
    /// Switch a screen to a new mode.
    Set {
        screen: u32,
        width: u32,
        height: u32,
        refresh: u32,
    },
}

/// Error type for command execution.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Device(#[from] DeviceError),

    #[error(transparent)]
    ModeChange(#[from] ModeChangeError),

    #[error("failed to render JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

/// JSON shape of a successful `set`.
#[derive(Debug, Serialize)]
struct ModeChangeReport<'a> {
    screen: u32,
    mode: &'a DisplayConfig,
}

/// Runs `command` against `service` and returns the text to print on stdout.
///
/// # Errors
///
/// Returns [`CommandError`] when the underlying device operation fails or
/// JSON rendering fails.  Diagnostics for device failures have already been
/// logged by the time this returns.
pub fn run_command(
    command: &Command,
    service: &dyn DisplayService,
    format: OutputFormat,
) -> Result<String, CommandError> {
    match *command {
        Command::Screens { include_inactive } => {
            let screens = list_screens(service, include_inactive);
            if screens.is_empty() {
                warn!("no screens found");
            }
            render_screens(&screens, format)
        }
        Command::Current { screen } => {
            let config = Device::new(screen).get_settings(service)?;
            match format {
                OutputFormat::Text => Ok(config.to_string()),
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&config)?),
            }
        }
        Command::Modes { screen, as_args } => {
            let configs = Device::new(screen).list_possible_configs(service)?;
            render_modes(&configs, as_args, format)
        }
        Command::Set {
            screen,
            width,
            height,
            refresh,
        } => {
            let target = DisplayConfig::new(width, height, refresh);
            Device::new(screen).change_to(service, &target)?;
            match format {
                OutputFormat::Text => Ok(format!("screen {screen}: {target}")),
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&ModeChangeReport {
                    screen,
                    mode: &target,
                })?),
            }
        }
    }
}

fn render_screens(screens: &[Device], format: OutputFormat) -> Result<String, CommandError> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(screens)?);
    }

    let lines: Vec<String> = screens
        .iter()
        .map(|device| {
            let source = device.source().unwrap_or("<unknown adapter>");
            let primary = if device.is_primary() { " (primary)" } else { "" };
            match device.sink() {
                Some(sink) => format!("{}: {source} -> {sink}{primary}", device.screen()),
                None => format!("{}: {source} (inactive){primary}", device.screen()),
            }
        })
        .collect();
    Ok(lines.join("\n"))
}

fn render_modes(
    configs: &[DisplayConfig],
    as_args: bool,
    format: OutputFormat,
) -> Result<String, CommandError> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(configs)?);
    }

    let lines: Vec<String> = configs
        .iter()
        .map(|c| if as_args { c.to_args() } else { c.to_string() })
        .collect();
    Ok(lines.join("\n"))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
