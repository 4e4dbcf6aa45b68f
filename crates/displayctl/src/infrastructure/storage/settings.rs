//! TOML settings for the command-line front end.
//!
//! Looked up at:
//! - Windows:  `%APPDATA%\displayctl\settings.toml`
//! - Linux:    `$XDG_CONFIG_HOME/displayctl/settings.toml` or `~/.config/displayctl/settings.toml`
//! - macOS:    `~/Library/Application Support/displayctl/settings.toml`
//!
//! ```toml
//! default_screen = 2
//! format = "json"
//! log_level = "info"
//! include_inactive = false
//! ```
//!
//! Every key is optional.  Command-line flags and `DISPLAYCTL_*` environment
//! variables override the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::OutputFormat;

/// Error type for settings file operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A file system I/O error occurred.
    #[error("I/O error reading settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// `default_screen` is 0; screen numbers start at 1.
    #[error("invalid default_screen in {path}: screen numbers start at 1")]
    InvalidScreen { path: PathBuf },
}

/// Settings read from `settings.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Screen used when a command is given no `--screen`.
    #[serde(default = "default_screen")]
    pub default_screen: u32,
    /// Output format used when no `--format` is given.
    #[serde(default)]
    pub format: OutputFormat,
    /// `tracing` filter directive: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Whether `screens` also lists adapters not attached to the desktop.
    #[serde(default)]
    pub include_inactive: bool,
}

fn default_screen() -> u32 {
    1
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_screen: default_screen(),
            format: OutputFormat::default(),
            log_level: default_log_level(),
            include_inactive: false,
        }
    }
}

/// Resolves the default settings file path, or `None` when the platform
/// config directory cannot be determined.
pub fn settings_file_path() -> Option<PathBuf> {
    platform_config_dir().map(|dir| dir.join("settings.toml"))
}

/// Loads settings from `path`, or from [`settings_file_path`] when `path` is
/// `None`.  A missing file yields [`Settings::default`].
///
/// # Errors
///
/// Returns [`SettingsError::Io`] for file-system errors other than "not
/// found", [`SettingsError::Parse`] if the TOML is malformed, and
/// [`SettingsError::InvalidScreen`] if `default_screen` is 0.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, SettingsError> {
    let Some(path) = path.map(Path::to_path_buf).or_else(settings_file_path) else {
        return Ok(Settings::default());
    };

    let settings: Settings = match std::fs::read_to_string(&path) {
        Ok(content) => toml::from_str(&content)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(source) => return Err(SettingsError::Io { path, source }),
    };

    if settings.default_screen == 0 {
        return Err(SettingsError::InvalidScreen { path });
    }
    Ok(settings)
}

/// Resolves the platform config directory for displayctl.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("displayctl"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("displayctl"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("displayctl")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
