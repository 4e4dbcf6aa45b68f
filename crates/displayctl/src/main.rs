//! displayctl: command-line entry point.
//!
//! # Usage
//!
//! ```text
//! displayctl [OPTIONS] <COMMAND>
//!
//! Commands:
//!   screens   List screens (--all includes adapters not on the desktop)
//!   current   Show the active mode of a screen
//!   modes     List the modes a screen supports (--args prints `set` flags)
//!   set       Switch a screen to --width/--height/--refresh
//!
//! Options:
//!   --format <text|json>   Output format [default: text]
//!   --log-level <LEVEL>    Diagnostic level [default: warn]
//!   --config <PATH>        Settings file to read instead of the default
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable             | Description                          |
//! |----------------------|--------------------------------------|
//! | `DISPLAYCTL_SCREEN`  | Screen number for current/modes/set  |
//! | `DISPLAYCTL_FORMAT`  | Output format                        |
//! | `DISPLAYCTL_LOG`     | Diagnostic level                     |
//! | `DISPLAYCTL_CONFIG`  | Settings file path                   |
//!
//! `RUST_LOG` takes precedence over every other log level source.
//! Precedence for everything else: CLI flag, environment variable, settings
//! file, built-in default.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use displayctl::application::commands::{run_command, Command};
use displayctl::domain::OutputFormat;
use displayctl::infrastructure::display_service::NativeDisplayService;
use displayctl::infrastructure::storage::settings::{load_settings, Settings};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// List screens and display modes, and switch resolution/refresh rate.
#[derive(Debug, Parser)]
#[command(name = "displayctl", version)]
struct Cli {
    /// Output format: `text` or `json`.
    #[arg(long, global = true, env = "DISPLAYCTL_FORMAT")]
    format: Option<OutputFormat>,

    /// Diagnostic level (`error`, `warn`, `info`, `debug`, `trace`).
    #[arg(long, global = true, env = "DISPLAYCTL_LOG")]
    log_level: Option<String>,

    /// Settings file to read instead of the platform default.
    #[arg(long, global = true, env = "DISPLAYCTL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// List screens.
    Screens {
        /// Also list adapters that are not attached to the desktop.
        #[arg(long)]
        all: bool,
    },

    /// Show the active mode of a screen.
    Current {
        /// 1-based screen number, as printed by `screens`.
        #[arg(long, env = "DISPLAYCTL_SCREEN", value_parser = clap::value_parser!(u32).range(1..))]
        screen: Option<u32>,
    },

    /// List the modes a screen supports, highest resolution first.
    Modes {
        /// 1-based screen number, as printed by `screens`.
        #[arg(long, env = "DISPLAYCTL_SCREEN", value_parser = clap::value_parser!(u32).range(1..))]
        screen: Option<u32>,

        /// Print each mode as flags for `set`.
        #[arg(long)]
        args: bool,
    },

    /// Validate and apply a new mode.
    Set {
        /// 1-based screen number, as printed by `screens`.
        #[arg(long, env = "DISPLAYCTL_SCREEN", value_parser = clap::value_parser!(u32).range(1..))]
        screen: Option<u32>,

        /// Horizontal resolution in pixels.
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        width: u32,

        /// Vertical resolution in pixels.
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        height: u32,

        /// Refresh rate in Hz.
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        refresh: u32,
    },
}

impl CliCommand {
    /// Fills in settings-file defaults and produces the application command.
    fn into_command(self, settings: &Settings) -> Command {
        match self {
            Self::Screens { all } => Command::Screens {
                include_inactive: all || settings.include_inactive,
            },
            Self::Current { screen } => Command::Current {
                screen: screen.unwrap_or(settings.default_screen),
            },
            Self::Modes { screen, args } => Command::Modes {
                screen: screen.unwrap_or(settings.default_screen),
                as_args: args,
            },
            Self::Set {
                screen,
                width,
                height,
                refresh,
            } => Command::Set {
                screen: screen.unwrap_or(settings.default_screen),
                width,
                height,
                refresh,
            },
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = load_settings(cli.config.as_deref()).context("failed to load settings")?;

    // Diagnostics go to stderr so stdout only carries command output.
    let level = cli.log_level.as_deref().unwrap_or(&settings.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let format = cli.format.unwrap_or(settings.format);
    let command = cli.command.into_command(&settings);
    debug!(?command, %format, "running command");

    let service = NativeDisplayService::new();
    let output = run_command(&command, &service, format)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_parses_mode_flags() {
        let cli = Cli::parse_from([
            "displayctl", "set", "--screen", "2", "--width", "1920", "--height", "1080",
            "--refresh", "144",
        ]);

        let command = cli.command.into_command(&Settings::default());

        assert_eq!(
            command,
            Command::Set {
                screen: 2,
                width: 1920,
                height: 1080,
                refresh: 144
            }
        );
    }

    #[test]
    fn test_screen_defaults_to_settings_value() {
        let cli = Cli::parse_from(["displayctl", "current"]);
        let settings = Settings {
            default_screen: 3,
            ..Settings::default()
        };

        assert_eq!(
            cli.command.into_command(&settings),
            Command::Current { screen: 3 }
        );
    }

    #[test]
    fn test_screens_all_flag_or_settings_includes_inactive() {
        let cli = Cli::parse_from(["displayctl", "screens"]);
        let settings = Settings {
            include_inactive: true,
            ..Settings::default()
        };
        assert_eq!(
            cli.command.into_command(&settings),
            Command::Screens {
                include_inactive: true
            }
        );

        let cli = Cli::parse_from(["displayctl", "screens", "--all"]);
        assert_eq!(
            cli.command.into_command(&Settings::default()),
            Command::Screens {
                include_inactive: true
            }
        );
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let result = Cli::try_parse_from([
            "displayctl", "set", "--width", "0", "--height", "1080", "--refresh", "60",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_screen_zero_is_rejected() {
        let result = Cli::try_parse_from(["displayctl", "modes", "--screen", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_format_flag_after_subcommand() {
        let cli = Cli::parse_from(["displayctl", "modes", "--args", "--format", "json"]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(matches!(cli.command, CliCommand::Modes { args: true, .. }));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result = Cli::try_parse_from(["displayctl", "--format", "yaml", "screens"]);
        assert!(result.is_err());
    }
}
