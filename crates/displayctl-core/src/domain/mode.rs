//! Display mode value type.
//!
//! A [`DisplayConfig`] is one (width, height, refresh rate) triple plus an
//! optional free-text annotation such as `"current"`.  The annotation is
//! metadata only: two configs with the same triple compare equal and hash
//! identically, so a `HashSet<DisplayConfig>` collapses the many records a
//! driver reports for one logical mode (different color depths, timings)
//! into a single entry, keeping whichever was inserted first.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::device_info::ModeInfo;

/// Annotation attached to the mode that is active on the device.
pub const CURRENT_COMMENT: &str = "current";

/// One display mode: resolution and refresh rate, with an optional comment.
///
/// Fields are private so a config cannot change after construction; use
/// [`DisplayConfig::with_comment`] to derive an annotated copy.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayConfig {
    width: u32,
    height: u32,
    refresh: u32,
    #[serde(skip_serializing_if = "String::is_empty")]
    comment: String,
}

impl DisplayConfig {
    /// Creates a config with no comment.
    pub fn new(width: u32, height: u32, refresh: u32) -> Self {
        Self {
            width,
            height,
            refresh,
            comment: String::new(),
        }
    }

    /// Returns a copy of this config carrying `comment`.
    pub fn with_comment(self, comment: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
            ..self
        }
    }

    /// Builds a config from the numeric fields of a raw adapter mode record.
    pub fn from_mode(mode: &ModeInfo) -> Self {
        Self::new(mode.width, mode.height, mode.refresh)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Refresh rate in Hz.
    pub fn refresh(&self) -> u32 {
        self.refresh
    }

    /// Annotation, empty when none was attached.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// The identity triple `(width, height, refresh)`.
    pub fn key(&self) -> (u32, u32, u32) {
        (self.width, self.height, self.refresh)
    }

    /// Returns `true` if `mode` describes the same triple as this config.
    pub fn matches(&self, mode: &ModeInfo) -> bool {
        self.key() == (mode.width, mode.height, mode.refresh)
    }

    /// Ordering used for mode listings: tallest first, then widest, then
    /// fastest refresh.
    pub fn display_order(a: &Self, b: &Self) -> Ordering {
        b.height
            .cmp(&a.height)
            .then_with(|| b.width.cmp(&a.width))
            .then_with(|| b.refresh.cmp(&a.refresh))
    }

    /// Formats the config as the flags accepted by `displayctl set`, e.g.
    /// `--width 1920 --height 1080 --refresh 60  # current`.
    pub fn to_args(&self) -> String {
        format!(
            "--width {} --height {} --refresh {}{}",
            self.width,
            self.height,
            self.refresh,
            CommentSuffix(&self.comment)
        )
    }
}

impl PartialEq for DisplayConfig {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for DisplayConfig {}

impl Hash for DisplayConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for DisplayConfig {
    /// `1920x1080@60Hz`, with `  # comment` appended when a comment is set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}@{}Hz{}",
            self.width,
            self.height,
            self.refresh,
            CommentSuffix(&self.comment)
        )
    }
}

/// Renders `"  # {comment}"`, or nothing for an empty comment.
struct CommentSuffix<'a>(&'a str);

impl fmt::Display for CommentSuffix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            Ok(())
        } else {
            write!(f, "  # {}", self.0)
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_configs_with_same_triple_are_equal_regardless_of_comment() {
        // Arrange
        let plain = DisplayConfig::new(1920, 1080, 60);
        let annotated = DisplayConfig::new(1920, 1080, 60).with_comment(CURRENT_COMMENT);

        // Assert
        assert_eq!(plain, annotated);
    }

    #[test]
    fn test_configs_differing_in_any_field_are_not_equal() {
        let base = DisplayConfig::new(1920, 1080, 60);
        assert_ne!(base, DisplayConfig::new(1280, 1080, 60));
        assert_ne!(base, DisplayConfig::new(1920, 720, 60));
        assert_ne!(base, DisplayConfig::new(1920, 1080, 144));
    }

    #[test]
    fn test_hash_set_keeps_first_inserted_comment() {
        // Arrange
        let mut set = HashSet::new();

        // Act
        let first = set.insert(DisplayConfig::new(1920, 1080, 60).with_comment("first"));
        let second = set.insert(DisplayConfig::new(1920, 1080, 60).with_comment("second"));

        // Assert
        assert!(first);
        assert!(!second, "duplicate triple must not replace the existing entry");
        assert_eq!(set.len(), 1);
        let kept = set.iter().next().expect("one entry");
        assert_eq!(kept.comment(), "first");
    }

    #[test]
    fn test_display_without_comment() {
        let cfg = DisplayConfig::new(1920, 1080, 60);
        assert_eq!(cfg.to_string(), "1920x1080@60Hz");
    }

    #[test]
    fn test_display_with_comment_appends_hash_suffix() {
        let cfg = DisplayConfig::new(2560, 1440, 144).with_comment("current");
        assert_eq!(cfg.to_string(), "2560x1440@144Hz  # current");
    }

    #[test]
    fn test_to_args_uses_set_command_flags() {
        let cfg = DisplayConfig::new(1280, 720, 60);
        assert_eq!(cfg.to_args(), "--width 1280 --height 720 --refresh 60");
    }

    #[test]
    fn test_to_args_with_comment_appends_hash_suffix() {
        let cfg = DisplayConfig::new(1280, 720, 60).with_comment("current");
        assert_eq!(
            cfg.to_args(),
            "--width 1280 --height 720 --refresh 60  # current"
        );
    }

    #[test]
    fn test_display_order_sorts_height_then_width_then_refresh_descending() {
        // Arrange
        let mut modes = vec![
            DisplayConfig::new(1280, 720, 60),
            DisplayConfig::new(1920, 1080, 60),
            DisplayConfig::new(1440, 1080, 75),
            DisplayConfig::new(1920, 1080, 144),
            DisplayConfig::new(1280, 1024, 60),
        ];

        // Act
        modes.sort_by(DisplayConfig::display_order);

        // Assert
        let keys: Vec<_> = modes.iter().map(DisplayConfig::key).collect();
        assert_eq!(
            keys,
            vec![
                (1920, 1080, 144),
                (1920, 1080, 60),
                (1440, 1080, 75),
                (1280, 1024, 60),
                (1280, 720, 60),
            ]
        );
    }

    #[test]
    fn test_matches_compares_numeric_fields_of_mode_record() {
        let cfg = DisplayConfig::new(1920, 1080, 60);
        let mode = ModeInfo {
            bits_per_pel: 32,
            ..ModeInfo::new(1920, 1080, 60)
        };
        assert!(cfg.matches(&mode));
        assert!(!cfg.matches(&ModeInfo::new(1920, 1080, 59)));
    }

    #[test]
    fn test_from_mode_has_empty_comment() {
        let cfg = DisplayConfig::from_mode(&ModeInfo::new(800, 600, 75));
        assert_eq!(cfg.key(), (800, 600, 75));
        assert!(cfg.comment().is_empty());
    }
}
