//! Resolution tiers for Poly Haven HDRI assets.
//!
//! A tier determines both the remote path segment and the local filename
//! suffix (`{name}_{tier}.exr`).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Fixed quality level of an HDRI asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    K1,
    K2,
    K4,
    K8,
    K16,
}

/// Tier used when interactive input is unrecognized.
pub const DEFAULT_RESOLUTION: Resolution = Resolution::K4;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized resolution '{0}' (expected 1k, 2k, 4k, 8k, or 16k)")]
pub struct ParseResolutionError(String);

impl Resolution {
    /// Tier number without the "k" ("4" for 4k).
    pub fn number(self) -> &'static str {
        match self {
            Resolution::K1 => "1",
            Resolution::K2 => "2",
            Resolution::K4 => "4",
            Resolution::K8 => "8",
            Resolution::K16 => "16",
        }
    }

    /// Filename and remote-path suffix ("4k").
    pub fn suffix(self) -> &'static str {
        match self {
            Resolution::K1 => "1k",
            Resolution::K2 => "2k",
            Resolution::K4 => "4k",
            Resolution::K8 => "8k",
            Resolution::K16 => "16k",
        }
    }

    /// Maps an interactive menu choice (`"1"`–`"5"`) to its tier.
    pub fn from_menu_choice(choice: &str) -> Option<Resolution> {
        match choice.trim() {
            "1" => Some(Resolution::K1),
            "2" => Some(Resolution::K2),
            "3" => Some(Resolution::K4),
            "4" => Some(Resolution::K8),
            "5" => Some(Resolution::K16),
            _ => None,
        }
    }

    /// Local filename expected for `name` at this tier, e.g. `forest_2k.exr`.
    pub fn target_filename(self, name: &str) -> String {
        format!("{}_{}.exr", name, self.suffix())
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for Resolution {
    type Err = ParseResolutionError;

    /// Accepts the tier number with or without the "k" suffix ("2", "2k").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let number = lower.strip_suffix('k').unwrap_or(&lower);
        match number {
            "1" => Ok(Resolution::K1),
            "2" => Ok(Resolution::K2),
            "4" => Ok(Resolution::K4),
            "8" => Ok(Resolution::K8),
            "16" => Ok(Resolution::K16),
            _ => Err(ParseResolutionError(s.to_string())),
        }
    }
}
