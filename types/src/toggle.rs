//! User intent for UI visibility.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether the user wants the host UI hidden.
///
/// This is intent, not the host's live visibility flag: turning the option
/// `Off` does not by itself re-show anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToggleState {
    On,
    #[default]
    Off,
}

impl ToggleState {
    /// The opposite state (On ↔ Off).
    pub fn flipped(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }

    pub fn is_on(self) -> bool {
        self == Self::On
    }

    /// Canonical literal written to the config file.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "On",
            Self::Off => "Off",
        }
    }
}

impl fmt::Display for ToggleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text that is neither of the two toggle literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleParseError {
    pub value: String,
}

impl fmt::Display for ToggleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown toggle value {:?} (expected On or Off)", self.value)
    }
}

impl std::error::Error for ToggleParseError {}

impl FromStr for ToggleState {
    type Err = ToggleParseError;

    /// Accepts `On`/`Off` in any case, and the numeric encodings `1`/`0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("on") || trimmed == "1" {
            Ok(Self::On)
        } else if trimmed.eq_ignore_ascii_case("off") || trimmed == "0" {
            Ok(Self::Off)
        } else {
            Err(ToggleParseError {
                value: s.to_string(),
            })
        }
    }
}
