//! Hotkey bindings: one primary key plus ordered modifiers.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::keycode::KeyCode;

/// Separator between key names in the config file (`H + LeftControl`).
const KEY_SEPARATOR: char = '+';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HotkeyParseError {
    #[error("unknown key name {key:?}")]
    UnknownKey { key: String },
}

/// A primary key plus the modifiers that must be held with it.
///
/// A binding whose primary key is [`KeyCode::None`] never matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HotkeyBinding {
    primary: KeyCode,
    modifiers: Vec<KeyCode>,
}

impl HotkeyBinding {
    /// Build a binding. Modifiers keep their order; duplicates, `None`, and
    /// repeats of the primary key are dropped.
    pub fn new(primary: KeyCode, modifiers: impl IntoIterator<Item = KeyCode>) -> Self {
        let mut unique: Vec<KeyCode> = Vec::new();
        for key in modifiers {
            if key.is_none() || key == primary || unique.contains(&key) {
                continue;
            }
            unique.push(key);
        }
        Self {
            primary,
            modifiers: unique,
        }
    }

    /// A binding that is permanently inactive.
    pub fn disabled() -> Self {
        Self {
            primary: KeyCode::None,
            modifiers: Vec::new(),
        }
    }

    pub fn primary(&self) -> KeyCode {
        self.primary
    }

    pub fn modifiers(&self) -> &[KeyCode] {
        &self.modifiers
    }

    pub fn is_active(&self) -> bool {
        !self.primary.is_none()
    }
}

impl Default for HotkeyBinding {
    /// `H + LeftControl`
    fn default() -> Self {
        Self::new(KeyCode::H, [KeyCode::LeftControl])
    }
}

impl FromStr for HotkeyBinding {
    type Err = HotkeyParseError;

    /// Parse `"<Primary> + <Mod> + ..."`. Empty text means disabled.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut keys = s
            .split(KEY_SEPARATOR)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| {
                KeyCode::from_name(token).ok_or_else(|| HotkeyParseError::UnknownKey {
                    key: token.to_string(),
                })
            });

        let primary = match keys.next() {
            Some(key) => key?,
            None => return Ok(Self::disabled()),
        };
        let modifiers = keys.collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(primary, modifiers))
    }
}

impl fmt::Display for HotkeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.primary.name())?;
        for modifier in &self.modifiers {
            write!(f, " {KEY_SEPARATOR} {}", modifier.name())?;
        }
        Ok(())
    }
}
