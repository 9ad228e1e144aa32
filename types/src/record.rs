//! On-disk shape of the HideUI configuration file.
//!
//! The file is TOML with quoted labels so it stays readable by hand:
//!
//! ```toml
//! ["1 - General"]
//! "Hide UI Hotkey" = "H + LeftControl"
//! "Hide UI" = "Off"
//! ```
//!
//! The file is written by [`ConfigFileRecord::render`], which quotes the
//! table header and keys explicitly instead of relying on the serializer's
//! choice of key style.
//!
//! Values are kept as raw strings here. Validation (key names, toggle
//! literals) is done by the store so a bad value is reported with context
//! instead of failing deserialization of the whole file.

use serde::{Deserialize, Serialize};

use crate::toggle::ToggleState;

/// Group label the entries live under.
pub const GENERAL_SECTION: &str = "1 - General";

/// Entry holding the hotkey text, e.g. `H + LeftControl`.
pub const HOTKEY_ENTRY: &str = "Hide UI Hotkey";

/// Entry holding the toggle literal.
pub const TOGGLE_ENTRY: &str = "Hide UI";

pub const DEFAULT_HOTKEY: &str = "H + LeftControl";
pub const DEFAULT_TOGGLE: ToggleState = ToggleState::Off;

/// Whole configuration file.
///
/// `Default` is the file written on first start. A file that omits the
/// section or an entry deserializes with `None` there, meaning "keep the
/// current value".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFileRecord {
    #[serde(rename = "1 - General", default)]
    pub general: GeneralSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralSection {
    /// Hotkey to toggle on and off the UI.
    #[serde(
        rename = "Hide UI Hotkey",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub hotkey: Option<String>,

    /// If on, the UI will be hidden. The hotkey automatically toggles this value.
    #[serde(rename = "Hide UI", default, skip_serializing_if = "Option::is_none")]
    pub hide_ui: Option<String>,
}

impl ConfigFileRecord {
    pub fn new(hotkey: impl Into<String>, toggle: ToggleState) -> Self {
        Self {
            general: GeneralSection {
                hotkey: Some(hotkey.into()),
                hide_ui: Some(toggle.as_str().to_string()),
            },
        }
    }
}

impl ConfigFileRecord {
    /// Render the record as the TOML text written to disk, with a short
    /// description above each entry.
    pub fn render(&self) -> String {
        let mut out = format!("[{}]\n", quoted(GENERAL_SECTION));

        if let Some(hotkey) = &self.general.hotkey {
            out.push_str("\n## Hotkey to toggle on and off the UI.\n");
            out.push_str(&format!("{} = {}\n", quoted(HOTKEY_ENTRY), quoted(hotkey)));
        }
        if let Some(hide_ui) = &self.general.hide_ui {
            out.push_str("\n## If on, the UI will be hidden. The hotkey automatically toggles this value.\n");
            out.push_str("# Acceptable values: On, Off\n");
            out.push_str(&format!("{} = {}\n", quoted(TOGGLE_ENTRY), quoted(hide_ui)));
        }

        out
    }
}

/// TOML basic string, escaped. Valid both as a value and as a quoted key.
fn quoted(text: &str) -> String {
    toml::Value::String(text.to_string()).to_string()
}

impl Default for ConfigFileRecord {
    fn default() -> Self {
        Self::new(DEFAULT_HOTKEY, DEFAULT_TOGGLE)
    }
}
