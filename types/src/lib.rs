//! Shared configuration types for HideUI.
//!
//! These types describe what is persisted on disk. Parsing the hotkey text
//! into key codes happens in `hideui-core`, which owns the key table.

pub mod record;
pub mod toggle;

pub use record::{ConfigFileRecord, GeneralSection};
pub use toggle::{ToggleParseError, ToggleState};
