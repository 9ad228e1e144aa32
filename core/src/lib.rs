//! HideUI core: hotkey-driven UI hiding with live config reload.
//!
//! # Architecture
//!
//! ```text
//!  host frame thread                    notify thread
//!  ─────────────────                    ─────────────
//!  HideUi::tick()                       file event
//!        │                                   │
//!        ▼                                   ▼
//!  ToggleController ──read/flip──▶ ConfigStore ◀──reload── ConfigWatcher
//!        │                        (hotkey, toggle)          (consumer thread)
//!        ▼
//!  host UI panels (menu hidden / combat HUD active)
//! ```

pub mod controller;
pub mod host;
pub mod input;
pub mod session;
pub mod store;
pub mod watcher;

#[cfg(test)]
mod testing;

pub use controller::{TickOutcome, ToggleController};
pub use host::{Keyboard, PrimaryPanel, SecondaryPanel, UiHost, UiTargets};
pub use input::{HotkeyBinding, KeyCode};
pub use session::{HideUi, default_config_path};
pub use store::{ConfigSnapshot, ConfigStore, ReloadError, ReloadOutcome, StoreError};
pub use watcher::{ConfigWatcher, WatchError};

pub use hideui_types::ToggleState;
