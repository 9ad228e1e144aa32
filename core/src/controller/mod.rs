//! Per-frame hotkey handling and UI visibility.
//!
//! Each tick:
//! 1. skip entirely while the host UI targets are unavailable;
//! 2. on a hotkey edge-press, flip the stored toggle;
//! 3. if the toggle is `On` and the UI is shown, flip the UI to hidden.
//!
//! There is no automatic un-hide: turning the toggle `Off` leaves the UI as
//! it is. Only [`ToggleController::flip_visibility`] or the host itself
//! brings it back.


use std::sync::Arc;

use hideui_types::ToggleState;

use crate::host::{self, Keyboard, PrimaryPanel, UiHost};
use crate::input;
use crate::store::ConfigStore;

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Host UI not available yet; nothing was read or changed.
    Skipped,
    Ran {
        /// New toggle value if the hotkey was pressed this frame.
        toggled: Option<ToggleState>,
        /// The UI visibility primitive was invoked.
        flipped_ui: bool,
    },
}

impl TickOutcome {
    pub fn is_idle(self) -> bool {
        matches!(
            self,
            TickOutcome::Ran {
                toggled: None,
                flipped_ui: false
            }
        )
    }
}

/// Driven by the host once per frame. Holds no state besides the shared store.
#[derive(Debug, Clone)]
pub struct ToggleController {
    store: Arc<ConfigStore>,
}

impl ToggleController {
    pub fn new(store: Arc<ConfigStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<ConfigStore> {
        &self.store
    }

    pub fn tick<K, U>(&self, keyboard: &K, ui: &mut U) -> TickOutcome
    where
        K: Keyboard,
        U: UiHost + ?Sized,
    {
        if !ui.is_ready() {
            return TickOutcome::Skipped;
        }
        let Some(targets) = ui.ui_targets() else {
            return TickOutcome::Skipped;
        };

        let snapshot = self.store.snapshot();

        let toggled = if input::is_key_down(&snapshot.hotkey, keyboard) {
            let toggle = self.store.flip_toggle();
            tracing::debug!(hotkey = %snapshot.hotkey, toggle = %toggle, "Hotkey pressed");
            Some(toggle)
        } else {
            None
        };

        let toggle = toggled.unwrap_or(snapshot.toggle);
        let flipped_ui = toggle.is_on() && !targets.primary.is_hidden();
        if flipped_ui {
            let hidden = host::flip_visibility(targets);
            tracing::debug!(hidden, "UI visibility flipped");
        }

        TickOutcome::Ran {
            toggled,
            flipped_ui,
        }
    }

    /// Flip UI visibility by hand, regardless of the toggle.
    ///
    /// Returns the new hidden flag, or `None` if the UI is not available.
    pub fn flip_visibility<U>(&self, ui: &mut U) -> Option<bool>
    where
        U: UiHost + ?Sized,
    {
        if !ui.is_ready() {
            return None;
        }
        let targets = ui.ui_targets()?;
        Some(host::flip_visibility(targets))
    }
}
