//! Fake host collaborators for tests.

use std::collections::HashSet;

use crate::host::{Keyboard, PrimaryPanel, SecondaryPanel, UiHost, UiTargets};
use crate::input::KeyCode;

/// Keyboard that derives "down this frame" from the previous frame's held set.
#[derive(Debug, Default)]
pub struct FakeKeyboard {
    held: HashSet<KeyCode>,
    pressed: HashSet<KeyCode>,
}

impl FakeKeyboard {
    /// Advance one frame with exactly `keys` held.
    pub fn frame(&mut self, keys: &[KeyCode]) {
        let next: HashSet<KeyCode> = keys.iter().copied().collect();
        self.pressed = next.difference(&self.held).copied().collect();
        self.held = next;
    }
}

impl Keyboard for FakeKeyboard {
    fn is_key_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    fn is_key_down_this_frame(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }
}

#[derive(Debug, Default)]
pub struct FakeMenu {
    pub hidden: bool,
    pub set_hidden_calls: usize,
}

impl PrimaryPanel for FakeMenu {
    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.set_hidden_calls += 1;
        self.hidden = hidden;
    }
}

#[derive(Debug)]
pub struct FakeCombat {
    pub active: bool,
}

impl SecondaryPanel for FakeCombat {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Host UI with a shown menu and an active combat HUD.
#[derive(Debug)]
pub struct FakeUi {
    pub loaded: bool,
    pub menu: FakeMenu,
    pub combat: FakeCombat,
}

impl FakeUi {
    pub fn ready() -> Self {
        Self {
            loaded: true,
            menu: FakeMenu::default(),
            combat: FakeCombat { active: true },
        }
    }

    pub fn loading() -> Self {
        Self {
            loaded: false,
            ..Self::ready()
        }
    }

    /// Number of visibility flips performed on this UI.
    pub fn flips(&self) -> usize {
        self.menu.set_hidden_calls
    }
}

impl UiHost for FakeUi {
    type Primary = FakeMenu;
    type Secondary = FakeCombat;

    fn is_ready(&self) -> bool {
        self.loaded
    }

    fn ui_targets(&mut self) -> Option<UiTargets<'_, FakeMenu, FakeCombat>> {
        if !self.loaded {
            return None;
        }
        Some(UiTargets {
            primary: &mut self.menu,
            secondary: &mut self.combat,
        })
    }
}
