//! A stand-in host: stdin lines drive frames, panels are plain flags.

use std::collections::HashSet;

use hideui_core::{KeyCode, Keyboard, PrimaryPanel, SecondaryPanel, UiHost, UiTargets};

#[derive(Debug, Default)]
pub struct SimKeyboard {
    held: HashSet<KeyCode>,
    pressed: HashSet<KeyCode>,
}

impl SimKeyboard {
    /// Start a new frame with exactly `keys` held.
    pub fn advance(&mut self, keys: HashSet<KeyCode>) {
        self.pressed = keys.difference(&self.held).copied().collect();
        self.held = keys;
    }
}

impl Keyboard for SimKeyboard {
    fn is_key_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    fn is_key_down_this_frame(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }
}

#[derive(Debug, Default)]
pub struct GameMenu {
    pub hide_ui: bool,
}

impl PrimaryPanel for GameMenu {
    fn is_hidden(&self) -> bool {
        self.hide_ui
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hide_ui = hidden;
    }
}

#[derive(Debug)]
pub struct CombatHud {
    pub active: bool,
}

impl SecondaryPanel for CombatHud {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// UI that becomes available after a number of loading frames.
#[derive(Debug)]
pub struct SimUi {
    loading_frames: u32,
    pub menu: GameMenu,
    pub combat: CombatHud,
}

impl SimUi {
    pub fn new(loading_frames: u32) -> Self {
        Self {
            loading_frames,
            menu: GameMenu::default(),
            combat: CombatHud { active: true },
        }
    }

    /// Count down one loading frame.
    pub fn advance(&mut self) {
        self.loading_frames = self.loading_frames.saturating_sub(1);
    }
}

impl UiHost for SimUi {
    type Primary = GameMenu;
    type Secondary = CombatHud;

    fn is_ready(&self) -> bool {
        self.loading_frames == 0
    }

    fn ui_targets(&mut self) -> Option<UiTargets<'_, GameMenu, CombatHud>> {
        if !self.is_ready() {
            return None;
        }
        Some(UiTargets {
            primary: &mut self.menu,
            secondary: &mut self.combat,
        })
    }
}

/// Parse one input line into the set of held keys.
///
/// Names may be separated by spaces or `+`.
pub fn parse_held_keys(line: &str) -> Result<HashSet<KeyCode>, String> {
    line.split(|c: char| c.is_whitespace() || c == '+')
        .filter(|token| !token.is_empty())
        .map(|token| KeyCode::from_name(token).ok_or_else(|| token.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_space_and_plus_separated_keys() {
        let keys = parse_held_keys("LeftControl + H  F7").unwrap();
        assert_eq!(keys.len(), 3);
        assert!(keys.contains(&KeyCode::F7));
        assert!(parse_held_keys("").unwrap().is_empty());
        assert_eq!(parse_held_keys("H Ctrl").unwrap_err(), "Ctrl");
    }

    #[test]
    fn ui_is_unavailable_while_loading() {
        let mut ui = SimUi::new(2);
        assert!(ui.ui_targets().is_none());
        ui.advance();
        ui.advance();
        assert!(ui.ui_targets().is_some());
    }
}
