//! Key names, hotkey bindings, and hotkey queries against the host keyboard.

mod hotkey;
mod keycode;

pub use hotkey::{HotkeyBinding, HotkeyParseError};
pub use keycode::{KeyCode, acceptable_key_names};

use crate::host::Keyboard;

/// True on the frame the primary key goes down while every modifier is held.
///
/// Edge-triggered: holding the key across frames reports `true` once.
pub fn is_key_down(binding: &HotkeyBinding, keyboard: &impl Keyboard) -> bool {
    binding.is_active()
        && keyboard.is_key_down_this_frame(binding.primary())
        && modifiers_held(binding, keyboard)
}

/// True on every frame the primary key and every modifier are held.
pub fn is_key_held(binding: &HotkeyBinding, keyboard: &impl Keyboard) -> bool {
    binding.is_active()
        && keyboard.is_key_held(binding.primary())
        && modifiers_held(binding, keyboard)
}

fn modifiers_held(binding: &HotkeyBinding, keyboard: &impl Keyboard) -> bool {
    binding
        .modifiers()
        .iter()
        .all(|&key| keyboard.is_key_held(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeKeyboard;

    #[test]
    fn down_requires_modifiers() {
        let binding = HotkeyBinding::default();
        let mut kb = FakeKeyboard::default();

        kb.frame(&[KeyCode::H]);
        assert!(!is_key_down(&binding, &kb));

        kb.frame(&[]);
        kb.frame(&[KeyCode::LeftControl, KeyCode::H]);
        assert!(is_key_down(&binding, &kb));
    }

    #[test]
    fn down_is_edge_held_is_level() {
        let binding: HotkeyBinding = "F7".parse().unwrap();
        let mut kb = FakeKeyboard::default();

        kb.frame(&[KeyCode::F7]);
        assert!(is_key_down(&binding, &kb));
        assert!(is_key_held(&binding, &kb));

        kb.frame(&[KeyCode::F7]);
        assert!(!is_key_down(&binding, &kb));
        assert!(is_key_held(&binding, &kb));
    }

    #[test]
    fn modifier_pressed_after_primary_does_not_trigger() {
        let binding = HotkeyBinding::default();
        let mut kb = FakeKeyboard::default();

        kb.frame(&[KeyCode::H]);
        kb.frame(&[KeyCode::H, KeyCode::LeftControl]);
        assert!(!is_key_down(&binding, &kb));
        assert!(is_key_held(&binding, &kb));
    }

    #[test]
    fn disabled_binding_never_matches() {
        let binding = HotkeyBinding::new(KeyCode::None, [KeyCode::LeftControl]);
        let mut kb = FakeKeyboard::default();

        kb.frame(&[KeyCode::None, KeyCode::LeftControl]);
        assert!(!is_key_down(&binding, &kb));
        assert!(!is_key_held(&binding, &kb));
    }
}
