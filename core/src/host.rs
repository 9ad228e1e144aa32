//! Interfaces the host application provides.
//!
//! The core never owns host objects. Each tick the host lends the two UI
//! panels through [`UiHost::ui_targets`], and answers keyboard queries
//! through [`Keyboard`].

use crate::input::KeyCode;

/// Per-frame keyboard state.
pub trait Keyboard {
    /// Key is currently held.
    fn is_key_held(&self, key: KeyCode) -> bool;

    /// Key went from released to held on this frame.
    fn is_key_down_this_frame(&self, key: KeyCode) -> bool;
}

/// The panel carrying the host's "hidden" flag (the game menu).
pub trait PrimaryPanel {
    fn is_hidden(&self) -> bool;
    fn set_hidden(&mut self, hidden: bool);
}

/// The panel switched active/inactive in lockstep with the primary (the combat HUD).
pub trait SecondaryPanel {
    fn set_active(&mut self, active: bool);
}

/// Both UI targets, borrowed from the host for one tick.
pub struct UiTargets<'a, P: ?Sized, S: ?Sized> {
    pub primary: &'a mut P,
    pub secondary: &'a mut S,
}

/// Host-side access to the visibility targets.
pub trait UiHost {
    type Primary: PrimaryPanel + ?Sized;
    type Secondary: SecondaryPanel + ?Sized;

    /// Host has finished loading. Defaults to "ready whenever targets exist".
    fn is_ready(&self) -> bool {
        true
    }

    /// Both targets, or `None` while either is not available yet.
    fn ui_targets(&mut self) -> Option<UiTargets<'_, Self::Primary, Self::Secondary>>;
}

/// Flip UI visibility, keeping the two panels in lockstep.
///
/// The secondary panel becomes active exactly when the primary stops being
/// hidden. Returns the new `hidden` value of the primary panel.
pub fn flip_visibility<P, S>(targets: UiTargets<'_, P, S>) -> bool
where
    P: PrimaryPanel + ?Sized,
    S: SecondaryPanel + ?Sized,
{
    let was_hidden = targets.primary.is_hidden();
    targets.secondary.set_active(was_hidden);
    targets.primary.set_hidden(!was_hidden);
    !was_hidden
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeUi;

    #[test]
    fn flip_keeps_panels_in_lockstep() {
        let mut ui = FakeUi::ready();

        let hidden = flip_visibility(ui.ui_targets().unwrap());
        assert!(hidden);
        assert!(ui.menu.hidden);
        assert!(!ui.combat.active);

        let hidden = flip_visibility(ui.ui_targets().unwrap());
        assert!(!hidden);
        assert!(!ui.menu.hidden);
        assert!(ui.combat.active);
    }
}
