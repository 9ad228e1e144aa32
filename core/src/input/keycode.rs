//! Recognized key names.
//!
//! The set is fixed: a hotkey in the config file may only use names from
//! this table. Lookup is exact and case-sensitive, matching how the names
//! are written back out.

use std::fmt;

macro_rules! key_codes {
    ($($variant:ident = $name:tt),* $(,)?) => {
        /// A physical key or mouse button the host can report on.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum KeyCode {
            $($variant,)*
        }

        impl KeyCode {
            const ALL: &'static [KeyCode] = &[$(KeyCode::$variant,)*];

            /// Name used in the config file.
            pub fn name(self) -> &'static str {
                match self {
                    $(KeyCode::$variant => $name,)*
                }
            }
        }

        static KEY_NAMES: phf::Map<&'static str, KeyCode> = phf::phf_map! {
            $($name => KeyCode::$variant,)*
        };
    };
}

key_codes! {
    None = "None", Backspace = "Backspace", Tab = "Tab", Clear = "Clear", Return = "Return",
    Pause = "Pause", Escape = "Escape", Space = "Space", Delete = "Delete", Insert = "Insert",
    Home = "Home", End = "End", PageUp = "PageUp", PageDown = "PageDown", UpArrow = "UpArrow",
    DownArrow = "DownArrow", LeftArrow = "LeftArrow", RightArrow = "RightArrow",
    Alpha0 = "Alpha0", Alpha1 = "Alpha1", Alpha2 = "Alpha2", Alpha3 = "Alpha3",
    Alpha4 = "Alpha4", Alpha5 = "Alpha5", Alpha6 = "Alpha6", Alpha7 = "Alpha7",
    Alpha8 = "Alpha8", Alpha9 = "Alpha9", A = "A", B = "B", C = "C", D = "D", E = "E", F = "F",
    G = "G", H = "H", I = "I", J = "J", K = "K", L = "L", M = "M", N = "N", O = "O", P = "P",
    Q = "Q", R = "R", S = "S", T = "T", U = "U", V = "V", W = "W", X = "X", Y = "Y", Z = "Z",
    Keypad0 = "Keypad0", Keypad1 = "Keypad1", Keypad2 = "Keypad2", Keypad3 = "Keypad3",
    Keypad4 = "Keypad4", Keypad5 = "Keypad5", Keypad6 = "Keypad6", Keypad7 = "Keypad7",
    Keypad8 = "Keypad8", Keypad9 = "Keypad9", KeypadPeriod = "KeypadPeriod",
    KeypadDivide = "KeypadDivide", KeypadMultiply = "KeypadMultiply",
    KeypadMinus = "KeypadMinus", KeypadPlus = "KeypadPlus", KeypadEnter = "KeypadEnter",
    KeypadEquals = "KeypadEquals", F1 = "F1", F2 = "F2", F3 = "F3", F4 = "F4", F5 = "F5",
    F6 = "F6", F7 = "F7", F8 = "F8", F9 = "F9", F10 = "F10", F11 = "F11", F12 = "F12",
    F13 = "F13", F14 = "F14", F15 = "F15", Numlock = "Numlock", CapsLock = "CapsLock",
    ScrollLock = "ScrollLock", RightShift = "RightShift", LeftShift = "LeftShift",
    RightControl = "RightControl", LeftControl = "LeftControl", RightAlt = "RightAlt",
    LeftAlt = "LeftAlt", RightCommand = "RightCommand", LeftCommand = "LeftCommand",
    LeftWindows = "LeftWindows", RightWindows = "RightWindows", AltGr = "AltGr",
    Print = "Print", SysReq = "SysReq", Break = "Break", Menu = "Menu",
    BackQuote = "BackQuote", Minus = "Minus", Equals = "Equals", LeftBracket = "LeftBracket",
    RightBracket = "RightBracket", Backslash = "Backslash", Semicolon = "Semicolon",
    Quote = "Quote", Comma = "Comma", Period = "Period", Slash = "Slash", Mouse0 = "Mouse0",
    Mouse1 = "Mouse1", Mouse2 = "Mouse2", Mouse3 = "Mouse3", Mouse4 = "Mouse4",
    Mouse5 = "Mouse5", Mouse6 = "Mouse6",
}

impl KeyCode {
    /// Every recognized key, in table order.
    pub fn all() -> &'static [KeyCode] {
        Self::ALL
    }

    /// Look up a key by its config-file name.
    pub fn from_name(name: &str) -> Option<Self> {
        KEY_NAMES.get(name).copied()
    }

    pub fn is_none(self) -> bool {
        self == KeyCode::None
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Comma-separated list of every key name, for "acceptable values" help text.
pub fn acceptable_key_names() -> String {
    KeyCode::all()
        .iter()
        .map(|k| k.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_round_trips_through_its_name() {
        for &key in KeyCode::all() {
            assert_eq!(KeyCode::from_name(key.name()), Some(key), "{key:?}");
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(KeyCode::from_name("LeftControl"), Some(KeyCode::LeftControl));
        assert_eq!(KeyCode::from_name("leftcontrol"), None);
        assert_eq!(KeyCode::from_name("Ctrl"), None);
    }

    #[test]
    fn acceptable_names_list_starts_with_none() {
        let names = acceptable_key_names();
        assert!(names.starts_with("None, Backspace"));
        assert!(names.contains("Mouse6"));
    }
}
