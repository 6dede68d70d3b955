#![forbid(unsafe_code)]

//! Canonical input event types.
//!
//! Hosts report keyboard input as key *names* — and depending on the engine
//! those names come in two dialects: the modern ones (`"Escape"`,
//! `"ArrowLeft"`) and the legacy ones (`"Esc"`, `"Left"`, `"Spacebar"`).
//! [`Key::from_name`] folds both dialects into one canonical enum before any
//! dispatch-table lookup, so the rest of the crate never matches on raw
//! strings.
//!
//! # Design Notes
//!
//! - `Modifiers` use bitflags for easy combination
//! - A key name of exactly one character maps to [`Key::Char`]
//! - Unrecognized multi-character names map to `None` and are ignored
//!   upstream rather than treated as errors

use bitflags::bitflags;

/// Canonical key identity after name normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A regular character key (including `' '` for the space bar).
    Char(char),

    /// Enter/Return key.
    Enter,

    /// Escape key (`"Escape"` or legacy `"Esc"`).
    Escape,

    /// Tab key.
    Tab,

    /// Home key.
    Home,

    /// End key.
    End,

    /// Page Up key.
    PageUp,

    /// Page Down key.
    PageDown,

    /// Up arrow key (`"ArrowUp"` or legacy `"Up"`).
    Up,

    /// Down arrow key (`"ArrowDown"` or legacy `"Down"`).
    Down,

    /// Left arrow key (`"ArrowLeft"` or legacy `"Left"`).
    Left,

    /// Right arrow key (`"ArrowRight"` or legacy `"Right"`).
    Right,
}

impl Key {
    /// Normalize a host-reported key name into a canonical [`Key`].
    ///
    /// Returns `None` for names this crate has no use for (function keys,
    /// media keys, dead keys, ...). Callers treat `None` as "not handled".
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let key = match name {
            "Enter" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            "Home" => Self::Home,
            "End" => Self::End,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            "ArrowUp" | "Up" => Self::Up,
            "ArrowDown" | "Down" => Self::Down,
            "ArrowLeft" | "Left" => Self::Left,
            "ArrowRight" | "Right" => Self::Right,
            "Spacebar" => Self::Char(' '),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => return None,
                }
            }
        };
        Some(key)
    }

    /// The printable character this key inserts, if any.
    ///
    /// Whitespace (including the space bar) is not considered printable;
    /// space is an activation key in menu contexts, not type-ahead input.
    #[must_use]
    pub fn printable_char(&self) -> Option<char> {
        match self {
            Self::Char(c) if !c.is_whitespace() => Some(*c),
            _ => None,
        }
    }

    /// Whether this key activates the focused item (Enter or Space).
    #[must_use]
    pub fn is_activation(&self) -> bool {
        matches!(self, Self::Enter | Self::Char(' '))
    }
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// A keyboard event delivered by the boundary adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The canonical key.
    pub key: Key,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a new key event with no modifiers.
    #[must_use]
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Build a key event straight from a host key name.
    ///
    /// Returns `None` when the name does not normalize (see [`Key::from_name`]).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Key::from_name(name).map(Self::new)
    }

    /// Whether a shortcut modifier (Ctrl, Alt, or Super) is held.
    ///
    /// Shortcut chords belong to the host application, not the menubar;
    /// the dispatcher passes them through untouched.
    #[must_use]
    pub const fn has_shortcut_modifier(&self) -> bool {
        self.modifiers
            .intersects(Modifiers::CTRL.union(Modifiers::ALT).union(Modifiers::SUPER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modern_names_normalize() {
        assert_eq!(Key::from_name("Escape"), Some(Key::Escape));
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_name("ArrowUp"), Some(Key::Up));
        assert_eq!(Key::from_name("PageDown"), Some(Key::PageDown));
    }

    #[test]
    fn legacy_names_normalize_to_the_same_keys() {
        assert_eq!(Key::from_name("Esc"), Key::from_name("Escape"));
        assert_eq!(Key::from_name("Left"), Key::from_name("ArrowLeft"));
        assert_eq!(Key::from_name("Right"), Key::from_name("ArrowRight"));
        assert_eq!(Key::from_name("Up"), Key::from_name("ArrowUp"));
        assert_eq!(Key::from_name("Down"), Key::from_name("ArrowDown"));
        assert_eq!(Key::from_name("Spacebar"), Some(Key::Char(' ')));
    }

    #[test]
    fn single_characters_become_char_keys() {
        assert_eq!(Key::from_name("a"), Some(Key::Char('a')));
        assert_eq!(Key::from_name("Z"), Some(Key::Char('Z')));
        assert_eq!(Key::from_name(" "), Some(Key::Char(' ')));
        // Multi-byte single characters still count as one key.
        assert_eq!(Key::from_name("é"), Some(Key::Char('é')));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(Key::from_name("F5"), None);
        assert_eq!(Key::from_name("MediaPlayPause"), None);
        assert_eq!(Key::from_name(""), None);
    }

    #[test]
    fn printable_excludes_whitespace() {
        assert_eq!(Key::Char('c').printable_char(), Some('c'));
        assert_eq!(Key::Char(' ').printable_char(), None);
        assert_eq!(Key::Enter.printable_char(), None);
    }

    #[test]
    fn space_and_enter_are_activation_keys() {
        assert!(Key::Enter.is_activation());
        assert!(Key::Char(' ').is_activation());
        assert!(!Key::Char('x').is_activation());
        assert!(!Key::Down.is_activation());
    }

    #[test]
    fn shortcut_modifier_detection() {
        let plain = KeyEvent::new(Key::Char('a'));
        assert!(!plain.has_shortcut_modifier());

        let shifted = KeyEvent::new(Key::Char('A')).with_modifiers(Modifiers::SHIFT);
        assert!(!shifted.has_shortcut_modifier());

        let chord = KeyEvent::new(Key::Char('l')).with_modifiers(Modifiers::CTRL);
        assert!(chord.has_shortcut_modifier());
    }
}
