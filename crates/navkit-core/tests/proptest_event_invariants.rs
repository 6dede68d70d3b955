//! Property-based invariant tests for key normalization.
//!
//! 1. Normalization never panics, for any host-supplied name.
//! 2. Every single-character name normalizes to that character.
//! 3. Legacy and modern dialect names agree after normalization.
//! 4. Printable characters are never whitespace.
//! 5. Shift alone is never treated as a shortcut modifier.

use navkit_core::event::{Key, KeyEvent, Modifiers};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

const DIALECT_PAIRS: &[(&str, &str)] = &[
    ("Esc", "Escape"),
    ("Up", "ArrowUp"),
    ("Down", "ArrowDown"),
    ("Left", "ArrowLeft"),
    ("Right", "ArrowRight"),
    ("Spacebar", " "),
];

// ═════════════════════════════════════════════════════════════════════════
// 1. Normalization is total
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn from_name_never_panics(name in ".{0,12}") {
        let _ = Key::from_name(&name);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Single characters always normalize
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn single_characters_normalize_to_char(c in any::<char>()) {
        let name = c.to_string();
        prop_assert_eq!(Key::from_name(&name), Some(Key::Char(c)));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Dialects agree
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn legacy_and_modern_names_agree(pair in prop::sample::select(DIALECT_PAIRS)) {
        let (legacy, modern) = pair;
        let normalized = Key::from_name(legacy);
        prop_assert!(normalized.is_some());
        prop_assert_eq!(normalized, Key::from_name(modern));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Printable characters are never whitespace
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn printable_chars_are_not_whitespace(c in any::<char>()) {
        if let Some(printable) = Key::Char(c).printable_char() {
            prop_assert!(!printable.is_whitespace());
            prop_assert_eq!(printable, c);
        } else {
            prop_assert!(c.is_whitespace());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Shift alone is not a shortcut chord
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn shift_alone_is_never_a_shortcut(c in any::<char>()) {
        let event = KeyEvent::new(Key::Char(c)).with_modifiers(Modifiers::SHIFT);
        prop_assert!(!event.has_shortcut_modifier());

        let chord = KeyEvent::new(Key::Char(c))
            .with_modifiers(Modifiers::SHIFT | Modifiers::CTRL);
        prop_assert!(chord.has_shortcut_modifier());
    }
}
