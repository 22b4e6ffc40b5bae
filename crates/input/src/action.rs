use std::collections::HashMap;

/// A high-level action produced from keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Show or hide the scene inspector.
    ToggleInspector,
    /// Stop the frame loop.
    Quit,
    /// Input with no binding.
    Noop,
}

/// Keys the arena cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Escape,
}

impl Key {
    /// Character keys compare case-insensitively.
    fn normalized(self) -> Self {
        match self {
            Self::Char(c) => Self::Char(c.to_ascii_uppercase()),
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };
    pub const SHIFT_CTRL_ALT: Self = Self {
        shift: true,
        ctrl: true,
        alt: true,
    };
}

/// A key together with the modifiers held when it was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyChord {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key: key.normalized(),
            modifiers,
        }
    }

    /// Shift+Ctrl+Alt+I.
    pub fn inspector() -> Self {
        Self::new(Key::Char('I'), Modifiers::SHIFT_CTRL_ALT)
    }
}

/// Chord → action bindings.
#[derive(Debug, Clone)]
pub struct InputMap {
    bindings: HashMap<KeyChord, Action>,
}

impl Default for InputMap {
    fn default() -> Self {
        let mut map = Self::empty();
        map.bind(KeyChord::inspector(), Action::ToggleInspector);
        map.bind(KeyChord::new(Key::Escape, Modifiers::NONE), Action::Quit);
        map
    }
}

impl InputMap {
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind a chord, replacing any previous binding.
    pub fn bind(&mut self, chord: KeyChord, action: Action) {
        let chord = KeyChord::new(chord.key, chord.modifiers);
        self.bindings.insert(chord, action);
    }

    pub fn resolve(&self, chord: KeyChord) -> Action {
        let chord = KeyChord::new(chord.key, chord.modifiers);
        let action = self.bindings.get(&chord).copied().unwrap_or(Action::Noop);
        tracing::trace!(?chord, ?action, "resolved key chord");
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspector_chord_toggles() {
        let map = InputMap::default();
        assert_eq!(map.resolve(KeyChord::inspector()), Action::ToggleInspector);
    }

    #[test]
    fn lowercase_key_matches() {
        let map = InputMap::default();
        let chord = KeyChord {
            key: Key::Char('i'),
            modifiers: Modifiers::SHIFT_CTRL_ALT,
        };
        assert_eq!(map.resolve(chord), Action::ToggleInspector);
    }

    #[test]
    fn missing_modifier_is_noop() {
        let map = InputMap::default();
        let chord = KeyChord::new(
            Key::Char('I'),
            Modifiers {
                shift: true,
                ctrl: true,
                alt: false,
            },
        );
        assert_eq!(map.resolve(chord), Action::Noop);
        assert_eq!(
            map.resolve(KeyChord::new(Key::Char('I'), Modifiers::NONE)),
            Action::Noop
        );
    }

    #[test]
    fn escape_quits() {
        let map = InputMap::default();
        assert_eq!(
            map.resolve(KeyChord::new(Key::Escape, Modifiers::NONE)),
            Action::Quit
        );
    }

    #[test]
    fn rebinding_replaces() {
        let mut map = InputMap::empty();
        let chord = KeyChord::new(Key::Char('q'), Modifiers::NONE);
        map.bind(chord, Action::ToggleInspector);
        map.bind(chord, Action::Quit);
        assert_eq!(map.resolve(chord), Action::Quit);
    }
}
