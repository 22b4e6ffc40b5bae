//! Input mapping: raw key chords resolved to high-level actions.
//!
//! # Invariants
//! - Consumers handle actions, never raw key events.
//! - Unbound chords resolve to `Action::Noop`.

pub mod action;

pub use action::{Action, InputMap, Key, KeyChord, Modifiers};

pub fn crate_info() -> &'static str {
    "arena-input v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("input"));
    }
}
