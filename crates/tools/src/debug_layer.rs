use arena_input::Action;

/// Visibility state of the scene inspector overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugLayer {
    visible: bool,
}

impl DebugLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn toggle(&mut self) {
        if self.visible {
            self.hide();
        } else {
            self.show();
        }
        tracing::debug!(visible = self.visible, "debug layer toggled");
    }

    /// React to an input action. Returns true if the layer consumed it.
    pub fn handle(&mut self, action: Action) -> bool {
        match action {
            Action::ToggleInspector => {
                self.toggle();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_input::{InputMap, KeyChord};

    #[test]
    fn starts_hidden() {
        assert!(!DebugLayer::new().is_visible());
    }

    #[test]
    fn chord_toggles_visibility() {
        let map = InputMap::default();
        let mut layer = DebugLayer::new();

        assert!(layer.handle(map.resolve(KeyChord::inspector())));
        assert!(layer.is_visible());
        assert!(layer.handle(map.resolve(KeyChord::inspector())));
        assert!(!layer.is_visible());
    }

    #[test]
    fn other_actions_ignored() {
        let mut layer = DebugLayer::new();
        assert!(!layer.handle(Action::Quit));
        assert!(!layer.handle(Action::Noop));
        assert!(!layer.is_visible());
    }
}
