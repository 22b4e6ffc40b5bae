use arena_common::{AgentId, Color};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Where an agent is in its seek lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeekState {
    /// No target assigned.
    #[default]
    Idle,
    /// Moving toward the target each tick.
    Seeking,
    /// Sitting on the target's position. Reverts to `Seeking` if the target moves.
    Arrived,
}

/// A named, colored, positioned object that may seek another agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    name: String,
    position: Vec3,
    color: Color,
    seek_target: Option<AgentId>,
    state: SeekState,
}

impl Agent {
    pub fn new(name: impl Into<String>, position: Vec3, color: Color) -> Self {
        Self {
            name: name.into(),
            position,
            color,
            seek_target: None,
            state: SeekState::Idle,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn seek_target(&self) -> Option<AgentId> {
        self.seek_target
    }

    pub fn seek_state(&self) -> SeekState {
        self.state
    }

    /// Record a target handle. Validation is the registry's job.
    pub(crate) fn assign_target(&mut self, target: AgentId) {
        self.seek_target = Some(target);
        self.state = SeekState::Seeking;
    }

    pub(crate) fn clear_target(&mut self) {
        self.seek_target = None;
        self.state = SeekState::Idle;
    }

    pub(crate) fn set_state(&mut self, state: SeekState) {
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_agent_is_idle() {
        let a = Agent::new("green", Vec3::new(10.0, 0.5, 10.0), Color::GREEN);
        assert_eq!(a.name(), "green");
        assert_eq!(a.position(), Vec3::new(10.0, 0.5, 10.0));
        assert_eq!(a.color(), Color::GREEN);
        assert_eq!(a.seek_target(), None);
        assert_eq!(a.seek_state(), SeekState::Idle);
    }

    #[test]
    fn position_accessors() {
        let mut a = Agent::new("a", Vec3::ZERO, Color::WHITE);
        a.set_position(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(a.position(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn assign_and_clear_target() {
        let mut a = Agent::new("a", Vec3::ZERO, Color::WHITE);
        a.assign_target(AgentId(1));
        assert_eq!(a.seek_target(), Some(AgentId(1)));
        assert_eq!(a.seek_state(), SeekState::Seeking);

        a.clear_target();
        assert_eq!(a.seek_target(), None);
        assert_eq!(a.seek_state(), SeekState::Idle);
    }
}
