use std::path::Path;

use arena_common::Color;
use arena_kernel::{Agent, MovementLaw, SeekParams, World, DEFAULT_STEP};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One agent entry in a scenario file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSpec {
    pub name: String,
    pub position: [f32; 3],
    #[serde(default = "default_color")]
    pub color: [f32; 3],
    /// Name of the agent to seek, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seek: Option<String>,
}

fn default_color() -> [f32; 3] {
    Color::WHITE.to_array()
}

impl AgentSpec {
    pub fn new(name: &str, position: [f32; 3], color: Color) -> Self {
        Self {
            name: name.to_string(),
            position,
            color: color.to_array(),
            seek: None,
        }
    }

    pub fn seeking(mut self, target: &str) -> Self {
        self.seek = Some(target.to_string());
        self
    }
}

/// Scenario configuration, usually loaded from YAML.
///
/// ```yaml
/// step: 0.1
/// movement: arrive
/// agents:
///   - { name: green, position: [10, 0.5, 10], color: [0, 1, 0], seek: blue }
///   - { name: blue, position: [20, 0.5, 10], color: [0, 0, 1] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// World units moved per tick.
    pub step: f32,
    pub movement: MovementLaw,
    /// Gravity handed to the physics world on start.
    pub gravity: [f32; 3],
    pub agents: Vec<AgentSpec>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            movement: MovementLaw::default(),
            gravity: [0.0, -9.81, 0.0],
            agents: Vec::new(),
        }
    }
}

impl ScenarioConfig {
    /// The stock arena: green seeks blue, red stays put.
    pub fn demo() -> Self {
        Self {
            agents: vec![
                AgentSpec::new("green", [10.0, 0.5, 10.0], Color::GREEN).seeking("blue"),
                AgentSpec::new("blue", [20.0, 0.5, 10.0], Color::BLUE),
                AgentSpec::new("red", [0.0, 0.5, 0.0], Color::RED),
            ],
            ..Self::default()
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&text)?;
        tracing::debug!(path = %path.display(), agents = config.agents.len(), "loaded scenario");
        Ok(config)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn seek_params(&self) -> Result<SeekParams, ConfigError> {
        Ok(SeekParams::new(self.step, self.movement)?)
    }

    pub fn gravity(&self) -> Vec3 {
        Vec3::from_array(self.gravity)
    }

    /// Spawn every agent, then assign seek targets by name.
    ///
    /// Targets are assigned only after all agents exist, so an agent may seek
    /// one declared later in the file. The seeker is the entry itself, never
    /// whichever agent first carries its name; only the target is looked up.
    pub fn build_world(&self) -> Result<World, ConfigError> {
        let mut world = World::with_params(self.seek_params()?);
        let mut ids = Vec::with_capacity(self.agents.len());
        for spec in &self.agents {
            ids.push(world.spawn(Agent::new(
                spec.name.clone(),
                Vec3::from_array(spec.position),
                Color::from(spec.color).clamped(),
            ))?);
        }
        for (spec, &seeker) in self.agents.iter().zip(&ids) {
            if let Some(target) = &spec.seek {
                let target = world.agents().resolve(target)?;
                world.set_seek_target(seeker, target)?;
            }
        }
        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_common::AgentId;
    use arena_kernel::{KernelError, SeekState};
    use std::io::Write;

    #[test]
    fn empty_yaml_uses_defaults() {
        let cfg = ScenarioConfig::from_yaml_str("{}").unwrap();
        assert_eq!(cfg, ScenarioConfig::default());
        assert_eq!(cfg.step, 0.1);
        assert_eq!(cfg.movement, MovementLaw::Arrive);
    }

    #[test]
    fn parses_agents_and_overrides() {
        let yaml = r#"
step: 0.25
movement: overshoot
agents:
  - name: green
    position: [10, 0.5, 10]
    color: [0, 1, 0]
    seek: blue
  - name: blue
    position: [20, 0.5, 10]
"#;
        let cfg = ScenarioConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.step, 0.25);
        assert_eq!(cfg.movement, MovementLaw::Overshoot);
        assert_eq!(cfg.agents.len(), 2);
        assert_eq!(cfg.agents[0].seek.as_deref(), Some("blue"));
        assert_eq!(cfg.agents[1].color, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn build_world_resolves_forward_references() {
        let world = ScenarioConfig::demo().build_world().unwrap();
        assert_eq!(world.agent_count(), 3);
        let green = world.find_by_name("green").unwrap();
        let blue = world.find_by_name("blue").unwrap();
        let agent = world.agent(green).unwrap();
        assert_eq!(agent.seek_target(), Some(blue));
        assert_eq!(agent.seek_state(), SeekState::Seeking);
    }

    #[test]
    fn duplicate_names_keep_their_own_targets() {
        let yaml = r#"
agents:
  - name: dup
    position: [0, 0, 0]
  - name: dup
    position: [5, 0, 0]
    seek: target
  - name: target
    position: [10, 0, 0]
"#;
        let world = ScenarioConfig::from_yaml_str(yaml)
            .unwrap()
            .build_world()
            .unwrap();
        let first = world.agent(AgentId(0)).unwrap();
        let second = world.agent(AgentId(1)).unwrap();
        assert_eq!(first.seek_target(), None);
        assert_eq!(first.seek_state(), SeekState::Idle);
        assert_eq!(second.seek_target(), Some(AgentId(2)));
        assert_eq!(second.seek_state(), SeekState::Seeking);
    }

    #[test]
    fn later_duplicate_may_seek_its_namesake() {
        let yaml = r#"
agents:
  - name: a
    position: [0, 0, 0]
  - name: a
    position: [3, 0, 0]
    seek: a
"#;
        let world = ScenarioConfig::from_yaml_str(yaml)
            .unwrap()
            .build_world()
            .unwrap();
        assert_eq!(world.agent(AgentId(1)).unwrap().seek_target(), Some(AgentId(0)));
        assert_eq!(world.agent(AgentId(0)).unwrap().seek_target(), None);
    }

    #[test]
    fn unknown_seek_target_is_rejected() {
        let mut cfg = ScenarioConfig::demo();
        cfg.agents[2].seek = Some("purple".into());
        let err = cfg.build_world().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Kernel(KernelError::AgentNotFound(ref n)) if n == "purple"
        ));
    }

    #[test]
    fn invalid_step_is_rejected() {
        let cfg = ScenarioConfig::from_yaml_str("step: -0.5").unwrap();
        assert!(matches!(
            cfg.build_world(),
            Err(ConfigError::Kernel(KernelError::InvalidStep(_)))
        ));
    }

    #[test]
    fn bad_yaml_is_an_error() {
        let err = ScenarioConfig::from_yaml_str("movement: teleport").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let yaml = ScenarioConfig::demo().to_yaml().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let cfg = ScenarioConfig::load(file.path()).unwrap();
        assert_eq!(cfg, ScenarioConfig::demo());
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ScenarioConfig::load(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("missing.yaml"));
    }
}
