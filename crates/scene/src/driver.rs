use arena_kernel::{TickReport, World, WorldEvent};
use serde::{Deserialize, Serialize};

use crate::config::ScenarioConfig;
use crate::descriptor::{SceneBuilder, SceneDescription};
use crate::error::SceneError;
use crate::physics::{NullPhysics, PhysicsWorld};

/// Totals over a run of frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub frames: u64,
    pub moves: usize,
    pub arrivals: usize,
    pub last_tick: u64,
}

/// Owns the world and calls its tick once per rendered frame.
///
/// The driver holds the world explicitly; nothing about the scene is global.
/// Frames are refused until `start` has brought the physics world up.
///
/// Each frame drains the world's event log, so the log never holds more than
/// one frame of events. The drained batch is kept until the next frame.
pub struct FrameDriver<P: PhysicsWorld> {
    world: World,
    physics: P,
    scene: SceneDescription,
    frames: u64,
    last_events: Vec<WorldEvent>,
}

impl FrameDriver<NullPhysics> {
    /// World, scene and headless physics from a scenario.
    pub fn from_scenario(config: &ScenarioConfig) -> Result<Self, SceneError> {
        let world = config.build_world()?;
        Ok(Self::new(world, NullPhysics::new(config.gravity())))
    }
}

impl<P: PhysicsWorld> FrameDriver<P> {
    /// Wrap a fully populated world. The scene is assembled from its agents.
    pub fn new(world: World, physics: P) -> Self {
        let scene = SceneBuilder::new().build(&world);
        Self::with_scene(world, physics, scene)
    }

    pub fn with_scene(world: World, physics: P, scene: SceneDescription) -> Self {
        Self {
            world,
            physics,
            scene,
            frames: 0,
            last_events: Vec::new(),
        }
    }

    /// One-time setup that must finish before the first frame.
    pub fn start(&mut self) -> Result<(), SceneError> {
        if self.physics.is_ready() {
            return Ok(());
        }
        self.physics.initialize()?;
        tracing::info!(
            agents = self.world.agent_count(),
            gravity = ?self.physics.gravity(),
            "driver started"
        );
        Ok(())
    }

    pub fn is_started(&self) -> bool {
        self.physics.is_ready()
    }

    /// Advance one frame: exactly one world tick, no time scaling.
    pub fn frame(&mut self) -> Result<TickReport, SceneError> {
        if !self.physics.is_ready() {
            return Err(SceneError::PhysicsNotReady);
        }
        let report = self.world.tick();
        self.last_events = self.world.drain_events();
        self.frames += 1;
        Ok(report)
    }

    /// Run `frames` frames back to back.
    pub fn run(&mut self, frames: u64) -> Result<RunSummary, SceneError> {
        let mut summary = RunSummary {
            last_tick: self.world.tick_count(),
            ..RunSummary::default()
        };
        for _ in 0..frames {
            let report = self.frame()?;
            summary.frames += 1;
            summary.moves += report.moved;
            summary.arrivals += report.arrived;
            summary.last_tick = report.tick;
        }
        Ok(summary)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Events drained by the most recent frame, including any mutations made
    /// between frames.
    pub fn last_events(&self) -> &[WorldEvent] {
        &self.last_events
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn scene(&self) -> &SceneDescription {
        &self.scene
    }

    pub fn physics(&self) -> &P {
        &self.physics
    }

    /// Tear down, handing back the world.
    pub fn into_world(self) -> World {
        self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::physics::PhysicsError;
    use arena_kernel::KernelError;
    use glam::Vec3;

    struct BrokenPhysics;

    impl PhysicsWorld for BrokenPhysics {
        fn initialize(&mut self) -> Result<(), PhysicsError> {
            Err(PhysicsError::Unavailable("no engine".into()))
        }

        fn is_ready(&self) -> bool {
            false
        }

        fn gravity(&self) -> Vec3 {
            Vec3::ZERO
        }
    }

    #[test]
    fn frame_before_start_is_refused() {
        let mut driver = FrameDriver::from_scenario(&ScenarioConfig::demo()).unwrap();
        assert!(matches!(driver.frame(), Err(SceneError::PhysicsNotReady)));
        assert_eq!(driver.world().tick_count(), 0);
        assert_eq!(driver.frames(), 0);
    }

    #[test]
    fn frame_ticks_once() {
        let mut driver = FrameDriver::from_scenario(&ScenarioConfig::demo()).unwrap();
        driver.start().unwrap();
        assert!(driver.is_started());

        let report = driver.frame().unwrap();
        assert_eq!(report.tick, 1);
        assert_eq!(driver.world().tick_count(), 1);

        let green = driver.world().find_by_name("green").unwrap();
        let p = driver.world().agent(green).unwrap().position();
        assert!(p.abs_diff_eq(Vec3::new(10.1, 0.5, 10.0), 1e-5));
    }

    #[test]
    fn run_reaches_target() {
        let mut driver = FrameDriver::from_scenario(&ScenarioConfig::demo()).unwrap();
        driver.start().unwrap();
        let summary = driver.run(150).unwrap();
        assert_eq!(summary.frames, 150);
        assert_eq!(summary.last_tick, 150);
        assert_eq!(summary.moves, 100);
        assert_eq!(summary.arrivals, 1);

        let world = driver.into_world();
        let green = world.find_by_name("green").unwrap();
        assert_eq!(
            world.agent(green).unwrap().position(),
            Vec3::new(20.0, 0.5, 10.0)
        );
    }

    #[test]
    fn event_log_stays_bounded_over_long_runs() {
        let mut driver = FrameDriver::from_scenario(&ScenarioConfig::demo()).unwrap();
        driver.start().unwrap();
        let agents = driver.world().agent_count();
        for _ in 0..10_000 {
            driver.frame().unwrap();
            assert!(driver.world().events().is_empty());
            assert!(driver.last_events().len() <= agents * 2 + 1);
        }
        assert_eq!(driver.last_events(), [WorldEvent::Stepped { tick: 10_000 }]);
    }

    #[test]
    fn first_frame_reports_setup_and_tick_events() {
        let mut driver = FrameDriver::from_scenario(&ScenarioConfig::demo()).unwrap();
        driver.start().unwrap();
        driver.frame().unwrap();
        let events = driver.last_events();
        let spawned = events
            .iter()
            .filter(|e| matches!(e, WorldEvent::Spawned { .. }))
            .count();
        assert_eq!(spawned, 3);
        assert!(events.iter().any(|e| matches!(e, WorldEvent::Moved { .. })));
        assert_eq!(events.last(), Some(&WorldEvent::Stepped { tick: 1 }));
    }

    #[test]
    fn bad_scenario_surfaces_as_config_error() {
        let mut cfg = ScenarioConfig::demo();
        cfg.agents[0].seek = Some("nobody".into());
        let err = FrameDriver::from_scenario(&cfg).err().unwrap();
        assert!(matches!(
            err,
            SceneError::Config(ConfigError::Kernel(KernelError::AgentNotFound(_)))
        ));
    }

    #[test]
    fn failed_physics_blocks_frames() {
        let mut driver = FrameDriver::new(World::new(), BrokenPhysics);
        assert!(matches!(driver.start(), Err(SceneError::PhysicsInit(_))));
        assert!(matches!(driver.frame(), Err(SceneError::PhysicsNotReady)));
    }

    #[test]
    fn scene_matches_world() {
        let driver = FrameDriver::from_scenario(&ScenarioConfig::demo()).unwrap();
        assert_eq!(driver.scene().agents.len(), 3);
        assert_eq!(driver.physics().gravity(), Vec3::new(0.0, -9.81, 0.0));
    }
}
