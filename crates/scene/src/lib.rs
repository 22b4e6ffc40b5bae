//! Scene assembly and frame driving for the arena.
//!
//! The 3D engine and physics engine are external collaborators. This crate
//! describes what the scene contains, enforces the physics-ready precondition,
//! and drives one world tick per rendered frame.
//!
//! # Invariants
//! - All agents and seek targets exist before the first frame.
//! - Renderers read the world; they never mutate it.
//! - `FrameDriver::frame` ticks the world exactly once.

mod config;
mod descriptor;
mod driver;
mod error;
mod physics;
mod renderer;

pub use config::{AgentSpec, ScenarioConfig};
pub use descriptor::{
    AgentMesh, GroundDesc, GroundMaterial, HemisphericLight, SceneBuilder, SceneDescription,
    SkyDesc, UniversalCamera,
};
pub use driver::{FrameDriver, RunSummary};
pub use error::{ConfigError, SceneError};
pub use physics::{NullPhysics, PhysicsError, PhysicsWorld};
pub use renderer::{DebugTextRenderer, Renderer};

pub fn crate_info() -> &'static str {
    "arena-scene v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("scene"));
    }
}
