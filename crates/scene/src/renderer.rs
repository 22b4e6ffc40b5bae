use arena_kernel::World;

use crate::descriptor::SceneDescription;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads world state and the scene description, then produces
/// output. It never mutates the world.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&self, world: &World, scene: &SceneDescription) -> Self::Output;
}

/// Produces a human-readable frame for the CLI, logs and tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, world: &World, scene: &SceneDescription) -> String {
        let mut out = String::new();
        out.push_str(&format!("=== Arena (tick={}) ===\n", world.tick_count()));
        let cam = &scene.camera;
        out.push_str(&format!(
            "Camera: {} eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0}\n",
            cam.name,
            cam.position.x,
            cam.position.y,
            cam.position.z,
            cam.target.x,
            cam.target.y,
            cam.target.z,
            cam.fov_degrees
        ));
        let light = &scene.light;
        out.push_str(&format!(
            "Light: {} dir=({:.1}, {:.1}, {:.1})\n",
            light.name, light.direction.x, light.direction.y, light.direction.z
        ));
        out.push_str(&format!(
            "Ground: {} {}x{} collisions={}\n",
            scene.ground.name, scene.ground.width, scene.ground.height, scene.ground.check_collisions
        ));
        out.push_str(&format!("Sky: {} size={}\n", scene.sky.name, scene.sky.size));
        out.push_str(&format!("Agents: {}\n", world.agent_count()));

        for mesh in &scene.agents {
            let Some(agent) = world.agent(mesh.agent) else {
                continue;
            };
            let p = agent.position();
            let c = mesh.color;
            out.push_str(&format!(
                "  {} {:<8} pos=({:.2}, {:.2}, {:.2}) rgb=({:.1}, {:.1}, {:.1}) {:?}\n",
                mesh.agent, mesh.name, p.x, p.y, p.z, c.r, c.g, c.b, agent.seek_state()
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::SceneBuilder;
    use arena_common::Color;
    use arena_kernel::Agent;
    use glam::Vec3;

    #[test]
    fn renders_empty_world() {
        let world = World::new();
        let scene = SceneBuilder::new().build(&world);
        let output = DebugTextRenderer::new().render(&world, &scene);

        assert!(output.contains("tick=0"));
        assert!(output.contains("Agents: 0"));
        assert!(output.contains("Ground: ground 1000x1000"));
    }

    #[test]
    fn renders_agent_positions() {
        let mut world = World::new();
        world.spawn(Agent::new("green", Vec3::new(10.0, 0.5, 10.0), Color::GREEN)).unwrap();
        let scene = SceneBuilder::new().build(&world);
        let output = DebugTextRenderer::new().render(&world, &scene);

        assert!(output.contains("Agents: 1"));
        assert!(output.contains("green"));
        assert!(output.contains("pos=(10.00, 0.50, 10.00)"));
        assert!(output.contains("Idle"));
    }
}
