use arena_common::{AgentId, Color};
use arena_kernel::World;
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Free-look camera with its input attached to the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniversalCamera {
    pub name: String,
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub attach_control: bool,
}

impl Default for UniversalCamera {
    fn default() -> Self {
        Self {
            name: "camera".into(),
            position: Vec3::new(0.0, 10.0, -20.0),
            target: Vec3::ZERO,
            fov_degrees: 45.0,
            near: 0.1,
            far: 2000.0,
            attach_control: true,
        }
    }
}

impl UniversalCamera {
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), aspect, self.near, self.far)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}

/// Light that blends a sky color and a ground color along `direction`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HemisphericLight {
    pub name: String,
    pub direction: Vec3,
    pub intensity: f32,
}

impl Default for HemisphericLight {
    fn default() -> Self {
        Self {
            name: "light1".into(),
            direction: Vec3::new(1.0, 1.0, 0.0),
            intensity: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroundMaterial {
    Grid { major_unit_frequency: u32, line_color: Color },
    Flat(Color),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundDesc {
    pub name: String,
    pub width: f32,
    pub height: f32,
    pub check_collisions: bool,
    pub material: GroundMaterial,
}

impl Default for GroundDesc {
    fn default() -> Self {
        Self {
            name: "ground".into(),
            width: 1000.0,
            height: 1000.0,
            check_collisions: true,
            material: GroundMaterial::Grid {
                major_unit_frequency: 10,
                line_color: Color::WHITE,
            },
        }
    }
}

/// Skybox using a procedural sky material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkyDesc {
    pub name: String,
    pub size: f32,
    pub luminance: f32,
    /// Sun inclination, 0.0 (horizon) to 0.5 (zenith).
    pub inclination: f32,
    pub azimuth: f32,
}

impl Default for SkyDesc {
    fn default() -> Self {
        Self {
            name: "skyBox".into(),
            size: 1000.0,
            luminance: 1.0,
            inclination: 0.3,
            azimuth: 0.25,
        }
    }
}

/// Sphere mesh standing in for an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentMesh {
    pub agent: AgentId,
    pub name: String,
    pub diameter: f32,
    pub color: Color,
}

/// Everything the external engine needs to assemble the arena.
///
/// Positions of agent meshes are not stored here; they are read from the
/// world each frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub camera: UniversalCamera,
    pub light: HemisphericLight,
    pub ground: GroundDesc,
    pub sky: SkyDesc,
    pub agents: Vec<AgentMesh>,
}

impl SceneDescription {
    pub fn mesh_for(&self, agent: AgentId) -> Option<&AgentMesh> {
        self.agents.iter().find(|m| m.agent == agent)
    }
}

/// Builds a `SceneDescription` around an already populated world.
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    camera: UniversalCamera,
    light: HemisphericLight,
    ground: GroundDesc,
    sky: SkyDesc,
    agent_diameter: f32,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self {
            camera: UniversalCamera::default(),
            light: HemisphericLight::default(),
            ground: GroundDesc::default(),
            sky: SkyDesc::default(),
            agent_diameter: 1.0,
        }
    }
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn camera(mut self, camera: UniversalCamera) -> Self {
        self.camera = camera;
        self
    }

    pub fn light(mut self, light: HemisphericLight) -> Self {
        self.light = light;
        self
    }

    pub fn ground(mut self, ground: GroundDesc) -> Self {
        self.ground = ground;
        self
    }

    pub fn sky(mut self, sky: SkyDesc) -> Self {
        self.sky = sky;
        self
    }

    pub fn agent_diameter(mut self, diameter: f32) -> Self {
        self.agent_diameter = diameter;
        self
    }

    /// One sphere per agent, in registry order.
    pub fn build(self, world: &World) -> SceneDescription {
        let agents = world
            .agents()
            .iter()
            .map(|(id, a)| AgentMesh {
                agent: id,
                name: a.name().to_string(),
                diameter: self.agent_diameter,
                color: a.color(),
            })
            .collect::<Vec<_>>();
        tracing::debug!(meshes = agents.len(), "scene assembled");
        SceneDescription {
            camera: self.camera,
            light: self.light,
            ground: self.ground,
            sky: self.sky,
            agents,
        }
    }
}
