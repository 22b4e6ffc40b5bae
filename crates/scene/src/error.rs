use std::path::PathBuf;

use arena_kernel::KernelError;

use crate::physics::PhysicsError;

/// Errors from loading or applying a scenario file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read scenario {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scenario YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Kernel(#[from] KernelError),
}

/// Errors from driving the scene.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("physics world not initialized; call start() before the first frame")]
    PhysicsNotReady,
    #[error("physics initialization failed: {0}")]
    PhysicsInit(#[from] PhysicsError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
