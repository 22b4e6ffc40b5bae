use arena_common::AgentId;

/// Errors from agent and world operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KernelError {
    #[error("agent named {0:?} not found")]
    AgentNotFound(String),
    #[error("agent {0} does not exist")]
    InvalidAgentId(AgentId),
    #[error("agent registry is full")]
    RegistryFull,
    #[error("agent {0} cannot seek itself")]
    SelfTarget(AgentId),
    #[error("step size must be finite and positive, got {0}")]
    InvalidStep(f32),
    #[error("unknown movement law {0:?} (expected `arrive` or `overshoot`)")]
    UnknownMovementLaw(String),
}
