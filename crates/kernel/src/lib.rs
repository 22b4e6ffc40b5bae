//! Arena kernel: agents, the agent registry, seek behavior and world ticking.
//!
//! # Invariants
//! - A stored seek target always refers to an agent in the same registry.
//! - `World::tick` visits agents exactly once, in registry order.
//! - Step size is applied per tick, never scaled by wall-clock time.

pub mod agent;
pub mod error;
pub mod registry;
pub mod seek;
pub mod world;

pub use agent::{Agent, SeekState};
pub use error::KernelError;
pub use registry::AgentRegistry;
pub use seek::{ARRIVAL_EPSILON, DEFAULT_STEP, MovementLaw, SeekParams, StepOutcome};
pub use world::{TickReport, World, WorldEvent};

pub fn crate_info() -> &'static str {
    "arena-kernel v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("kernel"));
    }
}
