//! Shared types for the arena workspace: agent handles, colors, vector helpers.

pub mod math;
pub mod types;

pub use glam::Vec3;
pub use types::{AgentId, Color};

pub fn crate_info() -> &'static str {
    "arena-common v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("common"));
    }
}
