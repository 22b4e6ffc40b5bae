//! Developer tooling: the toggleable debug layer and world inspector queries.
//!
//! # Invariants
//! - Tools only read world state.

mod debug_layer;
mod inspector;

pub use debug_layer::DebugLayer;
pub use inspector::{AgentInfo, WorldInspector, WorldSummary};

pub fn crate_info() -> &'static str {
    "arena-tools v0.1.0"
}
