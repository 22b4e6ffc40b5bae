use arena_common::AgentId;
use arena_kernel::{SeekState, World};
use serde::Serialize;

/// Read-only queries against the world for debugging and the CLI.
pub struct WorldInspector;

impl WorldInspector {
    /// Produce a summary of the world state.
    pub fn summary(world: &World) -> WorldSummary {
        let mut summary = WorldSummary {
            tick: world.tick_count(),
            step: world.params().step(),
            movement: world.params().law().to_string(),
            agent_count: world.agent_count(),
            idle: 0,
            seeking: 0,
            arrived: 0,
            pending_events: world.events().len(),
        };
        for (_, agent) in world.agents().iter() {
            match agent.seek_state() {
                SeekState::Idle => summary.idle += 1,
                SeekState::Seeking => summary.seeking += 1,
                SeekState::Arrived => summary.arrived += 1,
            }
        }
        summary
    }

    pub fn inspect_agent(world: &World, id: AgentId) -> Option<AgentInfo> {
        let agent = world.agent(id)?;
        let p = agent.position();
        let target = agent.seek_target().and_then(|t| world.agent(t));
        Some(AgentInfo {
            id,
            name: agent.name().to_string(),
            position: p.to_array(),
            color: agent.color().to_array(),
            state: agent.seek_state(),
            target: target.map(|t| t.name().to_string()),
            distance_to_target: target.map(|t| p.distance(t.position())),
        })
    }

    /// Info for every agent, in registry order.
    pub fn list_agents(world: &World) -> Vec<AgentInfo> {
        world
            .agents()
            .iter()
            .filter_map(|(id, _)| Self::inspect_agent(world, id))
            .collect()
    }
}

/// Summary of world state for the inspector.
#[derive(Debug, Clone, Serialize)]
pub struct WorldSummary {
    pub tick: u64,
    pub step: f32,
    pub movement: String,
    pub agent_count: usize,
    pub idle: usize,
    pub seeking: usize,
    pub arrived: usize,
    pub pending_events: usize,
}

impl std::fmt::Display for WorldSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "World: tick={} step={} movement={} agents={} (idle={} seeking={} arrived={}) pending_events={}",
            self.tick,
            self.step,
            self.movement,
            self.agent_count,
            self.idle,
            self.seeking,
            self.arrived,
            self.pending_events
        )
    }
}

/// Detailed info about a single agent.
#[derive(Debug, Clone, Serialize)]
pub struct AgentInfo {
    pub id: AgentId,
    pub name: String,
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub state: SeekState,
    pub target: Option<String>,
    pub distance_to_target: Option<f32>,
}

impl std::fmt::Display for AgentInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Agent {} {} pos=({:.2}, {:.2}, {:.2}) state={:?}",
            self.id, self.name, self.position[0], self.position[1], self.position[2], self.state,
        )?;
        if let (Some(target), Some(d)) = (&self.target, self.distance_to_target) {
            write!(f, " -> {target} ({d:.2} away)")?;
        }
        Ok(())
    }
}
