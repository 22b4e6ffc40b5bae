use arena_common::{AgentId, Color};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::agent::{Agent, SeekState};
use crate::error::KernelError;
use crate::registry::AgentRegistry;
use crate::seek::{self, MovementLaw, SeekParams, StepOutcome};

/// An event record produced by every mutation to the world.
///
/// The log is enough to rebuild the agent registry with `World::replay`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorldEvent {
    /// Agent was added to the registry.
    Spawned {
        id: AgentId,
        name: String,
        position: Vec3,
        color: Color,
    },
    /// Agent was placed directly, outside of seeking.
    Placed { id: AgentId, old: Vec3, new: Vec3 },
    /// Agent started seeking `target`.
    TargetAssigned { seeker: AgentId, target: AgentId },
    /// Agent stopped seeking.
    TargetCleared { seeker: AgentId },
    /// Agent moved during a tick.
    Moved { id: AgentId, from: Vec3, to: Vec3 },
    /// Agent reached its target's position.
    Arrived { id: AgentId, target: AgentId, at: Vec3 },
    /// The world advanced to `tick`.
    Stepped { tick: u64 },
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TickReport {
    pub tick: u64,
    pub moved: usize,
    pub arrived: usize,
    pub idle: usize,
}

/// The agent world: registry, seek parameters and tick counter.
///
/// All state mutations go through explicit operations and are logged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    agents: AgentRegistry,
    params: SeekParams,
    tick: u64,
    /// Append-only event log of all mutations.
    #[serde(skip)]
    event_log: Vec<WorldEvent>,
}

impl World {
    /// Empty world with the default step and movement law.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: SeekParams) -> Self {
        Self {
            params,
            ..Default::default()
        }
    }

    /// Number of completed ticks.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn params(&self) -> &SeekParams {
        &self.params
    }

    pub fn agents(&self) -> &AgentRegistry {
        &self.agents
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<AgentId> {
        self.agents.find_by_name(name)
    }

    pub fn events(&self) -> &[WorldEvent] {
        &self.event_log
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Add an agent to the registry. Any seek target it carries is discarded;
    /// targets are assigned through `set_seek_target` so they get validated.
    pub fn spawn(&mut self, mut agent: Agent) -> Result<AgentId, KernelError> {
        agent.clear_target();
        let name = agent.name().to_string();
        let position = agent.position();
        let color = agent.color();
        let id = self.agents.add(agent)?;
        tracing::debug!(%id, %name, ?position, "spawned agent");
        self.event_log.push(WorldEvent::Spawned {
            id,
            name,
            position,
            color,
        });
        Ok(id)
    }

    /// Move an agent directly, bypassing the seek law.
    pub fn set_position(&mut self, id: AgentId, position: Vec3) -> Result<(), KernelError> {
        let agent = self
            .agents
            .get_mut(id)
            .ok_or(KernelError::InvalidAgentId(id))?;
        let old = agent.position();
        agent.set_position(position);
        self.event_log.push(WorldEvent::Placed {
            id,
            old,
            new: position,
        });
        Ok(())
    }

    pub fn set_seek_target(&mut self, seeker: AgentId, target: AgentId) -> Result<(), KernelError> {
        self.agents.set_seek_target(seeker, target)?;
        tracing::debug!(%seeker, %target, "seek target assigned");
        self.event_log
            .push(WorldEvent::TargetAssigned { seeker, target });
        Ok(())
    }

    /// Resolve both names once and store the target handle.
    ///
    /// Fails without touching the seeker if either name is unknown.
    pub fn set_seek_target_by_name(
        &mut self,
        seeker: &str,
        target: &str,
    ) -> Result<(AgentId, AgentId), KernelError> {
        let seeker_id = self.agents.resolve(seeker)?;
        let target_id = self.agents.resolve(target)?;
        self.set_seek_target(seeker_id, target_id)?;
        Ok((seeker_id, target_id))
    }

    pub fn clear_seek_target(&mut self, seeker: AgentId) -> Result<(), KernelError> {
        self.agents.clear_seek_target(seeker)?;
        self.event_log.push(WorldEvent::TargetCleared { seeker });
        Ok(())
    }

    /// Run the seek behavior once for every agent, in registry order.
    ///
    /// Positions are read live, so an agent that moved earlier in this tick
    /// is seen at its new position by agents later in the order.
    pub fn tick(&mut self) -> TickReport {
        let next = self.tick + 1;
        let _span = tracing::info_span!("tick", tick = next).entered();
        let mut report = TickReport {
            tick: next,
            ..TickReport::default()
        };

        for id in self.agents.ids() {
            self.seek_one(id, &mut report);
        }

        self.tick = next;
        self.event_log.push(WorldEvent::Stepped { tick: next });
        tracing::trace!(
            moved = report.moved,
            arrived = report.arrived,
            idle = report.idle,
            "tick complete"
        );
        report
    }

    fn seek_one(&mut self, id: AgentId, report: &mut TickReport) {
        let Some(agent) = self.agents.get(id) else {
            return;
        };
        let Some(target_id) = agent.seek_target() else {
            report.idle += 1;
            return;
        };
        let Some(target) = self.agents.get(target_id) else {
            tracing::warn!(%id, target = %target_id, "seek target missing, skipping agent");
            return;
        };
        let from = agent.position();
        let state = agent.seek_state();
        let outcome = seek::step_toward(from, target.position(), &self.params);

        let Some(agent) = self.agents.get_mut(id) else {
            return;
        };
        match outcome {
            StepOutcome::Coincident => {
                if self.params.law() == MovementLaw::Arrive && state != SeekState::Arrived {
                    agent.set_state(SeekState::Arrived);
                    self.event_log.push(WorldEvent::Arrived {
                        id,
                        target: target_id,
                        at: from,
                    });
                    report.arrived += 1;
                }
            }
            StepOutcome::Moved(to) => {
                agent.set_position(to);
                agent.set_state(SeekState::Seeking);
                tracing::trace!(%id, ?from, ?to, "agent moved");
                self.event_log.push(WorldEvent::Moved { id, from, to });
                report.moved += 1;
            }
            StepOutcome::Arrived(to) => {
                agent.set_position(to);
                agent.set_state(SeekState::Arrived);
                tracing::info!(%id, name = agent.name(), at = ?to, "agent arrived");
                self.event_log.push(WorldEvent::Moved { id, from, to });
                self.event_log.push(WorldEvent::Arrived {
                    id,
                    target: target_id,
                    at: to,
                });
                report.moved += 1;
                report.arrived += 1;
            }
        }
    }

    /// Rebuild a world from an event log.
    pub fn replay(params: SeekParams, events: &[WorldEvent]) -> Self {
        let mut world = Self::with_params(params);
        for event in events {
            match event {
                WorldEvent::Spawned {
                    name,
                    position,
                    color,
                    ..
                } => {
                    let agent = Agent::new(name.clone(), *position, *color);
                    if let Err(err) = world.agents.add(agent) {
                        tracing::warn!(%err, "skipping spawn in replay");
                    }
                }
                WorldEvent::Placed { id, new, .. } => {
                    if let Some(a) = world.agents.get_mut(*id) {
                        a.set_position(*new);
                    }
                }
                WorldEvent::TargetAssigned { seeker, target } => {
                    if let Err(err) = world.agents.set_seek_target(*seeker, *target) {
                        tracing::warn!(%err, "skipping invalid target assignment in replay");
                    }
                }
                WorldEvent::TargetCleared { seeker } => {
                    if let Some(a) = world.agents.get_mut(*seeker) {
                        a.clear_target();
                    }
                }
                WorldEvent::Moved { id, to, .. } => {
                    if let Some(a) = world.agents.get_mut(*id) {
                        a.set_position(*to);
                        a.set_state(SeekState::Seeking);
                    }
                }
                WorldEvent::Arrived { id, at, .. } => {
                    if let Some(a) = world.agents.get_mut(*id) {
                        a.set_position(*at);
                        a.set_state(SeekState::Arrived);
                    }
                }
                WorldEvent::Stepped { tick } => {
                    world.tick = *tick;
                }
            }
        }
        world
    }

    /// Deterministic hash of tick and agent state, in registry order.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        mix(&mut h, &self.tick.to_le_bytes());
        for (id, agent) in self.agents.iter() {
            let p = agent.position();
            mix(&mut h, &id.0.to_le_bytes());
            mix(&mut h, agent.name().as_bytes());
            mix(&mut h, &p.x.to_le_bytes());
            mix(&mut h, &p.y.to_le_bytes());
            mix(&mut h, &p.z.to_le_bytes());
            let target = agent.seek_target().map_or(u32::MAX, |t| t.0);
            mix(&mut h, &target.to_le_bytes());
            mix(&mut h, &[agent.seek_state() as u8]);
        }
        h
    }
}
