use arena_common::AgentId;
use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::error::KernelError;

/// Ordered, append-only collection of agents.
///
/// Insertion order is creation order and doubles as tick order. Agents are
/// addressed by `AgentId`, an index into the backing vector, so handles never
/// dangle while the registry lives. Names are not required to be unique.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentRegistry {
    agents: Vec<Agent>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an agent and return its handle.
    ///
    /// Holds at most `u32::MAX` agents; past that every handle would alias.
    pub fn add(&mut self, agent: Agent) -> Result<AgentId, KernelError> {
        let id = AgentId::from_index(self.agents.len()).ok_or(KernelError::RegistryFull)?;
        self.agents.push(agent);
        Ok(id)
    }

    /// First agent (in insertion order) with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<AgentId> {
        self.agents
            .iter()
            .position(|a| a.name() == name)
            .and_then(AgentId::from_index)
    }

    /// Like `find_by_name`, but a missing name is an error.
    pub fn resolve(&self, name: &str) -> Result<AgentId, KernelError> {
        self.find_by_name(name)
            .ok_or_else(|| KernelError::AgentNotFound(name.to_string()))
    }

    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(id.index())
    }

    pub fn contains(&self, id: AgentId) -> bool {
        id.index() < self.agents.len()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Agents with their handles, in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &Agent)> {
        self.agents
            .iter()
            .enumerate()
            .filter_map(|(i, a)| AgentId::from_index(i).map(|id| (id, a)))
    }

    /// Handles in registry order, detached from the registry borrow.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + use<> {
        // `add` keeps len <= u32::MAX.
        let len = u32::try_from(self.agents.len()).unwrap_or(u32::MAX);
        (0..len).map(AgentId)
    }

    /// Point `seeker` at `target` after checking both handles.
    pub fn set_seek_target(&mut self, seeker: AgentId, target: AgentId) -> Result<(), KernelError> {
        if !self.contains(target) {
            return Err(KernelError::InvalidAgentId(target));
        }
        if seeker == target {
            return Err(KernelError::SelfTarget(seeker));
        }
        let agent = self
            .get_mut(seeker)
            .ok_or(KernelError::InvalidAgentId(seeker))?;
        agent.assign_target(target);
        Ok(())
    }

    pub fn clear_seek_target(&mut self, seeker: AgentId) -> Result<(), KernelError> {
        let agent = self
            .get_mut(seeker)
            .ok_or(KernelError::InvalidAgentId(seeker))?;
        agent.clear_target();
        Ok(())
    }
}
