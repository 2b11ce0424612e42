//! `AgentRegistry` — the id → agent map the run loop dispatches through.
//!
//! Registration is an upsert: registering an agent whose id is already
//! present replaces the earlier agent (last write wins).  Agents are never
//! removed during a run.

use rg_core::{AgentId, Message};
use tracing::debug;

use crate::Agent;

#[cfg(not(feature = "fx-hash"))]
type AgentMap = std::collections::HashMap<AgentId, Box<dyn Agent>>;

#[cfg(feature = "fx-hash")]
type AgentMap = rustc_hash::FxHashMap<AgentId, Box<dyn Agent>>;

#[derive(Default)]
pub struct AgentRegistry {
    agents: AgentMap,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `agent` under its id.  Returns the agent it replaced, if any.
    pub fn insert(&mut self, agent: Box<dyn Agent>) -> Option<Box<dyn Agent>> {
        let id = agent.id();
        let replaced = self.agents.insert(id, agent);
        if replaced.is_some() {
            debug!(agent = %id, "replaced agent in the registry");
        } else {
            debug!(agent = %id, "added agent to the registry");
        }
        replaced
    }

    pub fn get(&self, id: AgentId) -> Option<&dyn Agent> {
        self.agents.get(&id).map(|agent| &**agent)
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut dyn Agent> {
        self.agents.get_mut(&id).map(|agent| &mut **agent)
    }

    /// The agent registered under `id`, if it is a `T`.
    pub fn downcast_ref<T: Agent>(&self, id: AgentId) -> Option<&T> {
        self.get(id)?.as_any().downcast_ref::<T>()
    }

    /// The agent `message` is addressed to.
    pub fn destination_of(&mut self, message: &dyn Message) -> Option<&mut dyn Agent> {
        self.get_mut(message.destination())
    }

    pub fn contains(&self, id: AgentId) -> bool {
        self.agents.contains_key(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agents.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
