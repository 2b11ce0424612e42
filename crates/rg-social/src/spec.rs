//! `SocialMessageSpec` — what to send, decoupled from where it goes.
//!
//! A specification names a sender and a payload.  Materializing it against a
//! list of destinations (or the out-edges of a social network) yields one
//! [`SocialMessage`] per destination.  Materializing never schedules anything.

use std::fmt;
use std::sync::Arc;

use rg_core::{Addressable, AgentId, Message, SpecId};
use tracing::trace;

use crate::{DEFAULT_WEIGHT, SocialMessage};

#[derive(Debug, Clone)]
pub struct SocialMessageSpec {
    id:      SpecId,
    sender:  AgentId,
    payload: Arc<dyn Message>,
}

impl SocialMessageSpec {
    pub fn new<M: Message>(sender: AgentId, payload: M) -> Self {
        Self::from_shared(sender, Arc::new(payload))
    }

    /// Build from a payload that is already shared (e.g. a received
    /// [`SocialMessage::shared_payload`] being passed on).
    pub fn from_shared(sender: AgentId, payload: Arc<dyn Message>) -> Self {
        Self::with_id(SpecId::new(), sender, payload)
    }

    pub fn with_id(id: SpecId, sender: AgentId, payload: Arc<dyn Message>) -> Self {
        Self { id, sender, payload }
    }

    pub fn id(&self) -> SpecId {
        self.id
    }

    pub fn sender(&self) -> AgentId {
        self.sender
    }

    pub fn payload(&self) -> &dyn Message {
        &*self.payload
    }

    pub fn shared_payload(&self) -> &Arc<dyn Message> {
        &self.payload
    }

    // ── Materialization ───────────────────────────────────────────────────

    /// One message per destination, each with the default weight.
    pub fn to_messages(&self, destinations: &[AgentId]) -> Vec<SocialMessage> {
        trace!(spec = %self, destinations = destinations.len(), "materializing social messages");
        destinations
            .iter()
            .map(|&to| self.message_to(to, DEFAULT_WEIGHT))
            .collect()
    }

    /// One message per agent, each with the default weight.
    pub fn to_messages_for<A: Addressable>(&self, agents: &[A]) -> Vec<SocialMessage> {
        trace!(spec = %self, agents = agents.len(), "materializing social messages");
        agents
            .iter()
            .map(|agent| self.message_to(agent.id(), DEFAULT_WEIGHT))
            .collect()
    }

    /// One message per `(destination, weight)` pair.
    pub fn to_messages_with_weights(&self, destinations: &[(AgentId, f64)]) -> Vec<SocialMessage> {
        trace!(spec = %self, destinations = destinations.len(), "materializing weighted social messages");
        destinations
            .iter()
            .map(|&(to, weight)| self.message_to(to, weight))
            .collect()
    }

    /// One message per `(agent, weight)` pair.
    pub fn to_messages_for_with_weights<A: Addressable>(&self, agents: &[(A, f64)]) -> Vec<SocialMessage> {
        trace!(spec = %self, agents = agents.len(), "materializing weighted social messages");
        agents
            .iter()
            .map(|(agent, weight)| self.message_to(agent.id(), *weight))
            .collect()
    }

    fn message_to(&self, destination: AgentId, weight: f64) -> SocialMessage {
        SocialMessage::new(destination, self.sender, Arc::clone(&self.payload), weight)
    }
}

impl fmt::Display for SocialMessageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SocialMessageSpec(Id={}, Sender={}, Payload={})",
            self.id, self.sender, self.payload
        )
    }
}
