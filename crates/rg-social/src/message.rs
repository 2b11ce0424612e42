//! `SocialMessage` — one concrete delivery produced by a broadcast.

use std::fmt;
use std::sync::Arc;

use rg_core::{AgentId, Message, MessageId};

/// Weight given to edges and messages when none is specified.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A payload delivered to one neighbour, annotated with the weight of the edge
/// it travelled along.
///
/// The payload is shared: every message produced from the same specification
/// points at the same immutable payload value.
#[derive(Debug, Clone)]
pub struct SocialMessage {
    id:          MessageId,
    destination: AgentId,
    sender:      AgentId,
    payload:     Arc<dyn Message>,
    weight:      f64,
}

impl SocialMessage {
    pub fn new(destination: AgentId, sender: AgentId, payload: Arc<dyn Message>, weight: f64) -> Self {
        Self::with_id(MessageId::new(), destination, sender, payload, weight)
    }

    pub fn with_id(
        id:          MessageId,
        destination: AgentId,
        sender:      AgentId,
        payload:     Arc<dyn Message>,
        weight:      f64,
    ) -> Self {
        Self { id, destination, sender, payload, weight }
    }

    /// The wrapped message.
    pub fn payload(&self) -> &dyn Message {
        &*self.payload
    }

    /// The shared handle to the payload, e.g. to re-broadcast it.
    pub fn shared_payload(&self) -> &Arc<dyn Message> {
        &self.payload
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl Message for SocialMessage {
    fn id(&self) -> MessageId {
        self.id
    }

    fn sender(&self) -> AgentId {
        self.sender
    }

    fn destination(&self) -> AgentId {
        self.destination
    }
}

impl fmt::Display for SocialMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SocialMessage(Id={}, Destination={}, Sender={}, Payload={}, Weight={})",
            self.id, self.destination, self.sender, self.payload, self.weight
        )
    }
}
