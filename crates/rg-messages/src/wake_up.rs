//! `WakeUpMessage` — an agent asking to be handed control again at `t`.

use std::fmt;

use rg_core::{AgentId, CoreResult, Message, MessageId, SimTime};
use rg_schedule::Scheduler;

/// A self-addressed message carrying the time it was meant to arrive.
///
/// "Sleeping" is nothing more than having one of these pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WakeUpMessage {
    id:        MessageId,
    agent:     AgentId,
    wake_time: SimTime,
}

impl WakeUpMessage {
    pub fn new(agent: AgentId, wake_time: SimTime) -> Self {
        Self::with_id(agent, wake_time, MessageId::new())
    }

    pub fn with_id(agent: AgentId, wake_time: SimTime, id: MessageId) -> Self {
        Self { id, agent, wake_time }
    }

    /// Build a wake-up for `agent` and schedule it at `wake_time`.
    ///
    /// Returns the id of the scheduled message.
    pub fn schedule(
        agent:     AgentId,
        wake_time: SimTime,
        scheduler: &mut dyn Scheduler,
    ) -> CoreResult<MessageId> {
        let message = Self::new(agent, wake_time);
        let id = message.id;
        scheduler.schedule(Box::new(message), wake_time)?;
        Ok(id)
    }

    pub fn wake_time(&self) -> SimTime {
        self.wake_time
    }
}

impl Message for WakeUpMessage {
    fn id(&self) -> MessageId {
        self.id
    }

    fn sender(&self) -> AgentId {
        self.agent
    }

    fn destination(&self) -> AgentId {
        self.agent
    }
}

impl fmt::Display for WakeUpMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WakeUpMessage(Sender={}, Destination={}, Id={}, WakeTime={})",
            self.agent, self.agent, self.id, self.wake_time
        )
    }
}
