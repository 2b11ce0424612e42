//! `RegularEventMessage` — a self-addressed tick repeated at a fixed interval.

use std::fmt;

use chrono::TimeDelta;
use rg_core::{AgentId, CoreError, CoreResult, Message, MessageId, SimTime};
use rg_schedule::Scheduler;
use tracing::debug;

/// A periodic event an agent sends to itself (sender == destination).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegularEventMessage {
    id:    MessageId,
    agent: AgentId,
}

impl RegularEventMessage {
    pub fn new(agent: AgentId) -> Self {
        Self::with_id(agent, MessageId::new())
    }

    pub fn with_id(agent: AgentId, id: MessageId) -> Self {
        Self { id, agent }
    }

    /// Same agent, new identity.
    pub fn clone_fresh(&self) -> Self {
        Self::new(self.agent)
    }

    /// Schedule a fresh clone of `prototype` at `start`, `start + interval`,
    /// … for every instant strictly before `end`.
    ///
    /// Rejects `start > end` and non-positive intervals.  Every instant is
    /// checked against `scheduler` before anything is inserted, so a failure
    /// leaves the queue untouched.  Returns the number of messages scheduled.
    pub fn create_and_schedule(
        prototype: &RegularEventMessage,
        interval:  TimeDelta,
        start:     SimTime,
        end:       SimTime,
        scheduler: &mut dyn Scheduler,
    ) -> CoreResult<usize> {
        if start > end {
            return Err(CoreError::StartAfterEnd { start, end });
        }
        if interval.is_zero() {
            return Err(CoreError::ZeroInterval);
        }
        if interval < TimeDelta::zero() {
            return Err(CoreError::NegativeInterval(interval));
        }

        debug!(
            prototype = %prototype, %start, %end, %interval,
            "creating and scheduling periodic messages"
        );

        let ticks = ticks(start, end, interval);
        // Ticks ascend, so the first and last bound every check.
        if let (Some(&first), Some(&last)) = (ticks.first(), ticks.last()) {
            scheduler.check_time(first)?;
            scheduler.check_time(last)?;
        }

        for &time in &ticks {
            let message = prototype.clone_fresh();
            debug!(message = %message, %time, "scheduling periodic message");
            scheduler.schedule(Box::new(message), time)?;
        }
        Ok(ticks.len())
    }
}

/// `start, start + interval, …` while `< end`.
fn ticks(start: SimTime, end: SimTime, interval: TimeDelta) -> Vec<SimTime> {
    std::iter::successors(Some(start), |&t| t.checked_add_signed(interval))
        .take_while(|&t| t < end)
        .collect()
}

impl Message for RegularEventMessage {
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

impl fmt::Display for RegularEventMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RegularEventMessage(Sender={}, Destination={}, Id={})",
            self.agent, self.agent, self.id
        )
    }
}
