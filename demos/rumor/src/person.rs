//! The `Person` agent and the `Rumor` it passes on.

use std::fmt;
use std::sync::Arc;

use chrono::TimeDelta;
use rand::Rng;
use rand::rngs::SmallRng;
use rg_agent::{Agent, AgentResult, SimContext};
use rg_core::{Addressable, AgentId, Message, MessageId, SimTime};
use rg_messages::{RegularEventMessage, WakeUpMessage};
use rg_schedule::Scheduler;
use rg_social::{SocialMessage, SocialMessageSpec};
use tracing::debug;

// ── Rumor ─────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct Rumor {
    id:     MessageId,
    origin: AgentId,
    text:   String,
}

impl Rumor {
    pub fn new(origin: AgentId, text: impl Into<String>) -> Self {
        Self { id: MessageId::new(), origin, text: text.into() }
    }
}

impl Message for Rumor {
    fn id(&self) -> MessageId {
        self.id
    }

    fn sender(&self) -> AgentId {
        self.origin
    }

    fn destination(&self) -> AgentId {
        self.origin
    }
}

impl fmt::Display for Rumor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rumor(Origin={}, Text={:?})", self.origin, self.text)
    }
}

// ── Person ────────────────────────────────────────────────────────────────────

/// Believes a rumor with probability equal to the edge weight it arrived on,
/// then waits a random while before retelling it to every friend.
///
/// The originator also retells on every `RegularEventMessage` it receives.
pub struct Person {
    id:       AgentId,
    rng:      SmallRng,
    max_wait: TimeDelta,
    rumor:    Option<Arc<dyn Message>>,
    heard_at: Option<SimTime>,
    retold:   usize,
}

impl Person {
    pub fn new(id: AgentId, rng: SmallRng, max_wait: TimeDelta) -> Self {
        Self { id, rng, max_wait, rumor: None, heard_at: None, retold: 0 }
    }

    /// A person who already knows `rumor` at `now`.
    pub fn originator(mut self, rumor: Arc<dyn Message>, now: SimTime) -> Self {
        self.rumor = Some(rumor);
        self.heard_at = Some(now);
        self
    }

    pub fn heard_at(&self) -> Option<SimTime> {
        self.heard_at
    }

    pub fn retold(&self) -> usize {
        self.retold
    }

    fn hear(&mut self, message: &SocialMessage, ctx: &mut SimContext<'_>) -> AgentResult<()> {
        if self.rumor.is_some() || !message.payload().is::<Rumor>() {
            return Ok(());
        }
        if !self.rng.gen_bool(message.weight().clamp(0.0, 1.0)) {
            debug!(person = %self.id, from = %message.sender(), "did not believe the rumor");
            return Ok(());
        }

        self.rumor = Some(Arc::clone(message.shared_payload()));
        self.heard_at = Some(ctx.now());

        let wait = TimeDelta::minutes(self.rng.gen_range(1..=self.max_wait.num_minutes().max(1)));
        let wake = ctx.now() + wait;
        if wake <= ctx.end_time() {
            WakeUpMessage::schedule(self.id, wake, ctx)?;
        }
        Ok(())
    }

    fn retell(&mut self, ctx: &mut SimContext<'_>) -> AgentResult<()> {
        let Some(rumor) = &self.rumor else {
            return Ok(());
        };
        let spec = SocialMessageSpec::from_shared(self.id, Arc::clone(rumor));
        let sent = ctx.broadcast(&spec)?;
        self.retold += 1;
        debug!(person = %self.id, sent, "retold the rumor");
        Ok(())
    }
}

impl Addressable for Person {
    fn id(&self) -> AgentId {
        self.id
    }
}

impl Agent for Person {
    fn handle(&mut self, message: &dyn Message, ctx: &mut SimContext<'_>) -> AgentResult<()> {
        if let Some(social) = message.downcast_ref::<SocialMessage>() {
            self.hear(social, ctx)
        } else if message.is::<WakeUpMessage>() || message.is::<RegularEventMessage>() {
            self.retell(ctx)
        } else {
            Ok(())
        }
    }
}
