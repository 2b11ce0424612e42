//! A no-op agent — accepts and ignores every message.

use rg_core::{Addressable, AgentId, Message};

use crate::{Agent, AgentResult, SimContext};

/// An [`Agent`] that ignores everything it receives.
///
/// Useful as a registered sink in tests or for passive populations that only
/// need to be addressable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoopAgent {
    id: AgentId,
}

impl NoopAgent {
    pub fn new() -> Self {
        Self::with_id(AgentId::new())
    }

    pub fn with_id(id: AgentId) -> Self {
        Self { id }
    }
}

impl Default for NoopAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Addressable for NoopAgent {
    fn id(&self) -> AgentId {
        self.id
    }
}

impl Agent for NoopAgent {
    fn handle(&mut self, _message: &dyn Message, _ctx: &mut SimContext<'_>) -> AgentResult<()> {
        Ok(())
    }
}
