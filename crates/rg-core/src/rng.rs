//! Seeded identifier generation for reproducible runs.
//!
//! `AgentId::new()` and friends draw from the OS-seeded v4 generator, which is
//! what production code wants.  Simulations that must replay identically
//! (same ids in the same order, hence identical logs and graph iteration)
//! draw them from an `IdGenerator` instead.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::{AgentId, MessageId, SpecId};

/// Deterministic source of v4-shaped identifiers.
///
/// The same seed always yields the same id sequence.
pub struct IdGenerator(SmallRng);

impl IdGenerator {
    pub fn new(seed: u64) -> Self {
        IdGenerator(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for other seeded draws (edge weights, …).
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    pub fn agent_id(&mut self) -> AgentId {
        AgentId::from_rng(&mut self.0)
    }

    pub fn message_id(&mut self) -> MessageId {
        MessageId::from_rng(&mut self.0)
    }

    pub fn spec_id(&mut self) -> SpecId {
        SpecId::from_rng(&mut self.0)
    }
}
