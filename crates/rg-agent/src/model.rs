//! The `Agent` trait — the main extension point for user code.

use rg_core::{Addressable, AsAny, Message};

use crate::{AgentResult, SimContext};

/// An addressable simulation participant.
///
/// An agent has exactly one behavior: handling a message delivered to it.
/// Handlers run to completion, one message at a time, on the thread driving
/// the run loop.  Anything the agent wants to happen later is expressed by
/// scheduling a message through `ctx`.
///
/// Returning an error aborts the run; the error reaches the caller of
/// `Simulation::run` unchanged.
///
/// # Example
///
/// ```rust,ignore
/// struct Sleeper { id: AgentId, naps: u32 }
///
/// impl Addressable for Sleeper {
///     fn id(&self) -> AgentId { self.id }
/// }
///
/// impl Agent for Sleeper {
///     fn handle(&mut self, message: &dyn Message, ctx: &mut SimContext<'_>) -> AgentResult<()> {
///         if message.is::<WakeUpMessage>() {
///             self.naps += 1;
///             WakeUpMessage::schedule(self.id, ctx.now() + TimeDelta::hours(8), ctx)?;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Agent: Addressable + AsAny + 'static {
    fn handle(&mut self, message: &dyn Message, ctx: &mut SimContext<'_>) -> AgentResult<()>;
}
