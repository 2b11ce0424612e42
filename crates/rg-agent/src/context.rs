//! The context lent to every agent handler.

use rg_core::{CoreResult, Message, SimTime};
use rg_schedule::Scheduler;
use rg_social::{SocialMessageSpec, SocialNetwork};

use crate::{AgentError, AgentResult};

/// Everything a handler may touch while it runs.
///
/// `SimContext` is built by the run loop for each delivery from disjoint
/// borrows of the simulation's scheduler and (optional) social network.  It
/// implements [`Scheduler`] itself, so every collaborator that takes
/// `&mut dyn Scheduler` (periodic messages, wake-ups, fan-out) accepts a
/// context directly.
///
/// # Lifetimes
///
/// All borrows live for one handler call.
pub struct SimContext<'a> {
    scheduler: &'a mut dyn Scheduler,
    social:    Option<&'a mut dyn SocialNetwork>,
}

impl<'a> SimContext<'a> {
    /// A context without a social network.
    pub fn new(scheduler: &'a mut dyn Scheduler) -> Self {
        Self { scheduler, social: None }
    }

    /// A context with a social network attached.
    pub fn with_social_network(
        scheduler: &'a mut dyn Scheduler,
        social:    &'a mut dyn SocialNetwork,
    ) -> Self {
        Self { scheduler, social: Some(social) }
    }

    /// Current simulation time.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.scheduler.current_time()
    }

    pub fn has_social_network(&self) -> bool {
        self.social.is_some()
    }

    pub fn social_network(&self) -> Option<&(dyn SocialNetwork + 'a)> {
        self.social.as_deref()
    }

    pub fn social_network_mut(&mut self) -> Option<&mut (dyn SocialNetwork + 'a)> {
        self.social.as_deref_mut()
    }

    /// Fan `spec` out along the sender's outgoing edges at the current time.
    ///
    /// Fails with [`AgentError::NoSocialNetwork`] when none is attached.
    pub fn broadcast(&mut self, spec: &SocialMessageSpec) -> AgentResult<usize> {
        let network = self.social.as_deref().ok_or(AgentError::NoSocialNetwork)?;
        Ok(network.send_social_messages(spec, &mut *self.scheduler))
    }
}

impl Scheduler for SimContext<'_> {
    #[inline]
    fn start_time(&self) -> SimTime {
        self.scheduler.start_time()
    }

    #[inline]
    fn end_time(&self) -> SimTime {
        self.scheduler.end_time()
    }

    #[inline]
    fn current_time(&self) -> SimTime {
        self.scheduler.current_time()
    }

    fn check_time(&self, time: SimTime) -> CoreResult<()> {
        self.scheduler.check_time(time)
    }

    fn schedule(&mut self, message: Box<dyn Message>, time: SimTime) -> CoreResult<()> {
        self.scheduler.schedule(message, time)
    }

    fn send_now(&mut self, message: Box<dyn Message>) {
        self.scheduler.send_now(message);
    }
}
