//! The `Simulation` struct and its run loop.

use std::fmt;

use rg_agent::{Agent, AgentRegistry, SimContext};
use rg_core::{AgentId, CoreResult, Message, SimConfig, SimTime};
use rg_schedule::{EventQueue, EventScheduler, Scheduler};
use rg_social::{SocialMessageSpec, SocialNetwork};
use tracing::{debug, error, info};

use crate::{SimError, SimObserver, SimResult};

// ── RunSummary ────────────────────────────────────────────────────────────────

/// Totals reported by [`Simulation::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Messages handled by their destination agent.
    pub delivered:  usize,
    /// Distinct instants the clock moved to.
    pub batches:    usize,
    /// Clock value when the loop stopped.
    pub final_time: SimTime,
}

// ── Simulation ────────────────────────────────────────────────────────────────

/// One simulation instance: scheduling core, agent registry, and an optional
/// social network.
///
/// Instances are independent values; any number may coexist.  Collaborators
/// that schedule messages take `&mut dyn Scheduler`, which `Simulation`
/// implements directly (before a run) and [`SimContext`] implements inside
/// handlers.
///
/// Create via [`Simulation::new`] or [`SimBuilder`][crate::SimBuilder].
pub struct Simulation {
    scheduler: EventScheduler,
    agents:    AgentRegistry,
    social:    Option<Box<dyn SocialNetwork>>,
}

impl Simulation {
    /// A simulation without a social network.  Fails when `config.end`
    /// precedes `config.start`.
    pub fn new(config: &SimConfig) -> SimResult<Self> {
        Ok(Self {
            scheduler: EventScheduler::from_config(config)?,
            agents:    AgentRegistry::new(),
            social:    None,
        })
    }

    /// A simulation composed with `network`.
    pub fn with_social_network<N: SocialNetwork + 'static>(
        config:  &SimConfig,
        network: N,
    ) -> SimResult<Self> {
        let mut sim = Self::new(config)?;
        sim.set_social_network(Box::new(network));
        Ok(sim)
    }

    // ── Clock ─────────────────────────────────────────────────────────────

    pub fn start_time(&self) -> SimTime {
        self.scheduler.start_time()
    }

    pub fn end_time(&self) -> SimTime {
        self.scheduler.end_time()
    }

    pub fn current_time(&self) -> SimTime {
        self.scheduler.current_time()
    }

    // ── Queue ─────────────────────────────────────────────────────────────

    /// Pending messages, for inspection.
    pub fn queue(&self) -> &EventQueue {
        self.scheduler.queue()
    }

    /// Number of pending messages across all instants.
    pub fn pending(&self) -> usize {
        self.scheduler.queue().len()
    }

    // ── Agents ────────────────────────────────────────────────────────────

    /// Register `agent` (upsert by id).  With a social network attached the
    /// agent also becomes a vertex.  Returns the agent it replaced, if any.
    pub fn add_agent<A: Agent>(&mut self, agent: A) -> Option<Box<dyn Agent>> {
        self.add_boxed_agent(Box::new(agent))
    }

    pub fn add_boxed_agent(&mut self, agent: Box<dyn Agent>) -> Option<Box<dyn Agent>> {
        if let Some(network) = self.social.as_deref_mut() {
            network.add_agent(agent.id());
        }
        self.agents.insert(agent)
    }

    pub fn agents(&self) -> &AgentRegistry {
        &self.agents
    }

    /// The agent registered under `id`, if it is a `T`.
    pub fn agent<T: Agent>(&self, id: AgentId) -> Option<&T> {
        self.agents.downcast_ref::<T>(id)
    }

    // ── Social network ────────────────────────────────────────────────────

    /// Attach `network`, replacing any previous one.  Already registered
    /// agents are added as vertices.
    pub fn set_social_network(&mut self, mut network: Box<dyn SocialNetwork>) {
        for id in self.agents.ids() {
            network.add_agent(id);
        }
        info!(agents = network.agent_count(), "attached social network");
        self.social = Some(network);
    }

    pub fn has_social_network(&self) -> bool {
        self.social.is_some()
    }

    pub fn social_network(&self) -> Option<&dyn SocialNetwork> {
        self.social.as_deref()
    }

    pub fn social_network_mut(&mut self) -> Option<&mut (dyn SocialNetwork + 'static)> {
        self.social.as_deref_mut()
    }

    /// Fan `spec` out along the sender's outgoing edges at the current time.
    pub fn send_social_messages(&mut self, spec: &SocialMessageSpec) -> SimResult<usize> {
        let network = self.social.as_deref().ok_or(SimError::NoSocialNetwork)?;
        Ok(network.send_social_messages(spec, &mut self.scheduler))
    }

    /// A handler-style context over this simulation, for collaborators that
    /// want to broadcast before the run starts.
    pub fn context(&mut self) -> SimContext<'_> {
        match self.social.as_deref_mut() {
            Some(network) => SimContext::with_social_network(&mut self.scheduler, network),
            None => SimContext::new(&mut self.scheduler),
        }
    }

    // ── Run loop ──────────────────────────────────────────────────────────

    /// Deliver every pending message in time order until the clock reaches
    /// `end_time` or the queue runs dry.
    ///
    /// The loop condition is `current < end`, checked before each batch is
    /// selected.  A batch at exactly `end_time` is therefore delivered when
    /// the clock reaches it from an earlier instant, and nothing runs once
    /// the clock sits at `end_time`.
    ///
    /// Stops at the first error.  Nothing delivered before it is rolled back
    /// and the clock stays at the failing instant.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        info!(simulation = %self, pending = self.pending(), "starting simulation");
        observer.on_run_start(self.current_time());

        let mut summary = RunSummary {
            delivered:  0,
            batches:    0,
            final_time: self.current_time(),
        };
        while let Some(delivered) = self.step(observer)? {
            summary.delivered += delivered;
            summary.batches += 1;
        }
        summary.final_time = self.current_time();

        info!(
            simulation = %self,
            delivered = summary.delivered,
            batches = summary.batches,
            "simulation finished"
        );
        observer.on_run_end(summary.final_time);
        Ok(summary)
    }

    /// Run exactly one batch: select the earliest instant, move the clock
    /// there, and drain it.
    ///
    /// Returns the number of messages delivered, or `None` when the loop
    /// condition no longer holds.  Useful for tests and incremental stepping.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<usize>> {
        if !self.scheduler.has_next_batch() {
            return Ok(None);
        }
        let Some(time) = self.scheduler.next_time() else {
            return Ok(None);
        };

        let pending = self.scheduler.begin_batch(time)?;
        info!(%time, pending, "running simulation for time");
        observer.on_batch_start(time, pending);

        let delivered = self.drain_batch(time, observer)?;
        self.scheduler.close_batch(time);
        observer.on_batch_end(time, delivered);
        Ok(Some(delivered))
    }

    /// Pop the front of `time`'s bucket until it is empty.  Messages handlers
    /// add at `time` land at the back and are delivered in this same pass.
    fn drain_batch<O: SimObserver>(&mut self, time: SimTime, observer: &mut O) -> SimResult<usize> {
        let mut delivered = 0;
        while let Some(message) = self.scheduler.pop(time) {
            let destination = message.destination();
            let Some(agent) = self.agents.get_mut(destination) else {
                error!(message = %message, %destination, "message sent to unknown agent");
                return Err(SimError::UnknownDestination {
                    message: message.id(),
                    destination,
                });
            };

            debug!(message = %message, "delivering message");
            let mut ctx = match self.social.as_deref_mut() {
                Some(network) => SimContext::with_social_network(&mut self.scheduler, network),
                None => SimContext::new(&mut self.scheduler),
            };
            agent
                .handle(&*message, &mut ctx)
                .map_err(|source| SimError::Handler {
                    agent: destination,
                    message: message.id(),
                    source,
                })?;

            observer.on_delivered(time, &*message);
            delivered += 1;
        }
        Ok(delivered)
    }
}

impl Scheduler for Simulation {
    fn start_time(&self) -> SimTime {
        self.scheduler.start_time()
    }

    fn end_time(&self) -> SimTime {
        self.scheduler.end_time()
    }

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

impl fmt::Display for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Simulation(StartTime={}, EndTime={}, CurrentTime={})",
            self.start_time(),
            self.end_time(),
            self.current_time(),
        )
    }
}
