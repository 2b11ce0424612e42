//! Fluent builder for constructing a [`Simulation`].

use rg_agent::Agent;
use rg_core::SimConfig;
use rg_social::SocialNetwork;

use crate::{SimResult, Simulation};

/// Fluent builder for [`Simulation`].
///
/// # Required inputs
///
/// - [`SimConfig`] — start and end of the horizon
///
/// # Optional inputs
///
/// | Method                 | Default                 |
/// |------------------------|-------------------------|
/// | `.social_network(n)`   | none                    |
/// | `.agent(a)`            | empty registry          |
/// | `.agents(iter)`        | empty registry          |
///
/// Agents are registered after the social network is attached, so every
/// agent becomes a vertex regardless of call order.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::new(start, end))
///     .social_network(DirectedWeightedNetwork::new())
///     .agents(people)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    agents: Vec<Box<dyn Agent>>,
    social: Option<Box<dyn SocialNetwork>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, agents: Vec::new(), social: None }
    }

    pub fn agent<A: Agent>(mut self, agent: A) -> Self {
        self.agents.push(Box::new(agent));
        self
    }

    pub fn agents<I>(mut self, agents: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Agent>>,
    {
        self.agents.extend(agents);
        self
    }

    pub fn social_network<N: SocialNetwork + 'static>(mut self, network: N) -> Self {
        self.social = Some(Box::new(network));
        self
    }

    /// Validate the horizon and return a ready-to-run [`Simulation`].
    pub fn build(self) -> SimResult<Simulation> {
        let mut sim = Simulation::new(&self.config)?;
        if let Some(network) = self.social {
            sim.set_social_network(network);
        }
        for agent in self.agents {
            sim.add_boxed_agent(agent);
        }
        Ok(sim)
    }
}
