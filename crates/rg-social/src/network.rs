//! The social network: a directed, weighted graph over agent ids.

use std::fmt;

use petgraph::graphmap::DiGraphMap;
use rg_core::AgentId;
use rg_schedule::Scheduler;
use tracing::{debug, trace};

use crate::{DEFAULT_WEIGHT, SocialMessageSpec};

// ── Trait ─────────────────────────────────────────────────────────────────────

/// A directed social structure that can fan a broadcast out along its edges.
///
/// # Contract
///
/// - At most one edge per ordered `(source, target)` pair.
/// - Missing edges are absence, not errors: `get_weight` returns `None` and
///   `remove_edge` is a no-op.
/// - `set_weight` is remove-then-add, so it is idempotent whatever the prior
///   state of the pair.
pub trait SocialNetwork {
    /// Add a vertex for `agent`.  Adding an existing vertex is a no-op.
    fn add_agent(&mut self, agent: AgentId);

    /// Add the edge `source → target`, adding missing vertices.
    fn add_edge(&mut self, source: AgentId, target: AgentId, weight: f64);

    fn remove_edge(&mut self, source: AgentId, target: AgentId);

    fn get_weight(&self, source: AgentId, target: AgentId) -> Option<f64>;

    fn set_weight(&mut self, source: AgentId, target: AgentId, weight: f64) {
        self.remove_edge(source, target);
        self.add_edge(source, target, weight);
    }

    fn contains_agent(&self, agent: AgentId) -> bool;

    /// Outgoing `(target, weight)` pairs of `source`, in iteration order.
    fn neighbors(&self, source: AgentId) -> Vec<(AgentId, f64)>;

    fn agent_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    /// Send one [`SocialMessage`][crate::SocialMessage] per outgoing edge of
    /// `spec.sender()` at the scheduler's current time.
    ///
    /// Returns how many messages were sent.
    fn send_social_messages(&self, spec: &SocialMessageSpec, scheduler: &mut dyn Scheduler) -> usize {
        let targets = self.neighbors(spec.sender());
        let messages = spec.to_messages_with_weights(&targets);
        let sent = messages.len();
        for message in messages {
            scheduler.send_now(Box::new(message));
        }
        debug!(spec = %spec, sent, "sent social messages");
        sent
    }
}

// ── DirectedWeightedNetwork ───────────────────────────────────────────────────

/// [`SocialNetwork`] backed by a petgraph `DiGraphMap`.
///
/// Out-edges iterate in the graph's adjacency order: insertion order until an
/// edge is removed, after which the remaining edges may be reordered.  Callers
/// must not rely on a particular fan-out order.
#[derive(Default, Clone)]
pub struct DirectedWeightedNetwork {
    graph: DiGraphMap<AgentId, f64>,
}

impl DirectedWeightedNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience for the common unweighted case.
    pub fn add_default_edge(&mut self, source: AgentId, target: AgentId) {
        self.add_edge(source, target, DEFAULT_WEIGHT);
    }
}

impl SocialNetwork for DirectedWeightedNetwork {
    fn add_agent(&mut self, agent: AgentId) {
        debug!(%agent, "adding agent to the social network");
        self.graph.add_node(agent);
    }

    fn add_edge(&mut self, source: AgentId, target: AgentId, weight: f64) {
        debug!(%source, %target, weight, "adding edge to the social network");
        if let Some(previous) = self.graph.add_edge(source, target, weight) {
            trace!(%source, %target, previous, "replaced existing edge weight");
        }
    }

    fn remove_edge(&mut self, source: AgentId, target: AgentId) {
        debug!(%source, %target, "removing edge from the social network");
        self.graph.remove_edge(source, target);
    }

    fn get_weight(&self, source: AgentId, target: AgentId) -> Option<f64> {
        trace!(%source, %target, "getting weight from the social network");
        self.graph.edge_weight(source, target).copied()
    }

    fn contains_agent(&self, agent: AgentId) -> bool {
        self.graph.contains_node(agent)
    }

    fn neighbors(&self, source: AgentId) -> Vec<(AgentId, f64)> {
        if !self.graph.contains_node(source) {
            return vec![];
        }
        self.graph
            .edges(source)
            .map(|(_, target, &weight)| (target, weight))
            .collect()
    }

    fn agent_count(&self) -> usize {
        self.graph.node_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl fmt::Debug for DirectedWeightedNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectedWeightedNetwork")
            .field("agents", &self.graph.node_count())
            .field("edges", &self.graph.edge_count())
            .finish()
    }
}

impl fmt::Display for DirectedWeightedNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DirectedWeightedNetwork(Agents={}, Edges={})",
            self.graph.node_count(),
            self.graph.edge_count()
        )
    }
}
