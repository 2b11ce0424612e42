use rg_agent::AgentError;
use rg_core::{AgentId, CoreError, MessageId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A message was addressed to an id with no registered agent.  Fatal:
    /// the run stops and the clock stays at the failing instant.
    #[error("message {message} sent to unknown agent {destination}")]
    UnknownDestination {
        message:     MessageId,
        destination: AgentId,
    },

    #[error("agent {agent} failed while handling message {message}: {source}")]
    Handler {
        agent:   AgentId,
        message: MessageId,
        #[source]
        source:  AgentError,
    },

    #[error("the simulation has no social network")]
    NoSocialNetwork,
}

pub type SimResult<T> = Result<T, SimError>;
