use rg_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("the simulation has no social network")]
    NoSocialNetwork,

    #[error("agent behavior failed: {0}")]
    Behavior(String),
}

pub type AgentResult<T> = Result<T, AgentError>;
