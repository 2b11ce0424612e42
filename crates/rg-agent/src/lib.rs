//! `rg-agent` — the agent trait and the context handlers run in.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`model`]    | `Agent` trait                                                   |
//! | [`context`]  | `SimContext<'a>` — scheduler + optional social network          |
//! | [`registry`] | `AgentRegistry` — id → agent upsert map                         |
//! | [`noop`]     | `NoopAgent` — placeholder that ignores every message           |
//! | [`error`]    | `AgentError`, `AgentResult<T>`                                  |
//!
//! # Design notes
//!
//! Handlers never see the simulation itself.  The run loop lends each handler
//! a [`SimContext`] built from disjoint borrows of the scheduler and the
//! social network, so an agent can schedule follow-up messages or broadcast
//! while the registry (which owns the agent) stays borrowed by the loop.

pub mod context;
pub mod error;
pub mod model;
pub mod noop;
pub mod registry;


pub use context::SimContext;
pub use error::{AgentError, AgentResult};
pub use model::Agent;
pub use noop::NoopAgent;
pub use registry::AgentRegistry;
