//! `rg-core` — foundational types for the `reagent` simulation kernel.
//!
//! This crate is a dependency of every other `rg-*` crate.  It intentionally
//! has no `rg-*` dependencies and few external ones (`chrono`, `uuid`, `rand`
//! and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `MessageId`, `SpecId`, `Addressable`       |
//! | [`message`]     | `Message` trait, `AsAny` downcast helper              |
//! | [`time`]        | `SimTime`, `SimClock`, `SimConfig`                    |
//! | [`rng`]         | `IdGenerator` (seeded, reproducible identifiers)      |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and `SimConfig`.     |

pub mod error;
pub mod ids;
pub mod message;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{Addressable, AgentId, MessageId, SpecId};
pub use message::{AsAny, Message};
pub use rng::IdGenerator;
pub use time::{SimClock, SimConfig, SimTime};
