//! `rg-sim` — the run loop for the reagent simulation kernel.
//!
//! # Run loop
//!
//! ```text
//! while current < end and the queue is not empty:
//!   ① Select   — earliest pending instant t; current = t.
//!   ② Drain    — pop t's bucket front until empty; messages handlers add
//!                at t join this same pass.
//!   ③ Dispatch — look up message.destination in the registry and call
//!                Agent::handle with a SimContext; an unknown destination
//!                aborts the run.
//!   ④ Close    — drop t's empty bucket.
//! ```
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                 |
//! |-----------|--------------------------------------------------------|
//! | `fx-hash` | FxHash for the agent registry.                         |
//! | `serde`   | `Serialize`/`Deserialize` on `SimConfig`.              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rg_core::SimConfig;
//! use rg_sim::{NoopObserver, SimBuilder};
//! use rg_social::DirectedWeightedNetwork;
//!
//! let mut sim = SimBuilder::new(SimConfig::new(start, end))
//!     .social_network(DirectedWeightedNetwork::new())
//!     .agent(alice)
//!     .agent(bob)
//!     .build()?;
//! sim.schedule_message(WakeUpMessage::new(alice_id, start), start)?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{RunSummary, Simulation};
