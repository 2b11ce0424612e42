//! `rg-social` — weighted directed social network and broadcast fan-out.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`message`] | `SocialMessage` — payload + edge weight, one per destination  |
//! | [`spec`]    | `SocialMessageSpec` — unscheduled sender + payload template   |
//! | [`network`] | `SocialNetwork` trait, `DirectedWeightedNetwork` (petgraph)   |
//!
//! # Fan-out
//!
//! ```text
//! spec(sender, payload)
//!     ──► for each edge sender → target (weight w):
//!             SocialMessage { sender, target, payload, w }
//!     ──► scheduler.send_now(..)        all land at the current instant
//! ```
//!
//! The network never reads or normalizes weights; they are metadata for the
//! receiving agent.

pub mod message;
pub mod network;
pub mod spec;


pub use message::{DEFAULT_WEIGHT, SocialMessage};
pub use network::{DirectedWeightedNetwork, SocialNetwork};
pub use spec::SocialMessageSpec;
