//! `rg-schedule` — the event queue and the scheduling core.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`event_queue`] | `EventQueue` (`BTreeMap<SimTime, VecDeque<Box<dyn Message>>>`) |
//! | [`scheduler`]   | `Scheduler` trait, `SchedulerExt`, `EventScheduler`         |
//!
//! # Delivery order (summary)
//!
//! ```text
//! for each pending instant t, ascending:
//!     current = t
//!     pop t's FIFO bucket front until empty   (appends during the drain count)
//!     drop the empty bucket
//! ```
//!
//! The drain itself lives in `rg-sim`, which owns the agent registry; this
//! crate provides the primitives it is built from.

pub mod event_queue;
pub mod scheduler;


pub use event_queue::EventQueue;
pub use scheduler::{EventScheduler, Scheduler, SchedulerExt};
