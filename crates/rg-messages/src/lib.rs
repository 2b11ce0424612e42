//! `rg-messages` — ready-made self-addressed messages.
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`regular`]  | `RegularEventMessage` and `create_and_schedule` (periodic)   |
//! | [`wake_up`]  | `WakeUpMessage` — "wake me at t"                             |
//!
//! Both take the scheduler they schedule into as an argument; pass the
//! simulation before `run`, or the handler's `SimContext` during it.

pub mod regular;
pub mod wake_up;

#[cfg(test)]
mod tests;

pub use regular::RegularEventMessage;
pub use wake_up::WakeUpMessage;
