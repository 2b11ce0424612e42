//! Simulation observer trait for progress reporting and data collection.

use rg_core::{Message, SimTime};

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at key
/// points in the run loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — delivery counter
///
/// ```rust,ignore
/// struct Counter { delivered: usize }
///
/// impl SimObserver for Counter {
///     fn on_delivered(&mut self, _time: SimTime, _message: &dyn Message) {
///         self.delivered += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first batch is selected.
    fn on_run_start(&mut self, _current: SimTime) {}

    /// Called after the clock moved to `time`, before its batch is drained.
    ///
    /// `pending` is the bucket size at that moment; messages added during the
    /// drain are not counted.
    fn on_batch_start(&mut self, _time: SimTime, _pending: usize) {}

    /// Called after `message` was handled by its destination.
    fn on_delivered(&mut self, _time: SimTime, _message: &dyn Message) {}

    /// Called after the batch at `time` is drained and removed.
    fn on_batch_end(&mut self, _time: SimTime, _delivered: usize) {}

    /// Called once after the loop ends normally.  Not called when the run
    /// aborts with an error.
    fn on_run_end(&mut self, _final_time: SimTime) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
