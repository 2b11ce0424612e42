//! `Scheduler` — the scheduling API every collaborator talks to.
//!
//! Periodic-message helpers, wake-up constructors and the social fan-out
//! layer all receive a `&mut dyn Scheduler` explicitly; there is no
//! process-wide "current simulation".  Several independent simulations can
//! therefore live in the same process.

use rg_core::{CoreResult, Message, SimClock, SimConfig, SimTime};
use tracing::{debug, trace};

use crate::EventQueue;

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Insert messages into a simulation's timeline.
///
/// # Contract
///
/// - `schedule` fails with a range error, and has no effect, when
///   `time < start`, `time > end` or `time < current`.
/// - `send_now` targets `current`, which is always schedulable.
/// - Messages that share an instant are delivered in insertion order.
pub trait Scheduler {
    fn start_time(&self) -> SimTime;

    fn end_time(&self) -> SimTime;

    fn current_time(&self) -> SimTime;

    /// Validate `time` without scheduling anything.
    fn check_time(&self, time: SimTime) -> CoreResult<()>;

    /// Append `message` to the bucket for `time`.
    fn schedule(&mut self, message: Box<dyn Message>, time: SimTime) -> CoreResult<()>;

    /// Append `message` to the bucket for the current time.
    fn send_now(&mut self, message: Box<dyn Message>);
}

/// Extension trait that accepts concrete message values instead of boxes.
pub trait SchedulerExt: Scheduler {
    fn schedule_message<M: Message>(&mut self, message: M, time: SimTime) -> CoreResult<()> {
        self.schedule(Box::new(message), time)
    }

    fn send_message_now<M: Message>(&mut self, message: M) {
        self.send_now(Box::new(message));
    }
}

impl<S: Scheduler + ?Sized> SchedulerExt for S {}

// ── EventScheduler ────────────────────────────────────────────────────────────

/// The scheduling core: a bounded clock plus the event queue.
///
/// Only the run loop in `rg-sim` advances the clock, through
/// [`begin_batch`][Self::begin_batch].
pub struct EventScheduler {
    clock: SimClock,
    queue: EventQueue,
}

impl EventScheduler {
    /// Create a scheduler spanning `[start, end]`.
    ///
    /// Fails with `InvalidHorizon` if `end < start`.
    pub fn new(start: SimTime, end: SimTime) -> CoreResult<Self> {
        Ok(Self { clock: SimClock::new(start, end)?, queue: EventQueue::new() })
    }

    pub fn from_config(config: &SimConfig) -> CoreResult<Self> {
        Ok(Self { clock: config.make_clock()?, queue: EventQueue::new() })
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Read-only view of the pending messages.
    pub fn queue(&self) -> &EventQueue {
        &self.queue
    }

    /// `true` while the run loop should select another batch: the clock is
    /// before `end` and something is pending.
    pub fn has_next_batch(&self) -> bool {
        self.clock.is_running() && !self.queue.is_empty()
    }

    /// Earliest pending instant.
    pub fn next_time(&self) -> Option<SimTime> {
        self.queue.next_time()
    }

    /// Advance the clock to `time` and return how many messages wait there.
    pub fn begin_batch(&mut self, time: SimTime) -> CoreResult<usize> {
        self.clock.advance_to(time)?;
        Ok(self.queue.len_at(time))
    }

    /// Next message of the batch at `time`, including ones appended while the
    /// batch is being drained.
    pub fn pop(&mut self, time: SimTime) -> Option<Box<dyn Message>> {
        self.queue.pop(time)
    }

    /// Remove the drained bucket at `time`.
    pub fn close_batch(&mut self, time: SimTime) {
        if self.queue.close(time) {
            trace!(%time, "removed queue for time");
        }
    }
}

impl Scheduler for EventScheduler {
    #[inline]
    fn start_time(&self) -> SimTime {
        self.clock.start()
    }

    #[inline]
    fn end_time(&self) -> SimTime {
        self.clock.end()
    }

    #[inline]
    fn current_time(&self) -> SimTime {
        self.clock.current()
    }

    fn check_time(&self, time: SimTime) -> CoreResult<()> {
        self.clock.check(time)
    }

    fn schedule(&mut self, message: Box<dyn Message>, time: SimTime) -> CoreResult<()> {
        self.clock.check(time)?;
        debug!(message = %message, %time, "scheduling message");
        if self.queue.push(time, message) {
            trace!(%time, "created new queue");
        }
        Ok(())
    }

    fn send_now(&mut self, message: Box<dyn Message>) {
        let now = self.clock.current();
        debug!(message = %message, current_time = %now, "adding message to queue at current time");
        self.queue.push(now, message);
    }
}
