//! Logical time model.
//!
//! # Design
//!
//! Time is a calendar timestamp (`SimTime = DateTime<Utc>`) rather than an
//! integer tick: events are sparse, so the event queue keys on the exact
//! instant and never allocates per-tick slots.  The clock holds three
//! instants:
//!
//! ```text
//! start ≤ current ≤ end        (both bounds inclusive)
//! ```
//!
//! `current` only moves forward, and only the run loop moves it.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::{CoreError, CoreResult};

/// A point on the simulation's logical timeline.
pub type SimTime = DateTime<Utc>;

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The bounded logical clock of one simulation.
///
/// `start` and `end` are fixed at construction; `current` starts at `start`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimClock {
    start:   SimTime,
    end:     SimTime,
    current: SimTime,
}

impl SimClock {
    /// Create a clock spanning `[start, end]`.
    ///
    /// Fails with [`CoreError::InvalidHorizon`] if `end < start`.
    pub fn new(start: SimTime, end: SimTime) -> CoreResult<Self> {
        if end < start {
            return Err(CoreError::InvalidHorizon { start, end });
        }
        Ok(Self { start, end, current: start })
    }

    #[inline]
    pub fn start(&self) -> SimTime {
        self.start
    }

    #[inline]
    pub fn end(&self) -> SimTime {
        self.end
    }

    #[inline]
    pub fn current(&self) -> SimTime {
        self.current
    }

    /// `true` while the run loop is allowed to select another batch.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.current < self.end
    }

    /// Check that `time` may still be scheduled: inside `[start, end]` and not
    /// before `current`.
    pub fn check(&self, time: SimTime) -> CoreResult<()> {
        if time < self.start {
            return Err(CoreError::TimeBeforeStart { time, start: self.start });
        }
        if time > self.end {
            return Err(CoreError::TimeAfterEnd { time, end: self.end });
        }
        if time < self.current {
            return Err(CoreError::TimeBeforeCurrent { time, current: self.current });
        }
        Ok(())
    }

    /// Move `current` forward to `time`.
    ///
    /// Validated like [`check`][Self::check], so the clock can never run
    /// backwards or leave its horizon.
    pub fn advance_to(&mut self, time: SimTime) -> CoreResult<()> {
        self.check(time)?;
        self.current = time;
        Ok(())
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SimClock(StartTime={}, EndTime={}, CurrentTime={})",
            self.start, self.end, self.current
        )
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a TOML/JSON file by the application crate (enable the
/// `serde` feature) and passed to the simulation builder.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// First schedulable instant (inclusive).
    pub start: SimTime,

    /// Last schedulable instant (inclusive).  Must not precede `start`.
    pub end: SimTime,
}

impl SimConfig {
    pub fn new(start: SimTime, end: SimTime) -> Self {
        Self { start, end }
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.end < self.start {
            return Err(CoreError::InvalidHorizon { start: self.start, end: self.end });
        }
        Ok(())
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> CoreResult<SimClock> {
        SimClock::new(self.start, self.end)
    }
}
