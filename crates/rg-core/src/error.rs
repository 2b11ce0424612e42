//! Argument and range errors shared by every `rg-*` crate.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, so a range violation raised deep inside a handler
//! reaches the run loop unchanged.

use chrono::TimeDelta;
use thiserror::Error;

use crate::SimTime;

/// Invalid configuration or an out-of-range timestamp.
///
/// These are surfaced to the immediate caller and the failing operation has
/// no effect.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("time {time} is before the start time {start}")]
    TimeBeforeStart { time: SimTime, start: SimTime },

    #[error("time {time} is after the end time {end}")]
    TimeAfterEnd { time: SimTime, end: SimTime },

    #[error("time {time} is before the current time {current}")]
    TimeBeforeCurrent { time: SimTime, current: SimTime },

    #[error("end time {end} is before start time {start}")]
    InvalidHorizon { start: SimTime, end: SimTime },

    #[error("the start time {start} is after the end time {end}")]
    StartAfterEnd { start: SimTime, end: SimTime },

    #[error("the interval is zero")]
    ZeroInterval,

    #[error("the interval {0} is negative")]
    NegativeInterval(TimeDelta),
}

impl CoreError {
    /// `true` for the three "timestamp outside the schedulable window" variants.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            CoreError::TimeBeforeStart { .. }
                | CoreError::TimeAfterEnd { .. }
                | CoreError::TimeBeforeCurrent { .. }
        )
    }
}

/// Shorthand result type for all `rg-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
