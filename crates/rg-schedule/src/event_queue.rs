//! `EventQueue` — sparse, time-ordered message buckets.
//!
//! # Why this shape
//!
//! Simulations run over long horizons (years) but only a handful of instants
//! carry events.  Keying a `BTreeMap` on the exact instant avoids a slot per
//! tick; each value is a FIFO so messages that share an instant are delivered
//! in the order they were scheduled, which makes runs replay identically.
//!
//! `BTreeMap` gives O(log W) insert and O(log W) lookup of the earliest bucket
//! where W = number of distinct pending instants.

use std::collections::{BTreeMap, VecDeque};

use rg_core::{Message, SimTime};

/// Pending messages keyed by delivery time.
///
/// No key maps to an empty bucket except the one currently being drained,
/// which [`close`][Self::close] removes.
#[derive(Default)]
pub struct EventQueue {
    inner: BTreeMap<SimTime, VecDeque<Box<dyn Message>>>,
    /// Cached total message count for O(1) `len()`.
    total: usize,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `message` to the end of the bucket for `time`.
    ///
    /// Returns `true` if the bucket had to be created.  No range checking
    /// happens here; that is the scheduler's job.
    pub fn push(&mut self, time: SimTime, message: Box<dyn Message>) -> bool {
        let created = !self.inner.contains_key(&time);
        self.inner.entry(time).or_default().push_back(message);
        self.total += 1;
        created
    }

    /// Remove and return the front message of the bucket at `time`.
    ///
    /// The bucket itself is left in place when it empties, so messages pushed
    /// at `time` afterwards still join the same batch.
    pub fn pop(&mut self, time: SimTime) -> Option<Box<dyn Message>> {
        let message = self.inner.get_mut(&time)?.pop_front()?;
        self.total -= 1;
        Some(message)
    }

    /// Drop the bucket at `time` if it is empty.  Returns `true` if removed.
    pub fn close(&mut self, time: SimTime) -> bool {
        match self.inner.get(&time) {
            Some(bucket) if bucket.is_empty() => {
                self.inner.remove(&time);
                true
            }
            _ => false,
        }
    }

    /// The earliest instant with at least one queued message, or `None`.
    pub fn next_time(&self) -> Option<SimTime> {
        self.inner
            .iter()
            .find(|(_, bucket)| !bucket.is_empty())
            .map(|(&time, _)| time)
    }

    /// Number of messages queued at exactly `time`.
    pub fn len_at(&self, time: SimTime) -> usize {
        self.inner.get(&time).map_or(0, VecDeque::len)
    }

    /// Messages queued at `time`, front first.
    pub fn iter_at(&self, time: SimTime) -> impl Iterator<Item = &dyn Message> {
        self.inner
            .get(&time)
            .into_iter()
            .flat_map(|bucket| bucket.iter().map(|m| &**m))
    }

    /// Every queued message with its delivery time, in delivery order.
    pub fn iter(&self) -> impl Iterator<Item = (SimTime, &dyn Message)> {
        self.inner
            .iter()
            .flat_map(|(&time, bucket)| bucket.iter().map(move |m| (time, &**m)))
    }

    /// Distinct instants that currently own a bucket, ascending.
    pub fn times(&self) -> impl Iterator<Item = SimTime> + '_ {
        self.inner.keys().copied()
    }

    /// Total number of messages across all instants.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct instants that currently own a bucket.
    pub fn time_count(&self) -> usize {
        self.inner.len()
    }
}
