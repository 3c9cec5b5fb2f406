//! Producer-side pending queue.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::warn;

use crate::render::Color;

use super::Sample;

/// Bounded FIFO of samples waiting to be drained into a buffer.
///
/// Pushing never blocks and never touches buffer state. When the queue is
/// full the oldest pending sample is dropped, since the newest data is what
/// the sliding window shows.
#[derive(Debug, Clone)]
pub struct PendingQueue {
    samples: VecDeque<Sample>,
    capacity: usize,
    dropped: u64,
    overflowing: bool,
}

impl PendingQueue {
    /// Create a queue holding at most `capacity` samples (at least one).
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::new(),
            capacity: capacity.max(1),
            dropped: 0,
            overflowing: false,
        }
    }

    /// Append a sample, dropping the oldest one when full.
    pub fn push(&mut self, sample: Sample) {
        if self.samples.len() >= self.capacity {
            self.samples.pop_front();
            self.dropped = self.dropped.saturating_add(1);
            if !self.overflowing {
                self.overflowing = true;
                warn!(
                    "pending sample queue full ({} samples), dropping oldest",
                    self.capacity
                );
            }
        }
        self.samples.push_back(sample);
    }

    /// Remove and return every pending sample in arrival order.
    pub fn take_all(&mut self) -> Vec<Sample> {
        self.overflowing = false;
        self.samples.drain(..).collect()
    }

    /// Number of pending samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Maximum number of pending samples.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total samples dropped because the queue was full.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

pub(crate) type SharedQueue = Arc<Mutex<PendingQueue>>;

pub(crate) fn lock_queue(queue: &Mutex<PendingQueue>) -> MutexGuard<'_, PendingQueue> {
    // A producer that panicked mid-push leaves the queue structurally intact.
    queue.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Cloneable producer handle for a series' pending queue.
///
/// Use this to record samples from a thread other than the one drawing the
/// series. Recording only appends to the queue.
#[derive(Debug, Clone)]
pub struct Recorder {
    queue: SharedQueue,
    default_color: Color,
}

impl Recorder {
    pub(crate) fn new(queue: SharedQueue, default_color: Color) -> Self {
        Self {
            queue,
            default_color,
        }
    }

    /// Queue a sample with the series' default color.
    pub fn record(&self, t: f64, y: f64) {
        self.record_with_color(t, y, self.default_color);
    }

    /// Queue a sample with an explicit annotation color.
    pub fn record_with_color(&self, t: f64, y: f64, color: Color) {
        lock_queue(&self.queue).push(Sample::new(t, y, color));
    }
}
