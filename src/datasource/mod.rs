//! Sample storage for live telemetry.
//!
//! Producers append into a [`PendingQueue`]; once per visible frame the queue
//! is drained into a [`SampleBuffer`], which compresses collinear runs, trims
//! the sliding time window, and keeps running extrema for axis scaling.

mod buffer;
mod queue;

pub use buffer::{BOOTSTRAP_SAMPLES, MAX_SAMPLES, READY_SAMPLES, SampleBuffer};
pub use queue::{PendingQueue, Recorder};
pub(crate) use queue::{SharedQueue, lock_queue};

use crate::render::Color;

/// One timestamped observation with its annotation color.
///
/// The color lets a single series encode per-segment state, for example
/// idle versus busy intervals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Timestamp.
    pub t: f64,
    /// Observed value.
    pub y: f64,
    /// Color of the segment ending at this sample.
    pub color: Color,
}

impl Sample {
    /// Create a new sample.
    pub fn new(t: f64, y: f64, color: Color) -> Self {
        Self { t, y, color }
    }
}
