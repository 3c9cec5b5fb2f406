//! Bounded sample buffer with collinear compression and a sliding window.

use std::collections::VecDeque;

use log::trace;

use crate::config::{ConfigError, DEFAULT_TIME_WINDOW, validate_time_window};
use crate::view::{Range, Viewport};

use super::Sample;

/// Hard cap on committed samples; the oldest is evicted beyond it.
pub const MAX_SAMPLES: usize = 1500;
/// Samples committed unconditionally before compression starts.
pub const BOOTSTRAP_SAMPLES: usize = 16;
/// The buffer is ready to plot once it holds more than this many samples.
pub const READY_SAMPLES: usize = 16;

const SLOPE_TOLERANCE: f64 = 1e-3;
const MAX_EXTREMUM_AGE: u8 = 15;

/// Ordered, bounded store of committed samples.
///
/// Ingestion ([`add`](Self::add)) applies the compression policy and keeps
/// running extrema. [`rebuild`](Self::rebuild) runs once per render pass to
/// trim the time window and re-verify extrema that may have aged out.
///
/// Samples are kept in non-decreasing time order. A run of near-collinear
/// samples with the same color collapses to its endpoints by overwriting the
/// newest sample in place.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    samples: VecDeque<Sample>,
    time_window: f64,
    min_y: f64,
    max_y: f64,
    min_age: u8,
    max_age: u8,
    streak: u32,
}

impl SampleBuffer {
    /// Create an empty buffer with the default time window.
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(MAX_SAMPLES),
            time_window: DEFAULT_TIME_WINDOW,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
            min_age: 0,
            max_age: 0,
            streak: 0,
        }
    }

    /// Create an empty buffer showing the last `width` time units.
    pub fn with_time_window(width: f64) -> Result<Self, ConfigError> {
        let mut buffer = Self::new();
        buffer.time_window = validate_time_window(width)?;
        Ok(buffer)
    }

    /// Ingest one sample.
    ///
    /// Samples with a non-finite time or value are ignored. A sample stamped
    /// before the newest committed one is treated as a simultaneous update at
    /// the newest timestamp.
    pub fn add(&mut self, mut sample: Sample) {
        if !sample.t.is_finite() || !sample.y.is_finite() {
            trace!("ignoring non-finite sample ({}, {})", sample.t, sample.y);
            return;
        }
        if let Some(last) = self.samples.back() {
            if sample.t < last.t {
                sample.t = last.t;
            }
        }

        if self.samples.len() < BOOTSTRAP_SAMPLES {
            self.push(sample);
            return;
        }

        if self.samples.len() >= MAX_SAMPLES {
            self.samples.pop_front();
        }

        let len = self.samples.len();
        let last = self.samples[len - 1];
        if last.t == sample.t {
            self.push(sample);
            return;
        }
        let prev = self.samples[len - 2];
        if prev.t == last.t {
            self.push(sample);
            return;
        }

        let m1 = (last.y - prev.y) / (last.t - prev.t);
        let m0 = (sample.y - last.y) / (sample.t - last.t);
        if (m1 - m0).abs() < SLOPE_TOLERANCE {
            let streak = self.streak;
            self.streak = streak.saturating_add(1);
            if streak > 1 && sample.color == last.color {
                self.replace_last(sample);
            } else {
                self.push(sample);
            }
            return;
        }

        self.streak = 0;
        self.push(sample);
    }

    /// Trim the sliding window and age the running extrema.
    ///
    /// Everything older than `last.t - time_window` is dropped and the
    /// leftmost retained sample is moved onto that boundary by linear
    /// interpolation, so the visible curve starts at the true value there.
    pub fn rebuild(&mut self) {
        let len = self.samples.len();
        if len < 2 {
            return;
        }
        let last_t = self.samples[len - 1].t;

        let mut cursor = 0;
        while cursor + 1 < len && last_t - self.samples[cursor].t > self.time_window {
            cursor += 1;
        }

        if cursor > 0 {
            let p0 = self.samples[cursor - 1];
            let p1 = self.samples[cursor];
            if p0.t != p1.t {
                let boundary = last_t - self.time_window;
                let y = p0.y + (p1.y - p0.y) * (boundary - p0.t) / (p1.t - p0.t);
                self.samples[cursor - 1] = Sample::new(boundary, y, p0.color);
            }
            self.samples.drain(..cursor - 1);
            trace!(
                "window trim dropped {} samples, {} remain",
                cursor - 1,
                self.samples.len()
            );
        }

        if self.min_age > 0 && self.max_age > 0 {
            self.min_age -= 1;
            self.max_age -= 1;
        } else {
            self.rescan_extrema();
        }
    }

    /// Visible time window width.
    pub fn time_window(&self) -> f64 {
        self.time_window
    }

    /// Change the visible time window, re-deriving bounds when it changes.
    pub fn set_time_window(&mut self, width: f64) -> Result<(), ConfigError> {
        let width = validate_time_window(width)?;
        if width == self.time_window {
            return Ok(());
        }
        self.time_window = width;
        self.rebuild();
        Ok(())
    }

    /// Iterate over committed samples, oldest first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Sample> + '_ {
        self.samples.iter()
    }

    /// Access a committed sample by index.
    pub fn get(&self, index: usize) -> Option<Sample> {
        self.samples.get(index).copied()
    }

    /// Oldest committed sample.
    pub fn first(&self) -> Option<Sample> {
        self.samples.front().copied()
    }

    /// Newest committed sample.
    pub fn last(&self) -> Option<Sample> {
        self.samples.back().copied()
    }

    /// Number of committed samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if there are no committed samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Whether enough samples exist to draw a meaningful chart.
    pub fn is_ready(&self) -> bool {
        self.samples.len() > READY_SAMPLES
    }

    /// Running minimum value (`+inf` when empty).
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    /// Running maximum value (`-inf` when empty).
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Timestamp of the oldest sample.
    pub fn min_t(&self) -> Option<f64> {
        self.samples.front().map(|sample| sample.t)
    }

    /// Timestamp of the newest sample.
    pub fn max_t(&self) -> Option<f64> {
        self.samples.back().map(|sample| sample.t)
    }

    /// Displayed time span: the data span capped at the window width.
    pub fn range_t(&self) -> f64 {
        match (self.min_t(), self.max_t()) {
            (Some(min), Some(max)) => (max - min).min(self.time_window),
            _ => 0.0,
        }
    }

    /// Value span between the running extrema, 0 when undefined.
    pub fn range_y(&self) -> f64 {
        let range = self.max_y - self.min_y;
        if range.is_finite() { range.max(0.0) } else { 0.0 }
    }

    /// Data bounds used for plotting.
    pub fn bounds(&self) -> Option<Viewport> {
        let min_t = self.min_t()?;
        Some(Viewport::new(
            Range::new(min_t, min_t + self.range_t()),
            Range::new(self.min_y, self.max_y),
        ))
    }

    fn push(&mut self, sample: Sample) {
        self.samples.push_back(sample);
        self.track_extrema(sample.y);
    }

    fn replace_last(&mut self, sample: Sample) {
        if let Some(last) = self.samples.back_mut() {
            *last = sample;
        }
        self.track_extrema(sample.y);
    }

    fn track_extrema(&mut self, y: f64) {
        let age = self.samples.len().min(MAX_EXTREMUM_AGE as usize) as u8;
        if y > self.max_y {
            self.max_y = y;
            self.max_age = age;
        }
        if y < self.min_y {
            self.min_y = y;
            self.min_age = age;
        }
    }

    fn rescan_extrema(&mut self) {
        let Some(last) = self.samples.back() else {
            return;
        };
        let newest_age = age_for_index(self.samples.len() - 1);
        let (mut min_y, mut max_y) = (last.y, last.y);
        let (mut min_age, mut max_age) = (newest_age, newest_age);
        for (index, sample) in self.samples.iter().enumerate() {
            if sample.y < min_y {
                min_y = sample.y;
                min_age = age_for_index(index);
            }
            if sample.y > max_y {
                max_y = sample.y;
                max_age = age_for_index(index);
            }
        }
        trace!("rescanned extrema: min {min_y} (age {min_age}), max {max_y} (age {max_age})");
        self.min_y = min_y;
        self.max_y = max_y;
        self.min_age = min_age;
        self.max_age = max_age;
    }
}

impl Default for SampleBuffer {
    fn default() -> Self {
        Self::new()
    }
}

// Samples near the front scroll out first, so their extrema are trusted for
// fewer rebuilds.
fn age_for_index(index: usize) -> u8 {
    index.min(MAX_EXTREMUM_AGE as usize) as u8
}
