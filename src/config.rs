//! Series configuration.

use thiserror::Error;

use crate::axis::AxisFormatter;
use crate::render::Color;

/// Default visible time window, in the producer's time units.
pub const DEFAULT_TIME_WINDOW: f64 = 250.0;
/// Default bound on samples waiting to be drained into a buffer.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1 << 16;

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The time window is not a finite positive width.
    #[error("time window must be finite and positive, got {0}")]
    InvalidTimeWindow(f64),
    /// The pending queue cannot hold any sample.
    #[error("pending queue capacity must be at least 1")]
    ZeroQueueCapacity,
    /// The plot area has no height.
    #[error("plot height must be finite and positive, got {0}")]
    InvalidPlotHeight(f32),
    /// The value axis needs at least one gridline interval.
    #[error("value axis needs at least one grid division")]
    ZeroGridDivisions,
}

/// Configuration for a [`Series`](crate::series::Series).
#[derive(Debug, Clone)]
pub struct SeriesConfig {
    /// Width of the sliding time window.
    pub time_window: f64,
    /// Maximum number of pending samples kept while the panel is collapsed.
    pub queue_capacity: usize,
    /// Color used by [`Series::record`](crate::series::Series::record).
    pub default_color: Color,
    /// The plot is drawn only when the buffer holds more samples than this.
    pub min_plot_samples: usize,
    /// Height of the plot area in pixels.
    pub plot_height: f32,
    /// Height of the min/current/max header row in pixels.
    pub header_height: f32,
    /// Number of intervals between value gridlines.
    pub grid_divisions: usize,
    /// Formatter for timestamps in the header.
    pub time_formatter: AxisFormatter,
    /// Formatter for values on gridlines.
    pub value_formatter: AxisFormatter,
    /// Formatter for the hovered value in the header readout.
    pub readout_formatter: AxisFormatter,
    /// Whether the panel starts expanded.
    pub expanded: bool,
}

impl SeriesConfig {
    /// Check that every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_time_window(self.time_window)?;
        if self.queue_capacity == 0 {
            return Err(ConfigError::ZeroQueueCapacity);
        }
        if !self.plot_height.is_finite() || self.plot_height <= 0.0 {
            return Err(ConfigError::InvalidPlotHeight(self.plot_height));
        }
        if self.grid_divisions == 0 {
            return Err(ConfigError::ZeroGridDivisions);
        }
        Ok(())
    }
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            time_window: DEFAULT_TIME_WINDOW,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            default_color: Color::CYAN,
            min_plot_samples: 24,
            plot_height: 100.0,
            header_height: 15.0,
            grid_divisions: 5,
            time_formatter: AxisFormatter::Rounded(4),
            value_formatter: AxisFormatter::Rounded(3),
            readout_formatter: AxisFormatter::Rounded(4),
            expanded: false,
        }
    }
}

pub(crate) fn validate_time_window(width: f64) -> Result<f64, ConfigError> {
    if width.is_finite() && width > 0.0 {
        Ok(width)
    } else {
        Err(ConfigError::InvalidTimeWindow(width))
    }
}
