//! Axis label formatting, gridline placement, and text measurement.

use std::sync::Arc;

use crate::view::Range;

/// Formatter for axis and readout labels.
#[derive(Clone)]
pub enum AxisFormatter {
    /// Round to a number of decimal places and print the shortest form.
    Rounded(u32),
    /// Custom formatter callback.
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl AxisFormatter {
    /// Format a value for display.
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Rounded(decimals) => {
                let rounded = round_to(value, *decimals);
                // Avoid printing "-0" for tiny negative values.
                if rounded == 0.0 {
                    "0".to_string()
                } else {
                    format!("{rounded}")
                }
            }
            Self::Custom(formatter) => formatter(value),
        }
    }
}

impl Default for AxisFormatter {
    fn default() -> Self {
        Self::Rounded(3)
    }
}

impl std::fmt::Debug for AxisFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rounded(decimals) => write!(f, "AxisFormatter::Rounded({decimals})"),
            Self::Custom(_) => write!(f, "AxisFormatter::Custom(..)"),
        }
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10_f64.powi(decimals.min(15) as i32);
    (value * scale).round() / scale
}

/// A horizontal gridline: its height fraction from the bottom and the value
/// it labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    /// Fraction of the plot height, 0 at the bottom and 1 at the top.
    pub fraction: f64,
    /// Value at that height.
    pub value: f64,
}

/// Evenly spaced gridlines over `range`, `divisions + 1` of them including
/// both ends.
pub fn grid_lines(range: Range, divisions: usize) -> impl Iterator<Item = GridLine> {
    let divisions = divisions.max(1);
    (0..=divisions).map(move |index| {
        let fraction = index as f64 / divisions as f64;
        GridLine {
            fraction,
            value: range.lerp(fraction),
        }
    })
}

/// Text measurement provided by the host.
pub trait TextMeasurer {
    /// Measure the width and height of a single line of text.
    fn measure(&self, text: &str, size: f32) -> (f32, f32);
}

/// Fixed-advance measurer for headless rendering and tests.
///
/// Every character advances by `advance * size` pixels and lines are
/// `1.2 * size` tall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    /// Advance per character as a fraction of the font size.
    pub advance: f32,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self { advance: 0.6 }
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        if text.is_empty() {
            return (0.0, 0.0);
        }
        let width = text.chars().count() as f32 * self.advance * size;
        (width, size * 1.2)
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        (**self).measure(text, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounded_formatter_prints_shortest_form() {
        let formatter = AxisFormatter::Rounded(4);
        assert_eq!(formatter.format(0.841_470_984), "0.8415");
        assert_eq!(formatter.format(12.5), "12.5");
        assert_eq!(formatter.format(-0.000_01), "0");
    }

    #[test]
    fn custom_formatter_is_used() {
        let formatter = AxisFormatter::Custom(Arc::new(|value| format!("{value:.1} ms")));
        assert_eq!(formatter.format(2.26), "2.3 ms");
    }

    #[test]
    fn grid_lines_span_range() {
        let lines: Vec<_> = grid_lines(Range::new(-1.0, 1.0), 5).collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0].value, -1.0);
        assert!((lines[5].value - 1.0).abs() < 1e-12);
        assert!((lines[1].fraction - 0.2).abs() < 1e-12);
    }

    #[test]
    fn monospace_measurer_scales_with_length() {
        let measurer = MonospaceMeasurer::default();
        let (short, _) = measurer.measure("0.0", 10.0);
        let (long, height) = measurer.measure("0.00000", 10.0);
        assert!(long > short);
        assert!((height - 12.0).abs() < 1e-6);
        assert_eq!(measurer.measure("", 10.0), (0.0, 0.0));
    }
}
