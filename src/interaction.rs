//! Per-frame hover hit testing for plotted segments.
//!
//! Hover state is an output of each draw pass: it is rebuilt from geometry
//! every frame and never carried over.

use crate::datasource::Sample;
use crate::geom::{ScreenPoint, ScreenRect};
use crate::render::Canvas;

const STRIP_TOP_INSET: f32 = 2.0;

/// The sample under the pointer in the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hover {
    /// Sample ending the hovered segment.
    pub sample: Sample,
    /// Full-height strip spanning the hovered segment.
    pub strip: ScreenRect,
}

impl Hover {
    /// One pixel wide highlight at the right edge of the strip.
    pub fn highlight(&self) -> ScreenRect {
        self.strip.right_part(1.0)
    }
}

/// Full-height strip spanning a segment horizontally, clamped to `plot`.
pub(crate) fn hover_strip(from_x: f32, to_x: f32, plot: ScreenRect) -> ScreenRect {
    let left = from_x.min(to_x).clamp(plot.min.x, plot.max.x);
    let right = from_x.max(to_x).clamp(plot.min.x, plot.max.x);
    ScreenRect::new(
        ScreenPoint::new(left, (plot.min.y + STRIP_TOP_INSET).min(plot.max.y)),
        ScreenPoint::new(right, plot.max.y),
    )
}

/// Collects the hovered segment while segments are drawn left to right.
#[derive(Debug, Default)]
pub(crate) struct HoverTracker {
    hit: Option<Hover>,
}

impl HoverTracker {
    /// Test one segment's strip; a later match replaces an earlier one.
    pub(crate) fn probe(&mut self, canvas: &impl Canvas, strip: ScreenRect, sample: Sample) {
        if canvas.is_hovered(strip) {
            self.hit = Some(Hover { sample, strip });
        }
    }

    pub(crate) fn finish(self) -> Option<Hover> {
        self.hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::MonospaceMeasurer;
    use crate::render::{Color, RecordingCanvas};

    fn plot() -> ScreenRect {
        ScreenRect::from_origin_size(0.0, 0.0, 100.0, 50.0)
    }

    #[test]
    fn strip_spans_segment_and_plot_height() {
        let strip = hover_strip(30.0, 10.0, plot());
        assert_eq!(strip.min.x, 10.0);
        assert_eq!(strip.max.x, 30.0);
        assert_eq!(strip.min.y, 2.0);
        assert_eq!(strip.max.y, 50.0);
    }

    #[test]
    fn strip_is_clamped_to_plot() {
        let strip = hover_strip(90.0, 140.0, plot());
        assert_eq!(strip.max.x, 100.0);
    }

    #[test]
    fn shared_boundary_goes_to_later_segment() {
        let canvas = RecordingCanvas::new(MonospaceMeasurer::default())
            .with_pointer(Some(ScreenPoint::new(20.0, 25.0)));
        let mut tracker = HoverTracker::default();
        let left = Sample::new(1.0, 0.0, Color::CYAN);
        let right = Sample::new(2.0, 0.0, Color::CYAN);
        tracker.probe(&canvas, hover_strip(10.0, 20.0, plot()), left);
        tracker.probe(&canvas, hover_strip(20.0, 30.0, plot()), right);
        let hover = tracker.finish().expect("pointer over both strips");
        assert_eq!(hover.sample, right);
        assert_eq!(hover.highlight().min.x, 29.0);
    }

    #[test]
    fn no_pointer_means_no_hover() {
        let canvas = RecordingCanvas::new(MonospaceMeasurer::default());
        let mut tracker = HoverTracker::default();
        tracker.probe(
            &canvas,
            hover_strip(0.0, 100.0, plot()),
            Sample::new(0.0, 0.0, Color::CYAN),
        );
        assert!(tracker.finish().is_none());
    }
}
