//! Plot-area rendering for a sample buffer.

use crate::axis::grid_lines;
use crate::config::SeriesConfig;
use crate::datasource::SampleBuffer;
use crate::geom::{ScreenPoint, ScreenRect};
use crate::interaction::{Hover, HoverTracker, hover_strip};
use crate::style::Theme;
use crate::transform::Transform;

use super::{Canvas, LineStyle, RectStyle, TextAnchor, TextStyle, clip_segment};

const PLOT_MARGIN: f32 = 5.0;
const LABEL_GAP: f32 = 5.0;
const GRID_INSET: f32 = 2.0;
const LABEL_SAMPLE: &str = "0.00000";

/// Draw the plot area for `buffer` into `rect` and return the hovered
/// segment, if any.
///
/// Draws a filled background, labeled value gridlines, and one line segment
/// per consecutive sample pair in the later sample's color.
pub(crate) fn draw_chart(
    buffer: &SampleBuffer,
    rect: ScreenRect,
    canvas: &mut impl Canvas,
    theme: &Theme,
    config: &SeriesConfig,
) -> Option<Hover> {
    canvas.draw_rect(rect, RectStyle::filled(theme.plot_background));

    if !buffer.is_ready() {
        let style = TextStyle {
            color: theme.text,
            size: theme.placeholder_size,
            anchor: TextAnchor::Center,
        };
        canvas.draw_text(rect, "Preparing", &style);
        return None;
    }

    let bounds = buffer.bounds()?;
    let rect = rect.contracted_by(PLOT_MARGIN);
    let (label_width, label_height) = canvas.measure_text(LABEL_SAMPLE, theme.label_size);
    let label_offset = label_width + LABEL_GAP;

    let label_style = TextStyle {
        color: theme.text,
        size: theme.label_size,
        anchor: TextAnchor::Left,
    };
    for line in grid_lines(bounds.value, config.grid_divisions) {
        let y = rect.max.y - rect.height() * line.fraction as f32;
        canvas.draw_line(
            ScreenPoint::new(rect.min.x + GRID_INSET + label_offset, y),
            ScreenPoint::new(rect.max.x - GRID_INSET, y),
            LineStyle::thin(theme.grid),
        );
        let label_rect = ScreenRect::from_origin_size(
            rect.min.x,
            y - label_height * 0.5,
            label_width,
            label_height,
        );
        canvas.draw_text(
            label_rect,
            &config.value_formatter.format(line.value),
            &label_style,
        );
    }

    let plot = ScreenRect::new(
        ScreenPoint::new(rect.min.x + label_offset, rect.min.y),
        rect.max,
    );
    let transform = Transform::new(bounds, plot)?;
    let first = buffer.first()?;

    let mut tracker = HoverTracker::default();
    let mut previous = ScreenPoint::new(plot.min.x, transform.data_to_screen(first.t, first.y).y);
    for sample in buffer.iter() {
        let current = transform.data_to_screen(sample.t, sample.y);
        if let Some((start, end)) = clip_segment(previous, current, plot) {
            canvas.draw_line(start, end, LineStyle::thin(sample.color));
        }
        tracker.probe(canvas, hover_strip(previous.x, current.x, plot), *sample);
        previous = current;
    }

    let hover = tracker.finish();
    if let Some(hover) = &hover {
        canvas.draw_rect(hover.highlight(), RectStyle::filled(theme.hover));
    }
    hover
}
