//! Backend-neutral drawing vocabulary.
//!
//! These types are backend-agnostic. Widgets draw through the [`Canvas`]
//! trait; [`RecordingCanvas`] turns those calls into a [`RenderList`] that a
//! backend (such as the GPUI backend) paints later in the frame.

mod canvas;
pub(crate) mod chart;

pub use canvas::{Canvas, RecordingCanvas};

use crate::geom::{ScreenPoint, ScreenRect};

/// RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Opacity.
    pub a: f32,
}

impl Color {
    /// Build a color from its components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque mid gray.
    pub const GRAY: Self = Self::new(0.5, 0.5, 0.5, 1.0);
    /// Opaque cyan, the default sample color.
    pub const CYAN: Self = Self::new(0.0, 1.0, 1.0, 1.0);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

/// Stroke used for plotted segments and gridlines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Segment color.
    pub color: Color,
    /// Thickness in logical pixels.
    pub width: f32,
}

impl LineStyle {
    /// A one pixel line in the given color.
    pub fn thin(color: Color) -> Self {
        Self { color, width: 1.0 }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::thin(Color::BLACK)
    }
}

/// Fill and border of a rectangle. Transparent parts are skipped by painters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectStyle {
    /// Interior.
    pub fill: Color,
    /// Border.
    pub stroke: Color,
    /// Border thickness.
    pub stroke_width: f32,
}

impl RectStyle {
    /// A solid fill without a border.
    pub fn filled(fill: Color) -> Self {
        Self {
            fill,
            stroke: Color::TRANSPARENT,
            stroke_width: 0.0,
        }
    }

    /// A border without a fill.
    pub fn outlined(stroke: Color, stroke_width: f32) -> Self {
        Self {
            fill: Color::TRANSPARENT,
            stroke,
            stroke_width,
        }
    }
}

impl Default for RectStyle {
    fn default() -> Self {
        Self::outlined(Color::BLACK, 1.0)
    }
}

/// Horizontal placement of a label inside its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    /// Flush with the left edge.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Flush with the right edge.
    Right,
}

/// How a label is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Glyph color.
    pub color: Color,
    /// Font size.
    pub size: f32,
    /// Horizontal anchor inside the label rectangle.
    pub anchor: TextAnchor,
}

impl TextStyle {
    /// Replace the anchor.
    pub fn anchored(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 12.0,
            anchor: TextAnchor::Left,
        }
    }
}

/// Straight segment between two screen points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// First endpoint.
    pub start: ScreenPoint,
    /// Second endpoint.
    pub end: ScreenPoint,
}

impl LineSegment {
    /// Join `start` and `end`.
    pub fn new(start: ScreenPoint, end: ScreenPoint) -> Self {
        Self { start, end }
    }
}

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Draw line segments sharing one style.
    LineSegments {
        /// Segments in drawing order.
        segments: Vec<LineSegment>,
        /// Shared stroke.
        style: LineStyle,
    },
    /// Fill and/or outline a rectangle.
    Rect {
        /// Rectangle bounds.
        rect: ScreenRect,
        /// Fill and border of a rectangle. Transparent parts are skipped by painters.
        style: RectStyle,
    },
    /// Draw text with its top-left corner at `position`.
    Text {
        /// Text position.
        position: ScreenPoint,
        /// Text content.
        text: String,
        /// How a label is drawn.
        style: TextStyle,
    },
}

/// Commands recorded during one frame, in painting order.
#[derive(Debug, Default, Clone)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command as is.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Append a segment, extending the previous command when it has the same
    /// style.
    pub fn push_segment(&mut self, segment: LineSegment, style: LineStyle) {
        if let Some(RenderCommand::LineSegments {
            segments,
            style: last_style,
        }) = self.commands.last_mut()
        {
            if *last_style == style {
                segments.push(segment);
                return;
            }
        }
        self.commands.push(RenderCommand::LineSegments {
            segments: vec![segment],
            style,
        });
    }

    /// Recorded commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate over every recorded text label.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            RenderCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Total number of line segments across all commands.
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .map(|command| match command {
                RenderCommand::LineSegments { segments, .. } => segments.len(),
                _ => 0,
            })
            .sum()
    }
}

/// Clip a segment to `rect` (Liang-Barsky). Returns `None` when nothing of
/// the segment lies inside.
pub(crate) fn clip_segment(
    start: ScreenPoint,
    end: ScreenPoint,
    rect: ScreenRect,
) -> Option<(ScreenPoint, ScreenPoint)> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let mut enter = 0.0_f32;
    let mut exit = 1.0_f32;

    // (direction, distance to edge) for left, right, top, bottom.
    let edges = [
        (-dx, start.x - rect.min.x),
        (dx, rect.max.x - start.x),
        (-dy, start.y - rect.min.y),
        (dy, rect.max.y - start.y),
    ];
    for (direction, distance) in edges {
        if direction == 0.0 {
            if distance < 0.0 {
                return None;
            }
            continue;
        }
        let t = distance / direction;
        if direction < 0.0 {
            if t > exit {
                return None;
            }
            enter = enter.max(t);
        } else {
            if t < enter {
                return None;
            }
            exit = exit.min(t);
        }
    }

    let at = |t: f32| ScreenPoint::new(start.x + t * dx, start.y + t * dy);
    Some((at(enter), at(exit)))
}
