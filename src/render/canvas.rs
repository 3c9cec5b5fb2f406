//! Host drawing surface and the recording implementation.

use crate::axis::TextMeasurer;
use crate::geom::{ScreenPoint, ScreenRect};

use super::{LineSegment, LineStyle, RectStyle, RenderCommand, RenderList, TextAnchor, TextStyle};

/// Drawing surface supplied by the host UI layer.
///
/// This is the narrow interface widgets draw through: line and rectangle
/// primitives, labels, text metrics, and pointer state for the current frame.
pub trait Canvas {
    /// Draw a straight line between two points.
    fn draw_line(&mut self, start: ScreenPoint, end: ScreenPoint, style: LineStyle);

    /// Draw a filled and/or stroked rectangle.
    fn draw_rect(&mut self, rect: ScreenRect, style: RectStyle);

    /// Draw a single-line label inside `rect`, vertically centered and
    /// horizontally placed by the style's anchor.
    fn draw_text(&mut self, rect: ScreenRect, text: &str, style: &TextStyle);

    /// Measure a single line of text.
    fn measure_text(&self, text: &str, size: f32) -> (f32, f32);

    /// Pointer position for this frame, if the pointer is over the surface.
    fn pointer(&self) -> Option<ScreenPoint>;

    /// Whether the primary button was released this frame.
    fn clicked(&self) -> bool;

    /// Whether the pointer is inside `rect`.
    fn is_hovered(&self, rect: ScreenRect) -> bool {
        self.pointer().is_some_and(|pointer| rect.contains(pointer))
    }
}

/// Canvas that records drawing calls into a [`RenderList`].
#[derive(Debug, Clone)]
pub struct RecordingCanvas<M> {
    list: RenderList,
    measurer: M,
    pointer: Option<ScreenPoint>,
    clicked: bool,
}

impl<M: TextMeasurer> RecordingCanvas<M> {
    /// Create a canvas with no pointer over it.
    pub fn new(measurer: M) -> Self {
        Self {
            list: RenderList::new(),
            measurer,
            pointer: None,
            clicked: false,
        }
    }

    /// Set the pointer position for this frame.
    pub fn with_pointer(mut self, pointer: Option<ScreenPoint>) -> Self {
        self.pointer = pointer;
        self
    }

    /// Mark the primary button as released this frame.
    pub fn with_click(mut self, clicked: bool) -> Self {
        self.clicked = clicked;
        self
    }

    /// Access the recorded commands.
    pub fn render_list(&self) -> &RenderList {
        &self.list
    }

    /// Finish recording and take the commands.
    pub fn into_render_list(self) -> RenderList {
        self.list
    }
}

impl<M: TextMeasurer> Canvas for RecordingCanvas<M> {
    fn draw_line(&mut self, start: ScreenPoint, end: ScreenPoint, style: LineStyle) {
        self.list.push_segment(LineSegment::new(start, end), style);
    }

    fn draw_rect(&mut self, rect: ScreenRect, style: RectStyle) {
        self.list.push(RenderCommand::Rect { rect, style });
    }

    fn draw_text(&mut self, rect: ScreenRect, text: &str, style: &TextStyle) {
        if text.is_empty() {
            return;
        }
        let (width, height) = self.measurer.measure(text, style.size);
        let x = match style.anchor {
            TextAnchor::Left => rect.min.x,
            TextAnchor::Center => rect.min.x + (rect.width() - width) * 0.5,
            TextAnchor::Right => rect.max.x - width,
        };
        let y = rect.min.y + (rect.height() - height) * 0.5;
        self.list.push(RenderCommand::Text {
            position: ScreenPoint::new(x, y),
            text: text.to_string(),
            style: style.clone(),
        });
    }

    fn measure_text(&self, text: &str, size: f32) -> (f32, f32) {
        self.measurer.measure(text, size)
    }

    fn pointer(&self) -> Option<ScreenPoint> {
        self.pointer
    }

    fn clicked(&self) -> bool {
        self.clicked
    }
}
