use gpui::{TextRun, Window, font, px};

use crate::axis::TextMeasurer;

pub(crate) const UI_FONT: &str = ".SystemUIFont";

/// Measures labels with the window's text system, using the same font the
/// painter draws with.
pub struct GpuiTextMeasurer<'a> {
    window: &'a Window,
}

impl<'a> GpuiTextMeasurer<'a> {
    /// Measure text as it would be shaped in `window`.
    pub fn new(window: &'a Window) -> Self {
        Self { window }
    }
}

impl TextMeasurer for GpuiTextMeasurer<'_> {
    fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        if text.is_empty() {
            return (0.0, 0.0);
        }
        let run = TextRun {
            len: text.len(),
            font: font(UI_FONT),
            color: gpui::black(),
            background_color: None,
            underline: None,
            strikethrough: None,
        };
        let line = self
            .window
            .text_system()
            .shape_line(text.to_string().into(), px(size), &[run], None);
        // Never report less than the line height the monospace fallback uses.
        let height = f32::from(line.ascent + line.descent).max(size * 1.2);
        (f32::from(line.width), height)
    }
}
