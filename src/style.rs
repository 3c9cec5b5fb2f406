//! Colors and font sizes for series panels.

use crate::render::Color;

/// Visual theme for series panels.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Plot area fill.
    pub plot_background: Color,
    /// Value gridlines.
    pub grid: Color,
    /// Labels and titles.
    pub text: Color,
    /// Secondary labels such as the expanded/collapsed marker.
    pub muted_text: Color,
    /// Hover highlight bar.
    pub hover: Color,
    /// Divider lines between panel rows.
    pub divider: Color,
    /// Title row highlight under the pointer.
    pub title_highlight: Color,
    /// Panel border.
    pub panel_border: Color,
    /// Title font size.
    pub title_size: f32,
    /// Header, gridline, and description font size.
    pub label_size: f32,
    /// Placeholder font size.
    pub placeholder_size: f32,
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            plot_background: Color::BLACK,
            grid: Color::GRAY,
            text: Color::WHITE,
            muted_text: Color::GRAY,
            hover: Color::GRAY,
            divider: Color::GRAY,
            title_highlight: Color::new(1.0, 1.0, 1.0, 0.08),
            panel_border: Color::new(0.35, 0.35, 0.35, 1.0),
            title_size: 12.0,
            label_size: 10.0,
            placeholder_size: 12.0,
        }
    }
}
