use gpui::{
    App, BorderStyle, Bounds, Corners, Edges, PathBuilder, Pixels, TextRun, Window, font, point,
    px, quad,
};

use crate::geom::{ScreenPoint, ScreenRect};
use crate::render::{Color, LineSegment, LineStyle, RectStyle, RenderCommand, RenderList, TextStyle};

use super::text::UI_FONT;

/// Paint recorded commands into the window in recording order.
pub fn paint_render_list(list: &RenderList, window: &mut Window, cx: &mut App) {
    let mut painter = Painter { window, cx };
    for command in list.commands() {
        match command {
            RenderCommand::LineSegments { segments, style } => painter.lines(segments, *style),
            RenderCommand::Rect { rect, style } => painter.rect(*rect, *style),
            RenderCommand::Text {
                position,
                text,
                style,
            } => painter.text(*position, text, style),
        }
    }
}

struct Painter<'a> {
    window: &'a mut Window,
    cx: &'a mut App,
}

impl Painter<'_> {
    fn lines(&mut self, segments: &[LineSegment], style: LineStyle) {
        if segments.is_empty() || style.color.a <= 0.0 {
            return;
        }
        let mut builder = PathBuilder::stroke(px(style.width.max(0.5)));
        for segment in segments {
            builder.move_to(to_point(segment.start));
            builder.line_to(to_point(segment.end));
        }
        match builder.build() {
            Ok(path) => self.window.paint_path(path, to_rgba(style.color)),
            Err(err) => log::debug!("skipping {} segments: {err:?}", segments.len()),
        }
    }

    fn rect(&mut self, rect: ScreenRect, style: RectStyle) {
        let stroked = style.stroke_width > 0.0 && style.stroke.a > 0.0;
        if style.fill.a <= 0.0 && !stroked {
            return;
        }
        let bounds = Bounds::from_corners(to_point(rect.min), to_point(rect.max));
        self.window.paint_quad(quad(
            bounds,
            Corners::all(px(0.0)),
            to_rgba(style.fill),
            Edges::all(px(if stroked { style.stroke_width } else { 0.0 })),
            to_rgba(style.stroke),
            BorderStyle::default(),
        ));
    }

    fn text(&mut self, position: ScreenPoint, text: &str, style: &TextStyle) {
        if text.is_empty() {
            return;
        }
        let run = TextRun {
            len: text.len(),
            font: font(UI_FONT),
            color: to_hsla(style.color),
            background_color: None,
            underline: None,
            strikethrough: None,
        };
        let line = self
            .window
            .text_system()
            .shape_line(text.to_string().into(), px(style.size), &[run], None);
        let line_height = line.ascent + line.descent;
        if line
            .paint(to_point(position), line_height, self.window, self.cx)
            .is_err()
        {
            log::debug!("failed to paint label {text:?}");
        }
    }
}

fn to_point(screen: ScreenPoint) -> gpui::Point<Pixels> {
    point(px(screen.x), px(screen.y))
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}
