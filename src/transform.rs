//! Coordinate transforms between data and screen space.

use crate::geom::{ScreenPoint, ScreenRect};
use crate::view::Viewport;

/// Affine transform from (time, value) into screen coordinates.
///
/// Time grows to the right and value grows upwards. A zero-span axis maps
/// every sample onto the left (time) or bottom (value) edge.
#[derive(Debug, Clone)]
pub struct Transform {
    viewport: Viewport,
    screen: ScreenRect,
}

impl Transform {
    /// Create a transform for the given bounds and screen rectangle.
    pub fn new(viewport: Viewport, screen: ScreenRect) -> Option<Self> {
        if !screen.is_valid() || !viewport.time.is_finite() || !viewport.value.is_finite() {
            return None;
        }
        Some(Self { viewport, screen })
    }

    /// Map a sample's time and value into screen space.
    pub fn data_to_screen(&self, t: f64, y: f64) -> ScreenPoint {
        let t_norm = self.viewport.time.fraction(t);
        let y_norm = self.viewport.value.fraction(y);
        let sx = self.screen.min.x as f64 + t_norm * self.screen.width() as f64;
        let sy = self.screen.max.y as f64 - y_norm * self.screen.height() as f64;
        ScreenPoint::new(sx as f32, sy as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Range;

    #[test]
    fn maps_time_right_and_value_up() {
        let viewport = Viewport::new(Range::new(0.0, 10.0), Range::new(0.0, 10.0));
        let screen = ScreenRect::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(100.0, 100.0));
        let transform = Transform::new(viewport, screen).expect("valid transform");
        let screen_point = transform.data_to_screen(5.0, 7.5);
        assert!((screen_point.x - 50.0).abs() < 1e-4);
        assert!((screen_point.y - 25.0).abs() < 1e-4);
    }

    #[test]
    fn flat_value_range_maps_to_bottom_edge() {
        let viewport = Viewport::new(Range::new(0.0, 10.0), Range::new(3.0, 3.0));
        let screen = ScreenRect::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(100.0, 50.0));
        let transform = Transform::new(viewport, screen).expect("valid transform");
        let point = transform.data_to_screen(10.0, 3.0);
        assert!(point.x.is_finite() && point.y.is_finite());
        assert_eq!(point.y, 50.0);
    }

    #[test]
    fn empty_screen_is_rejected() {
        let viewport = Viewport::new(Range::new(0.0, 1.0), Range::new(0.0, 1.0));
        let screen = ScreenRect::new(ScreenPoint::new(5.0, 5.0), ScreenPoint::new(5.0, 10.0));
        assert!(Transform::new(viewport, screen).is_none());
    }
}
