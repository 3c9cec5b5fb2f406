//! Screen-space geometry and the top-down layout cursor.
//!
//! All coordinates are logical pixels with the origin in the top-left corner
//! and Y growing downwards, matching the host drawing layer.

/// A point in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// X value in screen pixels.
    pub x: f32,
    /// Y value in screen pixels.
    pub y: f32,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: ScreenPoint,
    /// Bottom-right corner.
    pub max: ScreenPoint,
}

impl ScreenRect {
    /// Create a new screen rectangle from corners.
    pub fn new(min: ScreenPoint, max: ScreenPoint) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from its top-left corner and size.
    pub fn from_origin_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(ScreenPoint::new(x, y), ScreenPoint::new(x + width, y + height))
    }

    /// Rectangle width in pixels.
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Check whether the rectangle has positive area.
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    /// Check whether a point lies inside the rectangle, edges included.
    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Shrink the rectangle by `margin` on every side.
    ///
    /// The result never inverts; a margin larger than half the size collapses
    /// the rectangle onto its center.
    pub fn contracted_by(&self, margin: f32) -> Self {
        let cx = (self.min.x + self.max.x) * 0.5;
        let cy = (self.min.y + self.max.y) * 0.5;
        Self::new(
            ScreenPoint::new((self.min.x + margin).min(cx), (self.min.y + margin).min(cy)),
            ScreenPoint::new((self.max.x - margin).max(cx), (self.max.y - margin).max(cy)),
        )
    }

    /// Shrink the rectangle horizontally by `margin` on each side.
    pub fn inset_x(&self, margin: f32) -> Self {
        let cx = (self.min.x + self.max.x) * 0.5;
        Self::new(
            ScreenPoint::new((self.min.x + margin).min(cx), self.min.y),
            ScreenPoint::new((self.max.x - margin).max(cx), self.max.y),
        )
    }

    /// Slice a row of `height` pixels off the top and shrink `self` by it.
    ///
    /// This is the layout cursor: widgets draw top-down and hand the remaining
    /// space to whatever comes next. The slice is clamped to what is left.
    pub fn take_top(&mut self, height: f32) -> Self {
        let height = height.max(0.0).min(self.height().max(0.0));
        let row = Self::new(
            self.min,
            ScreenPoint::new(self.max.x, self.min.y + height),
        );
        self.min.y += height;
        row
    }

    /// The rightmost `width` pixels of the rectangle.
    pub fn right_part(&self, width: f32) -> Self {
        let width = width.max(0.0).min(self.width().max(0.0));
        Self::new(ScreenPoint::new(self.max.x - width, self.min.y), self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_top_shrinks_cursor() {
        let mut area = ScreenRect::from_origin_size(0.0, 0.0, 400.0, 200.0);
        let row = area.take_top(15.0);
        assert_eq!(row.height(), 15.0);
        assert_eq!(row.width(), 400.0);
        assert_eq!(area.min.y, 15.0);
        assert_eq!(area.height(), 185.0);
    }

    #[test]
    fn take_top_clamps_to_remaining_space() {
        let mut area = ScreenRect::from_origin_size(0.0, 0.0, 10.0, 10.0);
        let row = area.take_top(25.0);
        assert_eq!(row.height(), 10.0);
        assert_eq!(area.height(), 0.0);
        assert!(!area.is_valid());
    }

    #[test]
    fn contracted_rect_never_inverts() {
        let rect = ScreenRect::from_origin_size(0.0, 0.0, 4.0, 4.0);
        let inner = rect.contracted_by(5.0);
        assert!(inner.width() >= 0.0);
        assert!(inner.height() >= 0.0);
    }
}
