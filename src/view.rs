//! Data-space ranges and bounds.

/// Numeric range with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
}

impl Range {
    /// Create a new range, swapping bounds if needed.
    pub fn new(mut min: f64, mut max: f64) -> Self {
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Self { min, max }
    }

    /// Span of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Check whether the range has positive span and finite bounds.
    pub fn is_valid(&self) -> bool {
        self.is_finite() && self.span() > 0.0
    }

    /// Position of `value` inside the range as a fraction.
    ///
    /// A degenerate range has no meaningful fraction; 0 is returned so the
    /// value lands on the range start instead of producing a non-finite value.
    pub fn fraction(&self, value: f64) -> f64 {
        if !self.is_valid() {
            return 0.0;
        }
        (value - self.min) / self.span()
    }

    /// Value at `frac` of the way through the range.
    pub fn lerp(&self, frac: f64) -> f64 {
        self.min + self.span() * frac
    }
}

/// Visible data bounds of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Time axis range.
    pub time: Range,
    /// Value axis range.
    pub value: Range,
}

impl Viewport {
    /// Create a viewport from time and value ranges.
    pub fn new(time: Range, value: Range) -> Self {
        Self { time, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_range_fraction_is_zero() {
        let range = Range::new(2.0, 2.0);
        assert_eq!(range.fraction(2.0), 0.0);
        assert_eq!(range.fraction(10.0), 0.0);
    }

    #[test]
    fn fraction_and_lerp_agree() {
        let range = Range::new(10.0, -10.0);
        assert_eq!(range.min, -10.0);
        let frac = range.fraction(5.0);
        assert!((frac - 0.75).abs() < 1e-12);
        assert!((range.lerp(frac) - 5.0).abs() < 1e-12);
    }
}
