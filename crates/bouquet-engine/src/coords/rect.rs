use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle at the origin covering `width × height`.
    #[inline]
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Empty for non-positive or non-finite extents.
    #[inline]
    pub fn is_empty(self) -> bool {
        !(self.origin.is_finite() && self.size.is_finite())
            || self.size.x <= 0.0
            || self.size.y <= 0.0
    }

    /// Flips negative extents so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let (x, w) = if self.size.x < 0.0 {
            (self.origin.x + self.size.x, -self.size.x)
        } else {
            (self.origin.x, self.size.x)
        };
        let (y, h) = if self.size.y < 0.0 {
            (self.origin.y + self.size.y, -self.size.y)
        } else {
            (self.origin.y, self.size.y)
        };
        Rect::new(x, y, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_flips_negative_extents() {
        let n = Rect::new(10.0, 10.0, -4.0, -3.0).normalized();
        assert_eq!(n, Rect::new(6.0, 7.0, 4.0, 3.0));
    }

    #[test]
    fn normalized_positive_is_identity() {
        let r = Rect::from_size(5.0, 2.0);
        assert_eq!(r.normalized(), r);
    }

    #[test]
    fn empty_rects() {
        assert!(Rect::from_size(0.0, 5.0).is_empty());
        assert!(Rect::from_size(f32::INFINITY, 5.0).is_empty());
        assert!(!Rect::from_size(1.0, 1.0).is_empty());
    }
}
