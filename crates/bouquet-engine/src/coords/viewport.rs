use super::Rect;

/// Size of the surface gradients are drawn into, in logical pixels.
///
/// The gradient vertex stages divide quad corners by it to reach NDC.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Positive, finite extents.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Whether a normalized `rect` covers any part of the viewport.
    pub fn overlaps(self, rect: Rect) -> bool {
        let (x, y) = (rect.origin.x, rect.origin.y);
        x < self.width && y < self.height && x + rect.size.x > 0.0 && y + rect.size.y > 0.0
    }

    /// `[width, height]` for the gradient uniform, at least one pixel each.
    #[inline]
    pub(crate) fn uniform_size(self) -> [f32; 2] {
        [self.width.max(1.0), self.height.max(1.0)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity() {
        assert!(Viewport::new(800.0, 600.0).is_valid());
        assert!(!Viewport::new(0.0, 600.0).is_valid());
        assert!(!Viewport::new(f32::NAN, 1.0).is_valid());
        assert!(!Viewport::default().is_valid());
    }

    #[test]
    fn overlap_with_gradient_quads() {
        let vp = Viewport::new(100.0, 50.0);
        assert!(vp.overlaps(Rect::new(10.0, 10.0, 20.0, 20.0)));
        assert!(vp.overlaps(Rect::new(-10.0, -10.0, 11.0, 11.0)));
        // touching edges only
        assert!(!vp.overlaps(Rect::new(100.0, 0.0, 10.0, 10.0)));
        assert!(!vp.overlaps(Rect::new(-10.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn uniform_size_is_at_least_one_pixel() {
        assert_eq!(Viewport::new(0.5, 300.0).uniform_size(), [1.0, 300.0]);
    }
}
