use super::{Vec2, Viewport};

/// Axis-aligned frame in screen space (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Viewport,
}

impl Rect {
    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Viewport::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Viewport) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.width, self.origin.y + self.size.height)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(
            self.origin.x + self.size.width * 0.5,
            self.origin.y + self.size.height * 0.5,
        )
    }

    /// Smaller of width and height; the diameter of the inscribed circle.
    #[inline]
    pub fn min_extent(self) -> f64 {
        self.size.width.min(self.size.height)
    }

    /// Closed containment: `[min, max]`. Edge touches count as inside, matching
    /// the closed `[-1, 1]` normalized range.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.y >= self.origin.y && p.x <= max.x && p.y <= max.y
    }

    /// Converts a point into this frame's local space (origin at `self.origin`).
    #[inline]
    pub fn to_local(self, p: Vec2) -> Vec2 {
        p - self.origin
    }

    #[inline]
    pub fn from_local(self, p: Vec2) -> Vec2 {
        p + self.origin
    }
}
