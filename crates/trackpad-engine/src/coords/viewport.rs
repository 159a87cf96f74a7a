use super::Vec2;
use crate::error::EngineError;

/// Viewport size in screen pixels.
///
/// Basis for converting between screen space and normalized `[-1, 1]` space.
/// Conversions reject a viewport that is not [`is_valid`](Self::is_valid)
/// instead of producing NaN or infinity.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Returns `self` if valid, `InvalidViewport` otherwise.
    #[inline]
    pub fn validated(self) -> Result<Self, EngineError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(EngineError::InvalidViewport { width: self.width, height: self.height })
        }
    }

    /// Maps a screen point to normalized space (center origin, +Y up).
    ///
    /// The result is unconstrained: points outside the viewport land outside
    /// `[-1, 1]`. Clamping is the caller's job.
    pub fn to_normalized(self, screen: Vec2) -> Result<Vec2, EngineError> {
        let vp = self.validated()?;
        Ok(Vec2::new(
            2.0 * screen.x / vp.width - 1.0,
            -2.0 * screen.y / vp.height + 1.0,
        ))
    }

    /// Inverse of [`to_normalized`](Self::to_normalized).
    pub fn to_screen(self, normalized: Vec2) -> Result<Vec2, EngineError> {
        let vp = self.validated()?;
        Ok(Vec2::new(
            (normalized.x + 1.0) * vp.width / 2.0,
            (-normalized.y + 1.0) * vp.height / 2.0,
        ))
    }
}
