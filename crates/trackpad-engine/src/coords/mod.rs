//! Coordinate spaces and the square-to-disc warp.
//!
//! Three spaces are in play:
//! - Screen: pixels, origin top-left, +X right, +Y down
//! - Normalized square: origin at the center, `[-1, 1]` per axis, +Y up
//! - Normalized disc: same basis, every point on or inside the unit circle
//!
//! [`Viewport`] converts between screen and normalized space; [`disc`] warps
//! the square onto the disc.

pub mod disc;
mod rect;
mod vec2;
mod viewport;

pub use disc::{disc_to_square, square_to_disc};
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;

/// Inclusive range covered by each axis of normalized space.
pub const NORMALIZED_RANGE: std::ops::RangeInclusive<f64> = -1.0..=1.0;
