//! Color wheel: angle from center is hue, distance from center is saturation.
//!
//! Hue 0° points east (+X) and grows counter-clockwise with +Y up, so north is
//! 90°, west 180°, south 270°. Saturation reaches 1 at half the nominal radius
//! and stays there; points past the edge remain fully saturated. Value is
//! fixed at 1.

use core::f64::consts::TAU;

use super::{Hsv, Rgb};
use crate::coords::Vec2;

/// Brightness used for every wheel color.
pub const WHEEL_VALUE: f64 = 1.0;

/// Polar position relative to the wheel center.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Polar {
    /// Four-quadrant angle in radians, +Y up. Range `(-π, π]`.
    pub angle: f64,
    /// Distance from the center divided by half the radius.
    pub distance: f64,
}

impl Polar {
    #[inline]
    pub fn color(self) -> Rgb {
        color_from_polar(self.angle, self.distance)
    }
}

/// Decomposes a screen-space `point` relative to `center`.
///
/// Screen y grows downward, so the vertical delta is flipped before `atan2`.
/// A non-positive `radius` saturates every point off the center.
pub fn polar_from(center: Vec2, point: Vec2, radius: f64) -> Polar {
    let dx = point.x - center.x;
    let dy = center.y - point.y;
    let angle = dy.atan2(dx);

    let dist = point.distance(center);
    let half = radius / 2.0;
    let distance = if half > 0.0 {
        dist / half
    } else if dist > 0.0 {
        f64::INFINITY
    } else {
        0.0
    };

    Polar { angle, distance }
}

/// Converts an angle in radians to a hue in degrees, `[0, 360]`.
///
/// Negative angles are shifted up by one full turn.
#[inline]
pub fn hue_degrees(angle: f64) -> f64 {
    angle.rem_euclid(TAU) * 180.0 / core::f64::consts::PI
}

/// Saturation for a normalized distance: `min(distance, 1)`, floored at 0.
///
/// NaN and negative distances give 0.
#[inline]
pub fn saturation(distance: f64) -> f64 {
    if distance > 0.0 { distance.min(1.0) } else { 0.0 }
}

/// Wheel color for a polar position. Total for any angle and distance.
pub fn color_from_polar(angle: f64, distance: f64) -> Rgb {
    Hsv::new(hue_degrees(angle), saturation(distance), WHEEL_VALUE).to_rgb()
}
