use super::Rgb;

/// Hue/saturation/value color.
///
/// - `h`: degrees; any real, wrapped into `[0, 360)` on conversion
/// - `s`, `v`: `[0, 1]`
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    #[inline]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Six-sector piecewise HSV → RGB.
    ///
    /// `s == 0` short-circuits to achromatic grey. A hue of exactly 360 wraps
    /// to sector 0, so the conversion is continuous around the wheel.
    pub fn to_rgb(self) -> Rgb {
        let Hsv { h, s, v } = self;
        if s == 0.0 {
            return Rgb::grey(v);
        }

        let sector = h / 60.0;
        let floor = sector.floor();
        let f = sector - floor;
        let i = (floor as i64).rem_euclid(6);

        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match i {
            0 => Rgb::new(v, t, p),
            1 => Rgb::new(q, v, p),
            2 => Rgb::new(p, v, t),
            3 => Rgb::new(p, q, v),
            4 => Rgb::new(t, p, v),
            _ => Rgb::new(v, p, q),
        }
    }
}

impl From<Hsv> for Rgb {
    #[inline]
    fn from(hsv: Hsv) -> Rgb {
        hsv.to_rgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx::assert_rgb_close;

    fn rgb(h: f64) -> Rgb { Hsv::new(h, 1.0, 1.0).to_rgb() }

    // ── primaries ─────────────────────────────────────────────────────────

    #[test]
    fn primaries_and_secondaries() {
        assert_rgb_close(rgb(0.0), Rgb::new(1.0, 0.0, 0.0));
        assert_rgb_close(rgb(60.0), Rgb::new(1.0, 1.0, 0.0));
        assert_rgb_close(rgb(120.0), Rgb::new(0.0, 1.0, 0.0));
        assert_rgb_close(rgb(180.0), Rgb::new(0.0, 1.0, 1.0));
        assert_rgb_close(rgb(240.0), Rgb::new(0.0, 0.0, 1.0));
        assert_rgb_close(rgb(300.0), Rgb::new(1.0, 0.0, 1.0));
    }

    // ── wrapping ──────────────────────────────────────────────────────────

    #[test]
    fn hue_360_wraps_to_red() {
        assert_rgb_close(rgb(360.0), rgb(0.0));
    }

    #[test]
    fn negative_hue_wraps() {
        assert_rgb_close(rgb(-30.0), rgb(330.0));
    }

    // ── achromatic ────────────────────────────────────────────────────────

    #[test]
    fn zero_saturation_is_grey() {
        assert_eq!(Hsv::new(200.0, 0.0, 0.4).to_rgb(), Rgb::grey(0.4));
        assert_eq!(Hsv::new(0.0, 0.0, 1.0).to_rgb(), Rgb::white());
    }

    #[test]
    fn partial_saturation_blends_toward_white() {
        // Sector 0 at s = 0.5: p = 0.5, t = 1 - 0.5 * (1 - f).
        assert_rgb_close(Hsv::new(30.0, 0.5, 1.0).to_rgb(), Rgb::new(1.0, 0.75, 0.5));
    }

    // ── continuity ────────────────────────────────────────────────────────

    #[test]
    fn continuous_across_sector_boundaries() {
        for boundary in [60.0, 120.0, 180.0, 240.0, 300.0, 360.0] {
            let below = Hsv::new(boundary - 1e-3, 0.8, 1.0).to_rgb();
            let at = Hsv::new(boundary, 0.8, 1.0).to_rgb();
            for (a, b) in [(below.r, at.r), (below.g, at.g), (below.b, at.b)] {
                assert!((a - b).abs() < 1e-4, "discontinuity at {boundary}: {below:?} vs {at:?}");
            }
        }
    }
}
