use std::fmt;

/// Display color with components in `[0, 1]`.
///
/// No alpha channel: the trackpad color is always opaque feedback.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Grey with all channels equal to `v`.
    #[inline]
    pub const fn grey(v: f64) -> Self {
        Self::new(v, v, v)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /// Quantizes to 8-bit channels, clamping each component to `[0, 1]` first.
    ///
    /// Hosts feeding a toolkit that wants byte colors should go through here.
    #[inline]
    pub fn to_srgb_u8(self) -> [u8; 3] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }
}

/// Formats as `#rrggbb`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_srgb_u8();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_extremes() {
        assert_eq!(Rgb::white().to_srgb_u8(), [255, 255, 255]);
        assert_eq!(Rgb::black().to_srgb_u8(), [0, 0, 0]);
    }

    #[test]
    fn quantize_clamps_out_of_range() {
        assert_eq!(Rgb::new(1.5, -0.2, 0.5).to_srgb_u8(), [255, 0, 128]);
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Rgb::new(1.0, 0.75, 0.0).to_string(), "#ffbf00");
    }
}
