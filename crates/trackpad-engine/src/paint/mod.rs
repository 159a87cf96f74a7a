//! Color model for trackpad feedback.
//!
//! Scope:
//! - display color (`Rgb`, no alpha)
//! - HSV intermediate and its six-sector RGB conversion
//! - the color wheel: polar position → hue/saturation → RGB
//!
//! Geometry types remain in `coords`.

pub mod hsv;
pub mod rgb;
pub mod wheel;

pub use hsv::Hsv;
pub use rgb::Rgb;
pub use wheel::{Polar, color_from_polar, hue_degrees, polar_from, saturation};
