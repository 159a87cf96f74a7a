//! Float comparison helpers for tests.

use crate::coords::Vec2;
use crate::paint::Rgb;

pub(crate) const EPS: f64 = 1e-9;

#[track_caller]
pub(crate) fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() <= EPS, "expected {b}, got {a}");
}

#[track_caller]
pub(crate) fn assert_vec_close(a: Vec2, b: Vec2) {
    assert!(
        (a.x - b.x).abs() <= EPS && (a.y - b.y).abs() <= EPS,
        "expected {b:?}, got {a:?}"
    );
}

#[track_caller]
pub(crate) fn assert_rgb_close(a: Rgb, b: Rgb) {
    assert!(
        (a.r - b.r).abs() <= EPS && (a.g - b.g).abs() <= EPS && (a.b - b.b).abs() <= EPS,
        "expected {b:?}, got {a:?}"
    );
}
