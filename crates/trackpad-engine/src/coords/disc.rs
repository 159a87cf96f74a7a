//! Elliptical-grid warp between the normalized square and the unit disc.
//!
//! Reference: <http://squircular.blogspot.com/2015/09/mapping-circle-to-square.html>
//!
//! The square's edges land on the circle, corners included, and the origin is
//! fixed. Grid lines become smooth curves rather than the kinks radial scaling
//! produces along the diagonals.

use core::f64::consts::SQRT_2;

use super::{Vec2, NORMALIZED_RANGE};

/// Warps a point of the normalized square onto the unit disc.
///
/// Both components must already lie in `[-1, 1]`; the coordinator clamps
/// before calling. Outside that domain the result is meaningless. NaN
/// propagates.
#[inline]
pub fn square_to_disc(p: Vec2) -> Vec2 {
    debug_assert!(
        !(p.x.abs() > *NORMALIZED_RANGE.end() || p.y.abs() > *NORMALIZED_RANGE.end()),
        "square_to_disc: ({}, {}) outside the normalized square",
        p.x, p.y
    );
    Vec2::new(
        p.x * (1.0 - p.y * p.y / 2.0).sqrt(),
        p.y * (1.0 - p.x * p.x / 2.0).sqrt(),
    )
}

/// Inverse of [`square_to_disc`] for points on or inside the unit circle.
///
/// Radicands are floored at zero; rounding near the corners can push them a
/// hair negative.
pub fn disc_to_square(p: Vec2) -> Vec2 {
    let (u, v) = (p.x, p.y);
    let u2 = u * u;
    let v2 = v * v;
    let tu = 2.0 * SQRT_2 * u;
    let tv = 2.0 * SQRT_2 * v;

    let x = 0.5 * (2.0 + u2 - v2 + tu).max(0.0).sqrt()
        - 0.5 * (2.0 + u2 - v2 - tu).max(0.0).sqrt();
    let y = 0.5 * (2.0 - u2 + v2 + tv).max(0.0).sqrt()
        - 0.5 * (2.0 - u2 + v2 - tv).max(0.0).sqrt();

    Vec2::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx::{assert_close, assert_vec_close};

    const CORNERS: [Vec2; 4] = [
        Vec2::new(1.0, 1.0),
        Vec2::new(-1.0, 1.0),
        Vec2::new(-1.0, -1.0),
        Vec2::new(1.0, -1.0),
    ];

    // ── square_to_disc ────────────────────────────────────────────────────

    #[test]
    fn origin_is_fixed() {
        assert_eq!(square_to_disc(Vec2::zero()), Vec2::zero());
    }

    #[test]
    fn corners_land_on_unit_circle() {
        for c in CORNERS {
            assert_close(square_to_disc(c).length(), 1.0);
        }
    }

    #[test]
    fn edge_midpoints_are_fixed() {
        assert_vec_close(square_to_disc(Vec2::new(1.0, 0.0)), Vec2::new(1.0, 0.0));
        assert_vec_close(square_to_disc(Vec2::new(0.0, -1.0)), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn every_edge_point_lands_on_circle() {
        for i in 0..=20 {
            let t = -1.0 + i as f64 * 0.1;
            for p in [Vec2::new(t, 1.0), Vec2::new(t, -1.0), Vec2::new(1.0, t), Vec2::new(-1.0, t)] {
                assert_close(square_to_disc(p).length(), 1.0);
            }
        }
    }

    #[test]
    fn interior_stays_inside_disc() {
        for i in 0..=10 {
            for j in 0..=10 {
                let p = Vec2::new(-0.99 + i as f64 * 0.198, -0.99 + j as f64 * 0.198);
                assert!(square_to_disc(p).length() < 1.0);
            }
        }
    }

    #[test]
    fn known_value() {
        // (-0.8, 0.8) is the normalized form of (10, 10) in a 100x100 viewport.
        let d = square_to_disc(Vec2::new(-0.8, 0.8));
        assert_close(d.x, -0.8 * 0.68_f64.sqrt());
        assert_close(d.y, 0.8 * 0.68_f64.sqrt());
    }

    // ── disc_to_square ────────────────────────────────────────────────────

    #[test]
    fn inverse_recovers_interior_points() {
        for p in [Vec2::new(0.3, -0.7), Vec2::new(-0.8, 0.8), Vec2::new(0.95, 0.1), Vec2::zero()] {
            assert_vec_close(disc_to_square(square_to_disc(p)), p);
        }
    }

    #[test]
    fn inverse_maps_circle_diagonal_to_corner() {
        let h = core::f64::consts::FRAC_1_SQRT_2;
        let sq = disc_to_square(Vec2::new(h, -h));
        assert!((sq.x - 1.0).abs() < 1e-6);
        assert!((sq.y + 1.0).abs() < 1e-6);
    }
}
