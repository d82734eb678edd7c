//! Fibonacci-spiral point sets and seeded per-feature variation, shared by
//! the cloud lobes, Worley cells and planet craters.

use std::f64::consts::TAU;

use glam::Vec3;

/// Golden angle `π·(3 - √5)` in radians.
pub const GOLDEN_ANGLE: f32 = 2.399_963;

/// Fractional part of the golden ratio, used to scatter seed phases.
const GOLDEN_FRACTION: f64 = 0.618_033_988_749_895;

/// Point `index` of `count` on a unit-sphere Fibonacci spiral.
///
/// Points are evenly spaced in height from near `+Y` to near `-Y`, and the
/// azimuth advances by `step` radians per point, starting at `phase`.
pub fn fibonacci_point(index: u32, count: u32, step: f32, phase: f32) -> Vec3 {
    let n = count.max(1) as f32;
    let y = 1.0 - 2.0 * (index as f32 + 0.5) / n;
    let ring = (1.0 - y * y).max(0.0).sqrt();
    let angle = index as f32 * step + phase;
    let (sin_a, cos_a) = angle.sin_cos();
    Vec3::new(ring * cos_a, y, ring * sin_a)
}

/// Azimuthal rotation of a seed's spiral, in `[0, 2π)`.
pub fn seed_phase(seed: u32) -> f32 {
    ((f64::from(seed) * GOLDEN_FRACTION).fract() * TAU) as f32
}

/// Seeded size multiplier for feature `index`: `0.7 + 0.6·sin((i + seed)·1.7)`.
///
/// Lies in `[0.1, 1.3]`.
pub fn size_variance(index: u32, seed: u32) -> f32 {
    (0.7 + 0.6 * ((f64::from(index) + f64::from(seed)) * 1.7).sin()) as f32
}

/// Great-circle angle in radians between two unit vectors.
#[inline]
pub fn angular_distance(a: Vec3, b: Vec3) -> f32 {
    a.dot(b).clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_are_unit_length() {
        for i in 0..50 {
            let p = fibonacci_point(i, 50, GOLDEN_ANGLE, 0.3);
            assert!((p.length() - 1.0).abs() < 1e-5, "|p| = {}", p.length());
        }
    }

    #[test]
    fn test_points_span_both_hemispheres() {
        let first = fibonacci_point(0, 20, GOLDEN_ANGLE, 0.0);
        let last = fibonacci_point(19, 20, GOLDEN_ANGLE, 0.0);
        assert!(first.y > 0.9);
        assert!(last.y < -0.9);
    }

    #[test]
    fn test_points_are_spread_out() {
        let count = 24;
        let points: Vec<Vec3> = (0..count)
            .map(|i| fibonacci_point(i, count, GOLDEN_ANGLE, 0.0))
            .collect();
        for (i, a) in points.iter().enumerate() {
            for b in points.iter().skip(i + 1) {
                assert!(angular_distance(*a, *b) > 0.2, "points too close: {a:?} {b:?}");
            }
        }
    }

    #[test]
    fn test_single_point_on_equator() {
        let p = fibonacci_point(0, 1, GOLDEN_ANGLE, 0.0);
        assert!(p.y.abs() < 1e-6);
    }

    #[test]
    fn test_size_variance_range_and_formula() {
        for seed in [0, 1, 17, 123_456] {
            for i in 0..20 {
                let v = size_variance(i, seed);
                assert!((0.1 - 1e-6..=1.3 + 1e-6).contains(&v), "variance {v}");
            }
        }
        assert!((size_variance(0, 0) - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_seed_phase_range() {
        assert_eq!(seed_phase(0), 0.0);
        for seed in [1, 2, 99, u32::MAX] {
            let p = seed_phase(seed);
            assert!((0.0..std::f32::consts::TAU + 1e-4).contains(&p));
        }
    }

    #[test]
    fn test_angular_distance_handles_rounding() {
        let a = Vec3::new(1.0, 1e-8, 0.0);
        assert_eq!(angular_distance(a, a), 0.0);
        let d = angular_distance(Vec3::Y, -Vec3::Y);
        assert!((d - std::f32::consts::PI).abs() < 1e-6);
    }
}
