//! Closed-form profile families: ovoid, egg, pear, droplet, bullet and cone.
//!
//! Every profile is expressed as a horizontal distance from the polar axis
//! and a height, both scaled by the volume-preserving spheroid axes so the
//! `length` stretch behaves the same way across families.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec3;

use crate::sphere::{spheroid_axes, spheroid_vertex, surface_point};

/// Polar angle where the bullet's hemisphere meets its cylinder wall.
pub const BULLET_WALL_START: f32 = FRAC_PI_2;
/// Polar angle where the bullet's wall meets its flat end-cap.
pub const BULLET_CAP_START: f32 = 0.9 * PI;
/// Polar angle where the cone's taper meets its flat end-cap.
pub const CONE_CAP_START: f32 = 0.9 * PI;

/// Ovoid: a gentle asymmetric swelling, `1 + asymmetry·0.5·(1 + cosθ)`.
///
/// The factor is `1` at the base pole and `1 + asymmetry` at the tip.
/// `asymmetry = 0` reproduces [`spheroid_vertex`].
pub fn ovoid_vertex(theta: f32, phi: f32, radius: f32, asymmetry: f32, length: f32) -> Vec3 {
    let factor = 1.0 + asymmetry * 0.5 * (1.0 + theta.cos());
    spheroid_vertex(theta, phi, radius, length) * factor
}

/// Egg: radial factor `1 + asymmetry·cosθ`.
///
/// Negative asymmetry shrinks the tip half and widens the base half.
/// `asymmetry = 0` reproduces [`spheroid_vertex`].
pub fn egg_vertex(theta: f32, phi: f32, radius: f32, asymmetry: f32, length: f32) -> Vec3 {
    let factor = 1.0 + asymmetry * theta.cos();
    spheroid_vertex(theta, phi, radius, length) * factor
}

/// Pear (piriform): narrow tip, wide base.
///
/// The horizontal profile blends the sphere's `sinθ` with
/// `(θ/π)^(0.7 + 0.3·intensity)·sinθ`, weighted by `intensity`.
/// `intensity = 0` reproduces [`spheroid_vertex`].
pub fn pear_vertex(theta: f32, phi: f32, radius: f32, intensity: f32, length: f32) -> Vec3 {
    let (a, c) = spheroid_axes(radius, length);
    let (sin_t, cos_t) = theta.sin_cos();

    let exponent = 0.7 + 0.3 * intensity;
    let piriform = (theta / PI).max(0.0).powf(exponent) * sin_t;
    let horizontal = sin_t * (1.0 - intensity) + piriform * intensity;

    surface_point(a * horizontal, c * cos_t, phi)
}

/// Droplet with a pointed tip at θ = 0.
///
/// Horizontal profile `0.5·(1 - cosθ)·|sinθ|^power`; larger `power`
/// sharpens both poles.
pub fn droplet_vertex(theta: f32, phi: f32, radius: f32, power: f32, length: f32) -> Vec3 {
    let (a, c) = spheroid_axes(radius, length);
    let (sin_t, cos_t) = theta.sin_cos();
    let profile = (1.0 - cos_t) * sin_t.abs().powf(power);
    surface_point(a * 0.5 * profile, c * cos_t, phi)
}

/// Droplet pointed at θ = π instead of θ = 0.
pub fn droplet_inverted_vertex(
    theta: f32,
    phi: f32,
    radius: f32,
    power: f32,
    length: f32,
) -> Vec3 {
    let p = droplet_vertex(PI - theta, phi, radius, power, length);
    Vec3::new(p.x, -p.y, p.z)
}

/// Fraction of the way through `[start, end)`, clamped to `[0, 1]`.
#[inline]
fn region_t(theta: f32, start: f32, end: f32) -> f32 {
    ((theta - start) / (end - start)).clamp(0.0, 1.0)
}

/// Bullet: rounded hemisphere tip, straight cylinder wall, flat base.
///
/// - θ < π/2: hemisphere.
/// - π/2 ≤ θ < 0.9π: wall at full equatorial radius, descending from
///   `y = 0` to `y = -c`.
/// - θ ≥ 0.9π: flat cap at `y = -c`, radius shrinking to zero at θ = π.
pub fn bullet_vertex(theta: f32, phi: f32, radius: f32, length: f32) -> Vec3 {
    let (a, c) = spheroid_axes(radius, length);

    if theta < BULLET_WALL_START {
        let (sin_t, cos_t) = theta.sin_cos();
        return surface_point(a * sin_t, c * cos_t, phi);
    }

    if theta < BULLET_CAP_START {
        let t = region_t(theta, BULLET_WALL_START, BULLET_CAP_START);
        return surface_point(a, -c * t, phi);
    }

    let t = region_t(theta, BULLET_CAP_START, PI);
    surface_point(a * (1.0 - t), -c, phi)
}

/// Cone: apex at θ = 0, flat base.
///
/// - θ < 0.9π: radius grows linearly from 0 to `a` while `y` falls linearly
///   from `+c` to `-c`.
/// - θ ≥ 0.9π: flat cap at `y = -c`, radius shrinking to zero at θ = π.
pub fn cone_vertex(theta: f32, phi: f32, radius: f32, length: f32) -> Vec3 {
    let (a, c) = spheroid_axes(radius, length);

    if theta < CONE_CAP_START {
        let t = region_t(theta, 0.0, CONE_CAP_START);
        return surface_point(a * t, c * (1.0 - 2.0 * t), phi);
    }

    let t = region_t(theta, CONE_CAP_START, PI);
    surface_point(a * (1.0 - t), -c, phi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::sphere_vertex;
    use std::f32::consts::FRAC_PI_4;

    const EPSILON: f32 = 1e-5;
    const THETAS: [f32; 5] = [0.0, FRAC_PI_4, FRAC_PI_2, 3.0 * FRAC_PI_4, PI];

    fn horizontal(p: Vec3) -> f32 {
        (p.x * p.x + p.z * p.z).sqrt()
    }

    #[test]
    fn test_zero_asymmetry_is_spheroid() {
        for theta in THETAS {
            let s = spheroid_vertex(theta, 0.3, 1.0, 1.5);
            assert_eq!(ovoid_vertex(theta, 0.3, 1.0, 0.0, 1.5), s);
            assert_eq!(egg_vertex(theta, 0.3, 1.0, 0.0, 1.5), s);
            assert_eq!(pear_vertex(theta, 0.3, 1.0, 0.0, 1.5), s);
        }
    }

    #[test]
    fn test_egg_negative_asymmetry_widens_base() {
        let upper = egg_vertex(FRAC_PI_4, 0.0, 1.0, -0.3, 1.0);
        let lower = egg_vertex(3.0 * FRAC_PI_4, 0.0, 1.0, -0.3, 1.0);
        assert!(
            horizontal(lower) > horizontal(upper),
            "base {} should be wider than tip {}",
            horizontal(lower),
            horizontal(upper)
        );
    }

    #[test]
    fn test_ovoid_is_gentler_than_egg() {
        let egg = egg_vertex(0.0, 0.0, 1.0, -0.3, 1.0);
        let ovoid = ovoid_vertex(0.0, 0.0, 1.0, -0.3, 1.0);
        assert!((egg.y - 0.7).abs() < EPSILON);
        assert!((ovoid.y - 0.7).abs() < EPSILON);
        let egg_base = egg_vertex(PI, 0.0, 1.0, -0.3, 1.0);
        let ovoid_base = ovoid_vertex(PI, 0.0, 1.0, -0.3, 1.0);
        assert!((egg_base.y + 1.3).abs() < EPSILON);
        assert!((ovoid_base.y + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_pear_tip_narrower_than_base() {
        let tip = pear_vertex(FRAC_PI_4, 0.0, 1.0, 1.0, 1.0);
        let base = pear_vertex(3.0 * FRAC_PI_4, 0.0, 1.0, 1.0, 1.0);
        assert!(horizontal(tip) < horizontal(base));
    }

    #[test]
    fn test_droplet_tip_is_on_axis() {
        assert_eq!(droplet_vertex(0.0, 0.0, 1.0, 1.0, 1.0), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_droplet_profile_peak() {
        // (1 - cos(2π/3))·sin(2π/3)·0.5 = 1.5·0.866·0.5
        let p = droplet_vertex(2.0 * PI / 3.0, 0.0, 1.0, 1.0, 1.0);
        assert!((p.x - 0.649_519).abs() < 1e-4, "x = {}", p.x);
    }

    #[test]
    fn test_droplet_inverted_mirrors_droplet() {
        for theta in THETAS {
            let d = droplet_vertex(theta, 0.7, 1.0, 1.5, 1.2);
            let inv = droplet_inverted_vertex(PI - theta, 0.7, 1.0, 1.5, 1.2);
            assert!((d.x - inv.x).abs() < EPSILON);
            assert!((d.y + inv.y).abs() < EPSILON);
            assert!((d.z - inv.z).abs() < EPSILON);
        }
        let base = droplet_inverted_vertex(PI, 0.0, 1.0, 1.0, 1.0);
        assert!(horizontal(base) < EPSILON && (base.y + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_bullet_regions_are_continuous() {
        let eps = 1e-4;
        for boundary in [BULLET_WALL_START, BULLET_CAP_START] {
            let before = bullet_vertex(boundary - eps, 0.0, 1.0, 1.3);
            let after = bullet_vertex(boundary, 0.0, 1.0, 1.3);
            assert!(
                (before - after).length() < 1e-3,
                "gap of {} at θ={boundary}",
                (before - after).length()
            );
        }
    }

    #[test]
    fn test_bullet_wall_keeps_full_radius() {
        let (a, _) = spheroid_axes(1.0, 1.0);
        for theta in [FRAC_PI_2, 0.6 * PI, 0.8 * PI] {
            let p = bullet_vertex(theta, 0.0, 1.0, 1.0);
            assert!((horizontal(p) - a).abs() < EPSILON);
        }
    }

    #[test]
    fn test_bullet_and_cone_close_at_base_pole() {
        for p in [bullet_vertex(PI, 0.4, 1.0, 1.0), cone_vertex(PI, 0.4, 1.0, 1.0)] {
            assert!(horizontal(p) < EPSILON);
            assert!((p.y + 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_cone_apex_and_rim() {
        let apex = cone_vertex(0.0, 0.0, 1.0, 2.0);
        assert_eq!(apex, Vec3::new(0.0, 2.0, 0.0));

        let (a, c) = spheroid_axes(1.0, 2.0);
        let rim = cone_vertex(CONE_CAP_START, 0.0, 1.0, 2.0);
        assert!((horizontal(rim) - a).abs() < EPSILON);
        assert!((rim.y + c).abs() < EPSILON);
    }

    #[test]
    fn test_cone_taper_is_linear() {
        let half = cone_vertex(CONE_CAP_START * 0.5, 0.0, 1.0, 1.0);
        assert!((horizontal(half) - 0.5).abs() < EPSILON);
        assert!(half.y.abs() < EPSILON);
    }

    #[test]
    fn test_sphere_profiles_share_tip_and_base() {
        let s_tip = sphere_vertex(0.0, 0.0, 1.0);
        assert!((bullet_vertex(0.0, 0.0, 1.0, 1.0) - s_tip).length() < EPSILON);
        assert!((droplet_vertex(0.0, 0.0, 1.0, 2.0, 1.0) - s_tip).length() < EPSILON);
    }
}
