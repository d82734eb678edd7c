//! Sphere, spheroid and ellipsoid surfaces.

use glam::Vec3;

/// Point at horizontal distance `horizontal` from the polar axis and height
/// `vertical`, rotated to azimuth `phi`.
#[inline]
pub(crate) fn surface_point(horizontal: f32, vertical: f32, phi: f32) -> Vec3 {
    let (sin_p, cos_p) = phi.sin_cos();
    Vec3::new(horizontal * cos_p, vertical, horizontal * sin_p)
}

/// Sphere of constant `radius`.
pub fn sphere_vertex(theta: f32, phi: f32, radius: f32) -> Vec3 {
    let (sin_t, cos_t) = theta.sin_cos();
    surface_point(radius * sin_t, radius * cos_t, phi)
}

/// Volume-preserving spheroid axes `(a, c)` with `a²·c = radius³`.
///
/// `a` is the equatorial semi-axis, `c` the polar one.
#[inline]
pub fn spheroid_axes(radius: f32, length: f32) -> (f32, f32) {
    (radius / length.sqrt(), radius * length)
}

/// Spheroid stretched along Y by `length` while keeping the sphere's volume.
///
/// `length > 1` is prolate, `length < 1` oblate, `length == 1` reproduces
/// [`sphere_vertex`].
pub fn spheroid_vertex(theta: f32, phi: f32, radius: f32, length: f32) -> Vec3 {
    let (a, c) = spheroid_axes(radius, length);
    let (sin_t, cos_t) = theta.sin_cos();
    surface_point(a * sin_t, c * cos_t, phi)
}

/// Axes for [`spheroid_with_bulge_vertex`]: `a = radius·(1 + bulge)`,
/// `c = radius·length`.
#[inline]
pub fn bulge_axes(radius: f32, bulge: f32, length: f32) -> (f32, f32) {
    (radius * (1.0 + bulge), radius * length)
}

/// Spheroid whose equatorial bulge and polar stretch are independent.
/// Does not preserve volume.
pub fn spheroid_with_bulge_vertex(
    theta: f32,
    phi: f32,
    radius: f32,
    bulge: f32,
    length: f32,
) -> Vec3 {
    let (a, c) = bulge_axes(radius, bulge, length);
    let (sin_t, cos_t) = theta.sin_cos();
    surface_point(a * sin_t, c * cos_t, phi)
}

/// Ellipsoid with independent semi-axes along X, Y and Z.
pub fn ellipsoid_vertex(theta: f32, phi: f32, rx: f32, ry: f32, rz: f32) -> Vec3 {
    let (sin_t, cos_t) = theta.sin_cos();
    let (sin_p, cos_p) = phi.sin_cos();
    Vec3::new(rx * sin_t * cos_p, ry * cos_t, rz * sin_t * sin_p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_sphere_equator() {
        let p = sphere_vertex(FRAC_PI_2, 0.0, 2.0);
        assert!(
            (p - Vec3::new(2.0, 0.0, 0.0)).length() < EPSILON,
            "expected (2, 0, 0), got {p:?}"
        );
    }

    #[test]
    fn test_spheroid_pole_shows_polar_stretch() {
        let p = spheroid_vertex(0.0, 0.0, 1.0, 2.0);
        assert_eq!(p, Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_spheroid_unit_length_is_sphere() {
        for theta in [0.0, FRAC_PI_4, FRAC_PI_2, 3.0 * FRAC_PI_4, PI] {
            for phi in [0.0, FRAC_PI_2, PI] {
                assert_eq!(
                    spheroid_vertex(theta, phi, 1.7, 1.0),
                    sphere_vertex(theta, phi, 1.7)
                );
            }
        }
    }

    #[test]
    fn test_spheroid_preserves_volume() {
        for length in [0.25, 0.5, 1.0, 2.0, 4.0] {
            let (a, c) = spheroid_axes(1.5, length);
            let volume_ratio = a * a * c / 1.5f32.powi(3);
            assert!(
                (volume_ratio - 1.0).abs() < EPSILON,
                "a²c/r³ = {volume_ratio} for length {length}"
            );
        }
    }

    #[test]
    fn test_bulge_widens_equator_only() {
        let equator = spheroid_with_bulge_vertex(FRAC_PI_2, 0.0, 1.0, 0.5, 1.0);
        assert!((equator.x - 1.5).abs() < EPSILON);
        let pole = spheroid_with_bulge_vertex(0.0, 0.0, 1.0, 0.5, 1.0);
        assert!((pole.y - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_ellipsoid_axes() {
        let x = ellipsoid_vertex(FRAC_PI_2, 0.0, 3.0, 2.0, 1.0);
        let y = ellipsoid_vertex(0.0, 0.0, 3.0, 2.0, 1.0);
        let z = ellipsoid_vertex(FRAC_PI_2, FRAC_PI_2, 3.0, 2.0, 1.0);
        assert!((x.x - 3.0).abs() < EPSILON);
        assert!((y.y - 2.0).abs() < EPSILON);
        assert!((z.z - 1.0).abs() < EPSILON);
    }
}
