//! Vertex types, normalization, blending and spheroid gradients.

use glam::Vec3;

/// Below this length a vector is treated as degenerate by [`normalize`].
pub const NORMALIZE_EPSILON: f32 = 1e-8;

/// A position together with its unit surface normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FullVertex {
    pub position: Vec3,
    pub normal: Vec3,
}

impl FullVertex {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self { position, normal }
    }

    /// Flattened `[x, y, z, nx, ny, nz]`.
    pub fn to_array(&self) -> [f32; 6] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.normal.x,
            self.normal.y,
            self.normal.z,
        ]
    }
}

/// Unit direction for a spherical sample.
#[inline]
pub fn direction(theta: f32, phi: f32) -> Vec3 {
    let (sin_t, cos_t) = theta.sin_cos();
    let (sin_p, cos_p) = phi.sin_cos();
    Vec3::new(sin_t * cos_p, cos_t, sin_t * sin_p)
}

/// Unit-length copy of `v`, or `+Y` when `v` is (nearly) zero.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    let len = v.length();
    if len < NORMALIZE_EPSILON || !len.is_finite() {
        return Vec3::Y;
    }
    v / len
}

/// Per-component linear interpolation `a·(1 - t) + b·t`.
#[inline]
pub fn blend_vertex(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a * (1.0 - t) + b * t
}

/// Gradient normal of the spheroid `(x² + z²)/a² + y²/c² = 1` at `p`.
///
/// Reduces to `normalize(p)` when `a == c`.
#[inline]
pub fn spheroid_normal(p: Vec3, a: f32, c: f32) -> Vec3 {
    let inv_a2 = 1.0 / (a * a);
    let inv_c2 = 1.0 / (c * c);
    normalize(Vec3::new(p.x * inv_a2, p.y * inv_c2, p.z * inv_a2))
}
