use glam::Vec3;
use sculpt_shape::{
    FullVertex, blend_vertex, bulge_axes, bullet_vertex, cloud_vertex, cone_vertex,
    droplet_inverted_vertex, droplet_vertex, egg_vertex, ovoid_vertex, pear_vertex, planet_vertex,
    sphere_vertex, spheroid_axes, spheroid_normal, spheroid_vertex, spheroid_with_bulge_vertex,
};

use crate::kind::DeformationKind;
use crate::params::{DeformParams, ValidatedParams};

/// Equatorial bulge of a [`DeformationKind::Spheroid`] per unit of intensity.
pub const BULGE_PER_INTENSITY: f32 = 0.5;

/// A deformation kind bound to a validated parameter set.
///
/// Build one per mesh and call [`Deformer::position`] or
/// [`Deformer::full_vertex`] for every grid sample; validation runs once in
/// [`Deformer::new`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Deformer {
    kind: DeformationKind,
    params: ValidatedParams,
}

impl Deformer {
    pub fn new(kind: DeformationKind, params: &DeformParams) -> Self {
        Self {
            kind,
            params: params.validated(),
        }
    }

    pub fn kind(&self) -> DeformationKind {
        self.kind
    }

    pub fn params(&self) -> &ValidatedParams {
        &self.params
    }

    /// Deformed position of the sample at polar angle `theta` and azimuth `phi`.
    pub fn position(&self, theta: f32, phi: f32) -> Vec3 {
        let p = &self.params;
        match self.kind {
            DeformationKind::None => {
                if p.length == 1.0 {
                    sphere_vertex(theta, phi, p.radius)
                } else {
                    spheroid_vertex(theta, phi, p.radius, p.length)
                }
            }
            DeformationKind::Spheroid => spheroid_with_bulge_vertex(
                theta,
                phi,
                p.radius,
                p.intensity * BULGE_PER_INTENSITY,
                p.length,
            ),
            DeformationKind::Cloud => {
                cloud_vertex(theta, phi, p.radius, p.intensity, p.length, &p.cloud)
            }
            DeformationKind::Planet => {
                planet_vertex(theta, phi, p.radius, p.intensity, p.length, &p.planet)
            }
            // Negated so that positive asymmetry keeps the θ = π end wide.
            DeformationKind::Ovoid => {
                self.blended(theta, phi, ovoid_vertex(theta, phi, p.radius, -p.asymmetry, p.length))
            }
            DeformationKind::Egg => {
                self.blended(theta, phi, egg_vertex(theta, phi, p.radius, -p.asymmetry, p.length))
            }
            DeformationKind::Pear => {
                self.blended(theta, phi, pear_vertex(theta, phi, p.radius, p.intensity, p.length))
            }
            DeformationKind::Droplet => {
                self.blended(theta, phi, droplet_vertex(theta, phi, p.radius, p.power, p.length))
            }
            DeformationKind::DropletInverted => self.blended(
                theta,
                phi,
                droplet_inverted_vertex(theta, phi, p.radius, p.power, p.length),
            ),
            DeformationKind::Bullet => {
                self.blended(theta, phi, bullet_vertex(theta, phi, p.radius, p.length))
            }
            DeformationKind::Cone => {
                self.blended(theta, phi, cone_vertex(theta, phi, p.radius, p.length))
            }
        }
    }

    /// Semi-axes `(a, c)` of the spheroid whose gradient approximates the
    /// surface normal.
    pub fn normal_axes(&self) -> (f32, f32) {
        let p = &self.params;
        match self.kind {
            DeformationKind::Spheroid => {
                bulge_axes(p.radius, p.intensity * BULGE_PER_INTENSITY, p.length)
            }
            DeformationKind::None
            | DeformationKind::Ovoid
            | DeformationKind::Egg
            | DeformationKind::Pear
            | DeformationKind::Droplet
            | DeformationKind::DropletInverted
            | DeformationKind::Bullet
            | DeformationKind::Cone
            | DeformationKind::Cloud
            | DeformationKind::Planet => spheroid_axes(p.radius, p.length),
        }
    }

    /// Position plus approximate unit normal.
    pub fn full_vertex(&self, theta: f32, phi: f32) -> FullVertex {
        let position = self.position(theta, phi);
        let (a, c) = self.normal_axes();
        FullVertex::new(position, spheroid_normal(position, a, c))
    }

    /// Linear blend from the length-stretched sphere towards `target`.
    fn blended(&self, theta: f32, phi: f32, target: Vec3) -> Vec3 {
        let p = &self.params;
        let base = spheroid_vertex(theta, phi, p.radius, p.length);
        blend_vertex(base, target, p.intensity)
    }
}

/// Deformed position for a single sample.
///
/// Validates `params` on every call; prefer [`Deformer`] for whole grids.
pub fn position(kind: DeformationKind, theta: f32, phi: f32, params: &DeformParams) -> Vec3 {
    Deformer::new(kind, params).position(theta, phi)
}

/// Deformed position and approximate normal for a single sample.
pub fn full_vertex(
    kind: DeformationKind,
    theta: f32,
    phi: f32,
    params: &DeformParams,
) -> FullVertex {
    Deformer::new(kind, params).full_vertex(theta, phi)
}
