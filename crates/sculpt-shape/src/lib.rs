//! Shape math: closed-form and noise-backed mappings from spherical samples
//! `(θ, φ)` to local-frame vertex positions, plus normals and blending.
//!
//! Conventions shared by every function in this crate:
//! - θ ∈ `[0, π]` is measured from the tip pole (`+Y`) to the base pole (`-Y`).
//! - φ ∈ `[0, 2π)` is the azimuth; the unit direction is
//!   `(sinθ·cosφ, cosθ, sinθ·sinφ)`.
//! - `length` stretches the polar axis through the volume-preserving spheroid
//!   axes returned by [`spheroid_axes`].
//!
//! Inputs are assumed to be range-checked by the caller.

mod cloud;
mod fibonacci;
mod planet;
mod profile;
mod sphere;
mod vertex;

pub use cloud::{
    CloudShape, CloudStyle, UnknownCloudStyle, canonical_name, cloud_displacement, cloud_vertex,
};
pub use fibonacci::{GOLDEN_ANGLE, angular_distance, fibonacci_point, seed_phase, size_variance};
pub use planet::{
    CRATER_BASE_DEPTH, CRATER_BASE_RADIUS, CRATER_RIM_RATIO, PlanetShape, crater_field,
    crater_profile, planet_displacement, planet_vertex,
};
pub use profile::{
    BULLET_CAP_START, BULLET_WALL_START, CONE_CAP_START, bullet_vertex, cone_vertex,
    droplet_inverted_vertex, droplet_vertex, egg_vertex, ovoid_vertex, pear_vertex,
};
pub use sphere::{
    bulge_axes, ellipsoid_vertex, sphere_vertex, spheroid_axes, spheroid_vertex,
    spheroid_with_bulge_vertex,
};
pub use vertex::{FullVertex, NORMALIZE_EPSILON, blend_vertex, direction, normalize, spheroid_normal};

pub use glam::Vec3;
