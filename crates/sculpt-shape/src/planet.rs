//! Planet surfaces: terrain noise plus cratering, applied as an additive
//! radial displacement on the length-stretched sphere.

use glam::Vec3;
use sculpt_noise::terrain_noise;

use crate::fibonacci::{GOLDEN_ANGLE, angular_distance, fibonacci_point, seed_phase, size_variance};
use crate::sphere::{spheroid_axes, spheroid_vertex};
use crate::vertex::direction;

/// Below this intensity the planet is returned as a plain spheroid.
const MIN_INTENSITY: f32 = 0.01;

/// Scale applied to the terrain noise before craters are added.
const TERRAIN_SCALE: f32 = 0.3;

/// Angular radius, in radians, of a crater with unit size variance.
pub const CRATER_BASE_RADIUS: f32 = 0.25;
/// Depth of a crater with unit size variance, relative to the radius.
pub const CRATER_BASE_DEPTH: f32 = 0.15;
/// Rim height as a fraction of crater depth.
pub const CRATER_RIM_RATIO: f32 = 0.3;

/// Range-checked planet parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetShape {
    /// Base frequency at which the unit direction is sampled.
    pub frequency: f32,
    pub octaves: u32,
    pub lacunarity: f32,
    pub persistence: f32,
    /// `0` rolling hills, `1` sharp ridges.
    pub ridged: f32,
    pub crater_count: u32,
    pub seed: u32,
}

impl Default for PlanetShape {
    fn default() -> Self {
        Self {
            frequency: 2.0,
            octaves: 5,
            lacunarity: 2.0,
            persistence: 0.5,
            ridged: 0.3,
            crater_count: 6,
            seed: 0,
        }
    }
}

/// Height profile of one crater at angular `distance` from its centre.
///
/// With `r = distance / crater_radius`:
/// - `r ≤ 1`: paraboloid bowl `-depth·(1 - r²)`, zero at the rim.
/// - `1 < r ≤ 2`: raised rim `rim_height·e^(-3(r-1))·(2 - r)`.
/// - `r > 2`: no influence.
pub fn crater_profile(distance: f32, crater_radius: f32, depth: f32, rim_height: f32) -> f32 {
    let r = distance / crater_radius;
    if r <= 1.0 {
        -depth * (1.0 - r * r)
    } else if r <= 2.0 {
        let rim = r - 1.0;
        rim_height * (-3.0 * rim).exp() * (1.0 - rim)
    } else {
        0.0
    }
}

/// Summed crater relief at unit direction `dir`.
pub fn crater_field(dir: Vec3, crater_count: u32, seed: u32) -> f32 {
    let phase = seed_phase(seed);
    (0..crater_count)
        .map(|i| {
            let center = fibonacci_point(i, crater_count, GOLDEN_ANGLE, phase);
            let variance = size_variance(i, seed);
            let depth = CRATER_BASE_DEPTH * variance;
            crater_profile(
                angular_distance(dir, center),
                CRATER_BASE_RADIUS * variance,
                depth,
                depth * CRATER_RIM_RATIO,
            )
        })
        .sum()
}

/// Radial displacement (before intensity) at unit direction `dir`.
pub fn planet_displacement(dir: Vec3, shape: &PlanetShape) -> f32 {
    let p = dir * shape.frequency;
    let terrain = terrain_noise(
        p.x,
        p.y,
        p.z,
        shape.octaves,
        shape.lacunarity,
        shape.persistence,
        shape.ridged,
        shape.seed,
    ) * TERRAIN_SCALE;

    terrain + crater_field(dir, shape.crater_count, shape.seed)
}

/// Planet surface: the length-stretched sphere scaled by
/// `1 + displacement·intensity`.
pub fn planet_vertex(
    theta: f32,
    phi: f32,
    radius: f32,
    intensity: f32,
    length: f32,
    shape: &PlanetShape,
) -> Vec3 {
    if intensity < MIN_INTENSITY {
        return spheroid_vertex(theta, phi, radius, length);
    }

    let dir = direction(theta, phi);
    let displacement = planet_displacement(dir, shape) * intensity;
    let (a, c) = spheroid_axes(radius, length);
    Vec3::new(dir.x * a, dir.y * c, dir.z * a) * (1.0 + displacement)
}
