//! Billowing "cloud" surfaces: a radial displacement field over the unit
//! sphere, chosen from four styles, applied additively to the radius.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use sculpt_noise::fbm;
use serde::{Deserialize, Serialize};

use crate::fibonacci::{GOLDEN_ANGLE, angular_distance, fibonacci_point, seed_phase, size_variance};
use crate::sphere::ellipsoid_vertex;
use crate::vertex::direction;

/// Below this intensity the cloud is returned as a plain stretched ellipsoid.
const MIN_INTENSITY: f32 = 0.01;

/// Spiral increment for the billowing style's secondary lobes. A different
/// multiple of the golden angle keeps them off the primary lobe positions.
const SECONDARY_SPIRAL_STEP: f32 = GOLDEN_ANGLE * 1.5;

/// Error returned by [`CloudStyle::from_str`] for an unrecognised name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown cloud style: {0:?}")]
pub struct UnknownCloudStyle(pub String);

/// Displacement algorithm used by [`cloud_vertex`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CloudStyle {
    /// Discrete Gaussian-like puffs on a Fibonacci spiral.
    #[default]
    Gaussian,
    /// Absolute-value fBm billows over a low-frequency swell.
    Fractal,
    /// Large and small puffs layered with fine surface detail.
    Billowing,
    /// Cellular puffs from nearest-cell distances.
    Worley,
}

impl CloudStyle {
    pub const ALL: [CloudStyle; 4] = [
        CloudStyle::Gaussian,
        CloudStyle::Fractal,
        CloudStyle::Billowing,
        CloudStyle::Worley,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CloudStyle::Gaussian => "GAUSSIAN",
            CloudStyle::Fractal => "FRACTAL",
            CloudStyle::Billowing => "BILLOWING",
            CloudStyle::Worley => "WORLEY",
        }
    }

    /// Parse a style name, falling back to [`CloudStyle::Gaussian`] for
    /// anything unrecognised.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|err| {
            log::warn!("{err}, falling back to {}", CloudStyle::default());
            CloudStyle::default()
        })
    }

    /// Inclusive range the `count` parameter is clamped to for this style.
    ///
    /// Gaussian: lobes. Fractal: octaves. Billowing: secondary lobes.
    /// Worley: cell layers of six cells each.
    pub fn count_range(self) -> (u32, u32) {
        match self {
            CloudStyle::Gaussian => (1, 20),
            CloudStyle::Fractal => (1, 8),
            CloudStyle::Billowing => (2, 20),
            CloudStyle::Worley => (1, 8),
        }
    }
}

/// Canonical selector key: upper case, with `-` and spaces mapped to `_`.
pub fn canonical_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}

impl FromStr for CloudStyle {
    type Err = UnknownCloudStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = canonical_name(s);
        CloudStyle::ALL
            .into_iter()
            .find(|style| style.name() == key)
            .ok_or_else(|| UnknownCloudStyle(s.to_string()))
    }
}

impl fmt::Display for CloudStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for CloudStyle {
    fn from(name: String) -> Self {
        CloudStyle::from_name(&name)
    }
}

impl From<CloudStyle> for String {
    fn from(style: CloudStyle) -> Self {
        style.name().to_string()
    }
}

/// Range-checked cloud parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudShape {
    pub style: CloudStyle,
    /// Lobe, octave or cell-layer count, depending on `style`.
    pub count: u32,
    /// `[0, 1]`: wider lobes and softer cells as it grows.
    pub smoothness: f32,
    /// Displacement amplitude.
    pub bump_size: f32,
    /// Horizontal (X/Z) stretch, independent of `length`.
    pub width: f32,
    pub seed: u32,
}

impl Default for CloudShape {
    fn default() -> Self {
        Self {
            style: CloudStyle::Gaussian,
            count: 8,
            smoothness: 0.5,
            bump_size: 0.5,
            width: 1.0,
            seed: 0,
        }
    }
}

/// Wyvill falloff `(1 - r²)³` for `r` in `[0, 1]`.
#[inline]
fn wyvill(r: f32) -> f32 {
    let k = 1.0 - r * r;
    k * k * k
}

/// Sum of soft lobes centred on a Fibonacci spiral.
fn lobe_field(
    dir: Vec3,
    count: u32,
    spiral_step: f32,
    base_radius: f32,
    bump_size: f32,
    seed: u32,
) -> f32 {
    let phase = seed_phase(seed);
    let mut total = 0.0;

    for i in 0..count {
        let center = fibonacci_point(i, count, spiral_step, phase);
        let variance = size_variance(i, seed);
        let lobe_radius = base_radius * variance;
        let d = angular_distance(dir, center);
        if d < lobe_radius {
            total += bump_size * variance * wyvill(d / lobe_radius);
        }
    }

    total
}

fn gaussian_displacement(dir: Vec3, shape: &CloudShape) -> f32 {
    let base_radius = 0.4 + shape.smoothness * 0.5;
    lobe_field(
        dir,
        shape.count,
        GOLDEN_ANGLE,
        base_radius,
        shape.bump_size,
        shape.seed,
    ) * 0.3
}

fn fractal_displacement(dir: Vec3, shape: &CloudShape) -> f32 {
    let frequency = 2.0 + shape.bump_size;
    // Smoother clouds lose high-octave energy faster.
    let persistence = 0.65 - 0.35 * shape.smoothness;
    let p = dir * frequency;
    let billows = fbm(p.x, p.y, p.z, shape.count, 2.0, persistence, shape.seed).abs();

    let q = dir * (frequency * 0.5);
    let swell = fbm(q.x, q.y, q.z, 2, 2.0, 0.5, shape.seed.wrapping_add(1)) * 0.5 + 0.5;

    (0.5 * billows + 0.5 * swell) * shape.bump_size * 0.5
}

fn billowing_displacement(dir: Vec3, shape: &CloudShape) -> f32 {
    let primary_count = (shape.count / 2).max(2);
    let primary = lobe_field(
        dir,
        primary_count,
        GOLDEN_ANGLE,
        0.6 + shape.smoothness * 0.4,
        shape.bump_size,
        shape.seed,
    ) * 0.8;

    let secondary = lobe_field(
        dir,
        shape.count,
        SECONDARY_SPIRAL_STEP,
        0.25 + shape.smoothness * 0.2,
        shape.bump_size,
        shape.seed.wrapping_add(1),
    ) * 0.4;

    let p = dir * 8.0;
    let fine = fbm(p.x, p.y, p.z, 3, 2.0, 0.5, shape.seed.wrapping_add(2)) * 0.5 + 0.5;
    let detail = fine * shape.bump_size * 0.15 * (1.0 - shape.smoothness);

    (primary + secondary) * 0.35 + detail
}

fn worley_displacement(dir: Vec3, shape: &CloudShape) -> f32 {
    let cells = shape.count * 6;
    if cells == 0 {
        return 0.0;
    }
    // Angular radius of a spherical cap covering 1/cells of the sphere.
    let cell_radius = 2.0 / (cells as f32).sqrt();
    let phase = seed_phase(shape.seed);

    let mut f1 = f32::INFINITY;
    let mut f2 = f32::INFINITY;
    for i in 0..cells {
        let d = angular_distance(dir, fibonacci_point(i, cells, GOLDEN_ANGLE, phase));
        if d < f1 {
            f2 = f1;
            f1 = d;
        } else if d < f2 {
            f2 = d;
        }
    }
    if !f2.is_finite() {
        f2 = f1;
    }

    let puffy = {
        let k = 1.0 - (f1 / cell_radius).min(1.0);
        k * k
    };
    let boundary = ((f2 - f1) / cell_radius).clamp(0.0, 1.0);
    let softness = shape.smoothness;
    let value = puffy * softness + boundary * (1.0 - softness);

    value * shape.bump_size * 0.4
}

/// Signed radial displacement of the unit direction `dir` for `shape`.
pub fn cloud_displacement(dir: Vec3, shape: &CloudShape) -> f32 {
    match shape.style {
        CloudStyle::Gaussian => gaussian_displacement(dir, shape),
        CloudStyle::Fractal => fractal_displacement(dir, shape),
        CloudStyle::Billowing => billowing_displacement(dir, shape),
        CloudStyle::Worley => worley_displacement(dir, shape),
    }
}

/// Cloud surface: `radius·(1 + displacement·intensity)` along the sample
/// direction, then stretched by `width` on X/Z and `length` on Y.
pub fn cloud_vertex(
    theta: f32,
    phi: f32,
    radius: f32,
    intensity: f32,
    length: f32,
    shape: &CloudShape,
) -> Vec3 {
    if intensity < MIN_INTENSITY {
        let horizontal = radius * shape.width;
        return ellipsoid_vertex(theta, phi, horizontal, radius * length, horizontal);
    }

    let dir = direction(theta, phi);
    let displacement = cloud_displacement(dir, shape) * intensity;
    let r = radius * (1.0 + displacement);
    Vec3::new(
        dir.x * r * shape.width,
        dir.y * r * length,
        dir.z * r * shape.width,
    )
}
