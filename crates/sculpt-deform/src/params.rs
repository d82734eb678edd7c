//! Deformation parameter sets and their range validation.
//!
//! [`DeformParams`] is what callers and config files fill in: every field has
//! a default, any subset may be specified, and values are not trusted.
//! [`DeformParams::validated`] is the single place where they are clamped
//! into the ranges the shape and noise code assume.

use sculpt_shape::{CloudShape, CloudStyle, PlanetShape};
use serde::{Deserialize, Serialize};

/// Smallest radius handed to the shape functions.
const MIN_RADIUS: f32 = 1e-4;
/// Bounds for the axial `length` and horizontal `width` stretches.
const STRETCH_RANGE: (f32, f32) = (0.05, 20.0);
const BUMP_SIZE_RANGE: (f32, f32) = (0.0, 4.0);
const FREQUENCY_RANGE: (f32, f32) = (0.01, 64.0);
const LACUNARITY_RANGE: (f32, f32) = (1.0, 4.0);
const ASYMMETRY_RANGE: (f32, f32) = (-0.9, 0.9);
const POWER_RANGE: (f32, f32) = (0.1, 8.0);
const OCTAVE_RANGE: (i32, i32) = (1, 8);
const CRATER_RANGE: (i32, i32) = (0, 20);
const MAX_SEED: i64 = i32::MAX as i64;

/// Egg/ovoid asymmetry and droplet sharpness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileParams {
    /// Positive values narrow the tip and keep the base wide.
    pub asymmetry: f32,
    /// Droplet exponent on `|sinθ|`.
    pub power: f32,
}

impl Default for ProfileParams {
    fn default() -> Self {
        Self {
            asymmetry: 0.3,
            power: 1.0,
        }
    }
}

/// Cloud parameters as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudParams {
    pub style: CloudStyle,
    /// Lobe count, octave count or Worley layer count, depending on `style`.
    pub count: i32,
    pub smoothness: f32,
    pub bump_size: f32,
    pub width: f32,
    pub seed: i64,
}

impl Default for CloudParams {
    fn default() -> Self {
        let shape = CloudShape::default();
        Self {
            style: shape.style,
            count: shape.count as i32,
            smoothness: shape.smoothness,
            bump_size: shape.bump_size,
            width: shape.width,
            seed: i64::from(shape.seed),
        }
    }
}

/// Planet parameters as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetParams {
    pub frequency: f32,
    pub octaves: i32,
    pub lacunarity: f32,
    pub persistence: f32,
    pub ridged: f32,
    pub crater_count: i32,
    pub seed: i64,
}

impl Default for PlanetParams {
    fn default() -> Self {
        let shape = PlanetShape::default();
        Self {
            frequency: shape.frequency,
            octaves: shape.octaves as i32,
            lacunarity: shape.lacunarity,
            persistence: shape.persistence,
            ridged: shape.ridged,
            crater_count: shape.crater_count as i32,
            seed: i64::from(shape.seed),
        }
    }
}

/// Full parameter set for one deformation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeformParams {
    pub radius: f32,
    /// `0` pure sphere, `1` full target shape.
    pub intensity: f32,
    /// Axial stretch multiplier; `1` keeps spherical proportions.
    pub length: f32,
    pub profile: ProfileParams,
    pub cloud: CloudParams,
    pub planet: PlanetParams,
}

impl Default for DeformParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            intensity: 1.0,
            length: 1.0,
            profile: ProfileParams::default(),
            cloud: CloudParams::default(),
            planet: PlanetParams::default(),
        }
    }
}

impl DeformParams {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            ..Default::default()
        }
    }

    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }

    pub fn with_length(mut self, length: f32) -> Self {
        self.length = length;
        self
    }

    pub fn with_profile(mut self, profile: ProfileParams) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_cloud(mut self, cloud: CloudParams) -> Self {
        self.cloud = cloud;
        self
    }

    pub fn with_planet(mut self, planet: PlanetParams) -> Self {
        self.planet = planet;
        self
    }

    /// Clamp every field into its supported range.
    ///
    /// NaN floats are replaced by the field's default.
    pub fn validated(&self) -> ValidatedParams {
        let defaults = DeformParams::default();
        let cloud_defaults = CloudParams::default();
        let planet_defaults = PlanetParams::default();

        let style = self.cloud.style;
        let (count_min, count_max) = style.count_range();

        ValidatedParams {
            radius: clamp_f32("radius", self.radius, MIN_RADIUS, f32::MAX, defaults.radius),
            intensity: clamp_f32("intensity", self.intensity, 0.0, 1.0, defaults.intensity),
            length: clamp_f32(
                "length",
                self.length,
                STRETCH_RANGE.0,
                STRETCH_RANGE.1,
                defaults.length,
            ),
            asymmetry: clamp_f32(
                "asymmetry",
                self.profile.asymmetry,
                ASYMMETRY_RANGE.0,
                ASYMMETRY_RANGE.1,
                defaults.profile.asymmetry,
            ),
            power: clamp_f32(
                "power",
                self.profile.power,
                POWER_RANGE.0,
                POWER_RANGE.1,
                defaults.profile.power,
            ),
            cloud: CloudShape {
                style,
                count: clamp_count("cloud.count", self.cloud.count, count_min, count_max),
                smoothness: clamp_f32(
                    "cloud.smoothness",
                    self.cloud.smoothness,
                    0.0,
                    1.0,
                    cloud_defaults.smoothness,
                ),
                bump_size: clamp_f32(
                    "cloud.bump_size",
                    self.cloud.bump_size,
                    BUMP_SIZE_RANGE.0,
                    BUMP_SIZE_RANGE.1,
                    cloud_defaults.bump_size,
                ),
                width: clamp_f32(
                    "cloud.width",
                    self.cloud.width,
                    STRETCH_RANGE.0,
                    STRETCH_RANGE.1,
                    cloud_defaults.width,
                ),
                seed: clamp_seed("cloud.seed", self.cloud.seed),
            },
            planet: PlanetShape {
                frequency: clamp_f32(
                    "planet.frequency",
                    self.planet.frequency,
                    FREQUENCY_RANGE.0,
                    FREQUENCY_RANGE.1,
                    planet_defaults.frequency,
                ),
                octaves: clamp_count(
                    "planet.octaves",
                    self.planet.octaves,
                    OCTAVE_RANGE.0 as u32,
                    OCTAVE_RANGE.1 as u32,
                ),
                lacunarity: clamp_f32(
                    "planet.lacunarity",
                    self.planet.lacunarity,
                    LACUNARITY_RANGE.0,
                    LACUNARITY_RANGE.1,
                    planet_defaults.lacunarity,
                ),
                persistence: clamp_f32(
                    "planet.persistence",
                    self.planet.persistence,
                    0.0,
                    1.0,
                    planet_defaults.persistence,
                ),
                ridged: clamp_f32(
                    "planet.ridged",
                    self.planet.ridged,
                    0.0,
                    1.0,
                    planet_defaults.ridged,
                ),
                crater_count: clamp_count(
                    "planet.crater_count",
                    self.planet.crater_count,
                    CRATER_RANGE.0 as u32,
                    CRATER_RANGE.1 as u32,
                ),
                seed: clamp_seed("planet.seed", self.planet.seed),
            },
        }
    }
}

/// Parameters after range validation, ready for the shape functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedParams {
    pub radius: f32,
    pub intensity: f32,
    pub length: f32,
    pub asymmetry: f32,
    pub power: f32,
    pub cloud: CloudShape,
    pub planet: PlanetShape,
}

fn clamp_f32(name: &str, value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        log::debug!("{name} is NaN, using {fallback}");
        return fallback;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        log::debug!("{name} clamped from {value} to {clamped}");
    }
    clamped
}

fn clamp_count(name: &str, value: i32, min: u32, max: u32) -> u32 {
    let clamped = i64::from(value).clamp(i64::from(min), i64::from(max));
    if clamped != i64::from(value) {
        log::debug!("{name} clamped from {value} to {clamped}");
    }
    clamped as u32
}

fn clamp_seed(name: &str, seed: i64) -> u32 {
    let clamped = seed.clamp(0, MAX_SEED);
    if clamped != seed {
        log::debug!("{name} clamped from {seed} to {clamped}");
    }
    clamped as u32
}
