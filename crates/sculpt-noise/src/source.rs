//! Adapters exposing the engine through [`noise::NoiseFn`], so the sources
//! compose with the `noise` crate's modifiers and combiners.

use noise::NoiseFn;

use crate::fractal::{fbm, ridged_multifractal};
use crate::simplex::noise3d_seeded;

/// Seeded simplex noise as a `noise` source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimplexSource {
    pub seed: u32,
}

impl SimplexSource {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }
}

impl NoiseFn<f64, 3> for SimplexSource {
    fn get(&self, point: [f64; 3]) -> f64 {
        f64::from(noise3d_seeded(
            point[0] as f32,
            point[1] as f32,
            point[2] as f32,
            self.seed,
        ))
    }
}

/// Normalized fractal Brownian motion as a `noise` source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FbmSource {
    pub seed: u32,
    pub octaves: u32,
    pub lacunarity: f32,
    pub persistence: f32,
}

impl Default for FbmSource {
    fn default() -> Self {
        Self {
            seed: 0,
            octaves: 4,
            lacunarity: 2.0,
            persistence: 0.5,
        }
    }
}

impl NoiseFn<f64, 3> for FbmSource {
    fn get(&self, point: [f64; 3]) -> f64 {
        f64::from(fbm(
            point[0] as f32,
            point[1] as f32,
            point[2] as f32,
            self.octaves,
            self.lacunarity,
            self.persistence,
            self.seed,
        ))
    }
}

/// Ridged multifractal as a `noise` source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RidgedSource {
    pub seed: u32,
    pub octaves: u32,
    pub lacunarity: f32,
    pub gain: f32,
    pub offset: f32,
}

impl Default for RidgedSource {
    fn default() -> Self {
        Self {
            seed: 0,
            octaves: 4,
            lacunarity: 2.0,
            gain: crate::RIDGED_GAIN,
            offset: crate::RIDGED_OFFSET,
        }
    }
}

impl NoiseFn<f64, 3> for RidgedSource {
    fn get(&self, point: [f64; 3]) -> f64 {
        f64::from(ridged_multifractal(
            point[0] as f32,
            point[1] as f32,
            point[2] as f32,
            self.octaves,
            self.lacunarity,
            self.gain,
            self.offset,
            self.seed,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noise::ScalePoint;

    #[test]
    fn test_simplex_source_matches_function() {
        let source = SimplexSource::new(4);
        let expected = f64::from(noise3d_seeded(0.5, 1.5, -0.25, 4));
        assert_eq!(source.get([0.5, 1.5, -0.25]), expected);
    }

    #[test]
    fn test_fbm_source_matches_function() {
        let source = FbmSource {
            seed: 2,
            octaves: 6,
            ..Default::default()
        };
        let expected = f64::from(fbm(0.1, 0.2, 0.3, 6, 2.0, 0.5, 2));
        assert_eq!(source.get([0.1, 0.2, 0.3]), expected);
    }

    #[test]
    fn test_sources_compose_with_noise_modifiers() {
        let ridged = RidgedSource::default();
        let scaled = ScalePoint::new(ridged).set_scale(2.0);
        let direct = ridged.get([1.0, 2.0, 3.0]);
        assert_eq!(scaled.get([0.5, 1.0, 1.5]), direct);
    }

    #[test]
    fn test_scaled_sources_survive_huge_points() {
        let scaled = ScalePoint::new(FbmSource::default()).set_scale(1e12);
        let v = scaled.get([3.0, -7.0, 11.0]);
        assert!(v.is_finite() && (-1.05..=1.05).contains(&v), "value {v}");
    }

    #[test]
    fn test_boxed_sources_are_interchangeable() {
        let sources: Vec<Box<dyn NoiseFn<f64, 3>>> = vec![
            Box::new(SimplexSource::new(1)),
            Box::new(FbmSource::default()),
            Box::new(RidgedSource::default()),
        ];
        for source in &sources {
            let v = source.get([0.3, 0.6, 0.9]);
            assert!(v.is_finite() && (-1.0..=2.0).contains(&v), "value {v}");
        }
    }
}
