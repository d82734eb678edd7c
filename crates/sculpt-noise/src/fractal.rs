//! Multi-octave compositions of seeded simplex noise.
//!
//! Octave loops follow the usual fBm recurrence: each successive layer
//! multiplies frequency by `lacunarity` and amplitude by `persistence`
//! (or halves it, for the ridged variant).

use crate::simplex::noise3d_seeded;

/// Feedback gain used by [`terrain_noise`] for its ridged component.
pub const RIDGED_GAIN: f32 = 2.0;
/// Ridge offset used by [`terrain_noise`] for its ridged component.
pub const RIDGED_OFFSET: f32 = 1.0;

/// Shift that re-centres ridged output (≈`[0, 2]`) near zero before blending.
const RIDGED_RECENTER: f32 = 0.5;

/// Fractal Brownian motion over seeded simplex noise.
///
/// The sum is divided by the total amplitude used, so the result stays in
/// roughly `[-1, 1]` for any octave count. Zero octaves yields `0.0`.
pub fn fbm(
    x: f32,
    y: f32,
    z: f32,
    octaves: u32,
    lacunarity: f32,
    persistence: f32,
    seed: u32,
) -> f32 {
    let mut total = 0.0f32;
    let mut amplitude = 1.0f32;
    let mut frequency = 1.0f32;
    let mut amplitude_sum = 0.0f32;

    for _ in 0..octaves {
        total += noise3d_seeded(x * frequency, y * frequency, z * frequency, seed) * amplitude;
        amplitude_sum += amplitude;
        frequency *= lacunarity;
        amplitude *= persistence;
    }

    if amplitude_sum > 0.0 {
        total / amplitude_sum
    } else {
        0.0
    }
}

/// Ridged multifractal noise.
///
/// Each octave folds the base noise into `(offset - |n|)²`, so the zero
/// crossings of the base field become sharp crests. The signal is weighted
/// by a feedback term carried from the previous octave, which keeps
/// already-rough regions rough and flat regions flat. Non-negative, with
/// an upper bound near `2.0` for `offset = 1`.
#[allow(clippy::too_many_arguments)]
pub fn ridged_multifractal(
    x: f32,
    y: f32,
    z: f32,
    octaves: u32,
    lacunarity: f32,
    gain: f32,
    offset: f32,
    seed: u32,
) -> f32 {
    let mut total = 0.0f32;
    let mut amplitude = 1.0f32;
    let mut frequency = 1.0f32;
    let mut weight = 1.0f32;

    for _ in 0..octaves {
        let n = noise3d_seeded(x * frequency, y * frequency, z * frequency, seed);
        let mut signal = offset - n.abs();
        signal *= signal;
        signal *= weight;
        weight = (signal * gain).clamp(0.0, 1.0);

        total += signal * amplitude;
        frequency *= lacunarity;
        amplitude *= 0.5;
    }

    total
}

/// Blend between rolling fBm hills and recentred ridged crests.
///
/// `ridged_amount = 0` returns exactly [`fbm`]; `1` returns exactly the
/// ridged value minus `0.5`; anything between is a linear mix.
#[allow(clippy::too_many_arguments)]
pub fn terrain_noise(
    x: f32,
    y: f32,
    z: f32,
    octaves: u32,
    lacunarity: f32,
    persistence: f32,
    ridged_amount: f32,
    seed: u32,
) -> f32 {
    if ridged_amount <= 0.0 {
        return fbm(x, y, z, octaves, lacunarity, persistence, seed);
    }

    let ridged = ridged_multifractal(
        x,
        y,
        z,
        octaves,
        lacunarity,
        RIDGED_GAIN,
        RIDGED_OFFSET,
        seed,
    ) - RIDGED_RECENTER;

    if ridged_amount >= 1.0 {
        return ridged;
    }

    let smooth = fbm(x, y, z, octaves, lacunarity, persistence, seed);
    smooth * (1.0 - ridged_amount) + ridged * ridged_amount
}
