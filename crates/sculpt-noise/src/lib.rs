//! Deterministic 3D coherent noise: simplex base noise, fractal Brownian
//! motion, ridged multifractal, and a terrain blend between the two.
//!
//! Every function is a pure function of its arguments. The only shared data
//! are the gradient and permutation tables, which are compile-time constants,
//! so all entry points are safe to call from any number of threads.

mod fractal;
mod simplex;
mod source;

pub use fractal::{RIDGED_GAIN, RIDGED_OFFSET, fbm, ridged_multifractal, terrain_noise};
pub use simplex::{NOISE_SCALE, noise3d, noise3d_seeded, seed_offset};
pub use source::{FbmSource, RidgedSource, SimplexSource};
