//! θ/φ grid evaluation and summary statistics.

use std::f32::consts::{PI, TAU};
use std::ops::Range;

use glam::Vec3;
use sculpt_config::SamplerConfig;
use sculpt_deform::Deformer;
use serde::Serialize;

/// Upper bound on both `theta_steps` and `phi_steps`.
pub const MAX_STEPS: u32 = 4096;

/// One evaluated grid sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Sample {
    pub theta: f32,
    pub phi: f32,
    pub position: [f32; 3],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal: Option<[f32; 3]>,
}

/// Samples laid out row by row, θ = 0 first.
#[derive(Clone, Debug, Serialize)]
pub struct SampleGrid {
    /// `theta_steps + 1` rows, both poles included.
    pub rows: u32,
    pub columns: u32,
    pub samples: Vec<Sample>,
}

/// Aggregate measurements over a [`SampleGrid`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GridStats {
    pub vertex_count: usize,
    pub bounds_min: [f32; 3],
    pub bounds_max: [f32; 3],
    pub min_radius: f32,
    pub max_radius: f32,
    /// Largest `| |n| - 1 |` over all normals, if normals were computed.
    pub max_normal_error: Option<f32>,
}

/// Evaluate `deformer` over the grid described by `settings`.
///
/// Rows are split into contiguous bands, one per worker thread.
pub fn sample_grid(deformer: &Deformer, settings: &SamplerConfig) -> SampleGrid {
    let (theta_steps, columns) = grid_steps(settings);
    let rows = theta_steps + 1;
    let workers = worker_count(settings.threads, rows as usize);
    let band = (rows as usize).div_ceil(workers);

    let bands: Vec<Vec<Sample>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|w| {
                let start = (w * band) as u32;
                let end = ((w + 1) * band).min(rows as usize) as u32;
                scope.spawn(move || {
                    sample_rows(deformer, start..end, theta_steps, columns, settings.with_normals)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(samples) => samples,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    });

    SampleGrid {
        rows,
        columns,
        samples: bands.concat(),
    }
}

/// `(theta_steps, phi_steps)` clamped to `1..=MAX_STEPS`.
pub fn grid_steps(settings: &SamplerConfig) -> (u32, u32) {
    (
        settings.theta_steps.clamp(1, MAX_STEPS),
        settings.phi_steps.clamp(1, MAX_STEPS),
    )
}

fn worker_count(requested: usize, rows: usize) -> usize {
    let threads = if requested == 0 {
        num_cpus::get()
    } else {
        requested
    };
    threads.clamp(1, rows.max(1))
}

fn sample_rows(
    deformer: &Deformer,
    rows: Range<u32>,
    theta_steps: u32,
    columns: u32,
    with_normals: bool,
) -> Vec<Sample> {
    let mut samples = Vec::with_capacity(rows.len() * columns as usize);
    for row in rows {
        let theta = PI * row as f32 / theta_steps as f32;
        for column in 0..columns {
            let phi = TAU * column as f32 / columns as f32;
            let sample = if with_normals {
                let v = deformer.full_vertex(theta, phi);
                Sample {
                    theta,
                    phi,
                    position: v.position.to_array(),
                    normal: Some(v.normal.to_array()),
                }
            } else {
                Sample {
                    theta,
                    phi,
                    position: deformer.position(theta, phi).to_array(),
                    normal: None,
                }
            };
            samples.push(sample);
        }
    }
    samples
}

impl SampleGrid {
    pub fn stats(&self) -> GridStats {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        let mut min_radius = f32::INFINITY;
        let mut max_radius = 0.0f32;
        let mut max_normal_error: Option<f32> = None;

        for sample in &self.samples {
            let p = Vec3::from_array(sample.position);
            min = min.min(p);
            max = max.max(p);
            let r = p.length();
            min_radius = min_radius.min(r);
            max_radius = max_radius.max(r);

            if let Some(n) = sample.normal {
                let err = (Vec3::from_array(n).length() - 1.0).abs();
                max_normal_error = Some(max_normal_error.map_or(err, |e| e.max(err)));
            }
        }

        if self.samples.is_empty() {
            min = Vec3::ZERO;
            max = Vec3::ZERO;
            min_radius = 0.0;
        }

        GridStats {
            vertex_count: self.samples.len(),
            bounds_min: min.to_array(),
            bounds_max: max.to_array(),
            min_radius,
            max_radius,
            max_normal_error,
        }
    }
}
