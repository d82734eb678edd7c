//! Samples a deformed sphere over a θ/φ grid and reports what came out.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p sculpt-sampler -- --kind planet --output planet.json`.

mod grid;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use sculpt_config::{CliArgs, Config, ConfigError, export_json};
use sculpt_deform::{DeformParams, DeformationKind, Deformer};
use serde::Serialize;
use tracing::{debug, error, info};

use crate::grid::{GridStats, SampleGrid, grid_steps, sample_grid};

/// Everything written to the JSON output file.
#[derive(Serialize)]
struct SamplerOutput<'a> {
    kind: DeformationKind,
    params: &'a DeformParams,
    stats: GridStats,
    grid: &'a SampleGrid,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .map(|dir| dir.join("sculpt"))
            .unwrap_or_else(|| PathBuf::from(".sculpt"))
    });

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    sculpt_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), ConfigError> {
    let shape = &config.shape;
    let deformer = Deformer::new(shape.kind, &shape.params);
    let (theta_steps, phi_steps) = grid_steps(&config.sampler);
    info!(
        "Sampling {} ({:?} blend, noise: {}) on a {}x{} grid",
        shape.kind,
        shape.kind.blend_policy(),
        shape.kind.uses_noise(),
        theta_steps + 1,
        phi_steps,
    );
    debug!("Validated parameters: {:?}", deformer.params());

    let start = Instant::now();
    let grid = sample_grid(&deformer, &config.sampler);
    let elapsed = start.elapsed();
    let stats = grid.stats();

    info!(
        "Sampled {} vertices in {:.2?}; radius {:.4}..{:.4}",
        stats.vertex_count, elapsed, stats.min_radius, stats.max_radius,
    );
    info!(
        "Bounds min {:?} max {:?}",
        stats.bounds_min, stats.bounds_max
    );
    if let Some(err) = stats.max_normal_error {
        info!("Max normal length error: {err:.2e}");
    }

    if let Some(ref path) = config.sampler.output {
        let output = SamplerOutput {
            kind: shape.kind,
            params: &shape.params,
            stats,
            grid: &grid,
        };
        export_json(path, &output)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_writes_json_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/droplet.json");
        let mut config = Config::default();
        config.shape.kind = DeformationKind::Droplet;
        config.sampler.theta_steps = 4;
        config.sampler.phi_steps = 3;
        config.sampler.output = Some(path.clone());

        run(&config).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["kind"], "DROPLET");
        assert_eq!(value["stats"]["vertex_count"], 15);
        assert_eq!(value["grid"]["samples"].as_array().map(Vec::len), Some(15));
    }

    #[test]
    fn test_run_with_maximal_theta_steps_does_not_overflow() {
        let mut config = Config::default();
        config.sampler.theta_steps = u32::MAX;
        config.sampler.phi_steps = 1;
        assert!(run(&config).is_ok());
    }

    #[test]
    fn test_run_without_output_writes_nothing() {
        let mut config = Config::default();
        config.sampler.theta_steps = 2;
        config.sampler.phi_steps = 2;
        assert!(run(&config).is_ok());
    }
}
