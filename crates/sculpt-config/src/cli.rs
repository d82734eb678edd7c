//! Command-line argument parsing for the sculpt tools.

use std::path::PathBuf;

use clap::Parser;
use sculpt_deform::{CloudStyle, DeformationKind};

use crate::Config;

/// Sculpt command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "sculpt", about = "Sample deformed-sphere geometry")]
pub struct CliArgs {
    /// Deformation kind (none, spheroid, egg, droplet-inverted, planet, ...).
    #[arg(long)]
    pub kind: Option<String>,

    /// Cloud style (gaussian, fractal, billowing, worley).
    #[arg(long)]
    pub style: Option<String>,

    /// Base sphere radius.
    #[arg(long)]
    pub radius: Option<f32>,

    /// Deformation intensity in [0, 1].
    #[arg(long)]
    pub intensity: Option<f32>,

    /// Axial stretch along Y.
    #[arg(long)]
    pub length: Option<f32>,

    /// Seed for both cloud and planet noise.
    #[arg(long)]
    pub seed: Option<i64>,

    /// Polar subdivisions.
    #[arg(long)]
    pub theta_steps: Option<u32>,

    /// Azimuthal samples per row.
    #[arg(long)]
    pub phi_steps: Option<u32>,

    /// Worker threads (0 = all CPUs).
    #[arg(long)]
    pub threads: Option<usize>,

    /// Write sampled vertices to this JSON file.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref kind) = args.kind {
            self.shape.kind = DeformationKind::from_name(kind);
        }
        if let Some(ref style) = args.style {
            self.shape.params.cloud.style = CloudStyle::from_name(style);
        }
        if let Some(r) = args.radius {
            self.shape.params.radius = r;
        }
        if let Some(i) = args.intensity {
            self.shape.params.intensity = i;
        }
        if let Some(l) = args.length {
            self.shape.params.length = l;
        }
        if let Some(seed) = args.seed {
            self.shape.params.cloud.seed = seed;
            self.shape.params.planet.seed = seed;
        }
        if let Some(steps) = args.theta_steps {
            self.sampler.theta_steps = steps;
        }
        if let Some(steps) = args.phi_steps {
            self.sampler.phi_steps = steps;
        }
        if let Some(threads) = args.threads {
            self.sampler.threads = threads;
        }
        if let Some(ref path) = args.output {
            self.sampler.output = Some(path.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            kind: Some("droplet-inverted".to_string()),
            intensity: Some(0.4),
            seed: Some(17),
            theta_steps: Some(8),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.shape.kind, DeformationKind::DropletInverted);
        assert_eq!(config.shape.params.intensity, 0.4);
        assert_eq!(config.shape.params.cloud.seed, 17);
        assert_eq!(config.shape.params.planet.seed, 17);
        assert_eq!(config.sampler.theta_steps, 8);
        // Non-overridden fields retain defaults
        assert_eq!(config.shape.params.radius, 1.0);
        assert_eq!(config.sampler.phi_steps, 128);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_unknown_names_fall_back() {
        let mut config = Config::default();
        config.shape.kind = DeformationKind::Egg;
        config.shape.params.cloud.style = CloudStyle::Worley;
        let args = CliArgs {
            kind: Some("moebius".to_string()),
            style: Some("stratus".to_string()),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.shape.kind, DeformationKind::None);
        assert_eq!(config.shape.params.cloud.style, CloudStyle::Gaussian);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::try_parse_from([
            "sculpt",
            "--kind",
            "planet",
            "--radius",
            "2.5",
            "--phi-steps",
            "32",
            "--output",
            "grid.json",
        ])
        .unwrap();
        assert_eq!(args.kind.as_deref(), Some("planet"));
        assert_eq!(args.radius, Some(2.5));
        assert_eq!(args.phi_steps, Some(32));
        assert_eq!(args.output, Some(PathBuf::from("grid.json")));
    }
}
