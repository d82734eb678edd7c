//! Configuration for the sculpt tools.
//!
//! Settings persist to disk as `config.ron`, can be overridden from the
//! command line via clap, and tolerate missing or unknown fields so files
//! survive version changes.

mod cli;
mod config;
mod error;
mod export;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, SamplerConfig, ShapeConfig};
pub use error::ConfigError;
pub use export::export_json;
