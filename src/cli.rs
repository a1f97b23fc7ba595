//! Command-line interface components.

use crate::config::BuildConfig;
use crate::constants::{DEFAULT_CSV_PATH, DEFAULT_OUTPUT_PATH, MIN_KEY_LENGTH};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "build-bin-data")]
#[command(about = "Convert a BIN list CSV into a compact JSON lookup table")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to the BIN list CSV
    #[arg(value_name = "CSV_PATH", default_value = DEFAULT_CSV_PATH)]
    pub csv_path: PathBuf,

    /// Destination JSON file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Minimum key length; shorter keys are skipped
    #[arg(long, default_value_t = MIN_KEY_LENGTH)]
    pub min_key_length: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log warnings and hide the progress bar
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }

    /// Build the pipeline configuration from the parsed arguments
    pub fn to_config(&self) -> BuildConfig {
        let config = BuildConfig::default()
            .with_csv_path(&self.csv_path)
            .with_output_path(&self.output)
            .with_min_key_length(self.min_key_length);

        if self.quiet {
            config.without_progress()
        } else {
            config
        }
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bin_data_builder={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}
