use anyhow::Context;
use bin_data_builder::BinDataError;
use bin_data_builder::cli::{Args, setup_logging};
use bin_data_builder::constants::columns;
use bin_data_builder::models::BuildStats;
use bin_data_builder::processor::{BinDataProcessor, print_summary};
use clap::Parser;
use std::process;

fn main() {
    let args = Args::parse();
    setup_logging(&args);

    match run(&args) {
        Ok(stats) => {
            print_summary(&stats);
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            let cause = error.downcast_ref::<BinDataError>();
            if cause.is_some_and(BinDataError::is_schema_error) {
                eprintln!("{}", schema_hint());
            }
            process::exit(cause.map_or(1, BinDataError::exit_code));
        }
    }
}

/// Remind the user which header line the CSV must start with
fn schema_hint() -> String {
    format!(
        "Expected a header line naming at least the {} column, e.g. {}",
        columns::BIN,
        [
            columns::BIN,
            columns::BRAND,
            columns::TYPE,
            columns::CATEGORY,
            columns::ISSUER,
            columns::ISO_CODE_2,
            columns::COUNTRY_NAME,
        ]
        .join(",")
    )
}

fn run(args: &Args) -> anyhow::Result<BuildStats> {
    let processor = BinDataProcessor::new(args.to_config())
        .with_context(|| format!("Cannot start build from {}", args.csv_path.display()))?;

    let stats = processor
        .process()
        .with_context(|| format!("Build of {} failed", args.output.display()))?;

    Ok(stats)
}
