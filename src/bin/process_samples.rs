//! Process Soil Samples
//!
//! Reads samples.csv from the working directory and writes one JSON
//! record per sample plus summary.json into the output directory.
//! Run with: cargo run --bin process_samples
//!
//! Exit codes: 0 on success, 2 when the input CSV is missing, 1 on any
//! other failure (first malformed row, I/O errors).

use std::process::ExitCode;

use soil_processor_rust::{run, RunConfig, SampleError};

fn main() -> ExitCode {
    let config = RunConfig::default();

    println!("Soil Sample Processor");
    println!("{}", "=".repeat(60));
    println!("  Input:  {}", config.input_csv.display());
    println!("  Output: {}", config.out_dir.display());
    println!();

    match run(&config) {
        Ok(summary) => {
            println!();
            println!("Processed {} samples.", summary.count);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err:#}");
            match err.downcast_ref::<SampleError>() {
                Some(e) if e.is_input_not_found() => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}
