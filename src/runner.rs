//! Run Driver
//!
//! Orchestrates one pipeline run: verify the input exists, create the
//! output directory, parse and persist each row in file order, then
//! aggregate and persist the summary.

use anyhow::Result;

use crate::config::RunConfig;
use crate::data::SampleTable;
use crate::error::SampleError;
use crate::sample::SoilSample;
use crate::summary::RunSummary;
use crate::writer::SampleWriter;

/// Execute one full pipeline run
///
/// Fails with [`SampleError::InputNotFound`] before any output is created
/// when the input CSV is missing. The first row that fails to parse (or
/// any I/O failure) aborts the run; files written for earlier rows are
/// left in place and no summary is produced.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    if !config.input_csv.exists() {
        return Err(SampleError::InputNotFound(config.input_csv.clone()).into());
    }

    let writer = SampleWriter::create(&config.out_dir)?;
    let table = SampleTable::load(&config.input_csv)?;

    let mut samples = Vec::with_capacity(table.len());
    for record in table.records()? {
        let sample = SoilSample::parse(&record)?;
        writer.write_sample(&sample)?;
        samples.push(sample);
    }

    let summary = RunSummary::from_samples(&samples)?;
    writer.write_summary(&summary)?;

    Ok(summary)
}
