//! Sample Output Writer
//!
//! Persists parsed samples and the run summary as pretty-printed JSON
//! files inside the output directory, announcing each written path on
//! stdout. Files are created or overwritten wholesale; each write is
//! flushed and closed before the next begins.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::sample::SoilSample;
use crate::summary::RunSummary;

/// Fixed name of the aggregate output file
pub const SUMMARY_FILE: &str = "summary.json";

/// Writes one JSON file per sample plus the run summary
pub struct SampleWriter {
    out_dir: PathBuf,
}

impl SampleWriter {
    /// Create the output directory (idempotent) and a writer over it
    pub fn create(out_dir: &Path) -> Result<Self> {
        fs::create_dir_all(out_dir)
            .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

        Ok(Self {
            out_dir: out_dir.to_path_buf(),
        })
    }

    /// Write `<id>.json` for one sample, returning the path written
    pub fn write_sample(&self, sample: &SoilSample) -> Result<PathBuf> {
        self.write_json(&format!("{}.json", sample.id), sample)
    }

    /// Write the fixed-name summary file, returning the path written
    pub fn write_summary(&self, summary: &RunSummary) -> Result<PathBuf> {
        self.write_json(SUMMARY_FILE, summary)
    }

    fn write_json<T: Serialize>(&self, file_name: &str, value: &T) -> Result<PathBuf> {
        let path = self.out_dir.join(file_name);
        let json = serde_json::to_string_pretty(value)
            .with_context(|| format!("Failed to serialize {}", file_name))?;

        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Wrote {}", path.display());

        Ok(path)
    }
}
