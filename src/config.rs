//! Run Configuration
//!
//! Input and output locations for a pipeline run. Paths are explicit
//! parameters rather than module constants so tests can point a run at
//! scratch directories.

use std::path::PathBuf;

/// Locations for one pipeline run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Input CSV of raw soil samples
    pub input_csv: PathBuf,

    /// Directory receiving one JSON file per sample plus summary.json
    pub out_dir: PathBuf,
}

impl RunConfig {
    pub fn new(input_csv: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_csv: input_csv.into(),
            out_dir: out_dir.into(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new("samples.csv", "output")
    }
}
