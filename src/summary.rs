//! Run Summary
//!
//! Aggregate record produced after all rows parse: sample count, mean
//! fertility index, and the sample ids in input order.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Number;

use crate::sample::{round2, SoilSample};

/// Aggregate summary of one pipeline run
///
/// Field declaration order is the JSON output order.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub count: usize,
    pub avg_fertility: Number,
    pub samples: Vec<String>,
}

impl RunSummary {
    /// Aggregate parsed samples, preserving input order
    ///
    /// The average fertility is the arithmetic mean rounded to 2 decimals.
    /// With no samples it is the integer 0, which also keeps the
    /// serialized form an integer rather than 0.0.
    pub fn from_samples(samples: &[SoilSample]) -> Result<Self> {
        let avg_fertility = if samples.is_empty() {
            Number::from(0u32)
        } else {
            let total: f64 = samples.iter().map(|s| s.fertility_index).sum();
            let avg = round2(total / samples.len() as f64);
            Number::from_f64(avg).context("average fertility index is not finite")?
        };

        Ok(RunSummary {
            count: samples.len(),
            avg_fertility,
            samples: samples.iter().map(|s| s.id.clone()).collect(),
        })
    }
}
