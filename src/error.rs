//! Error taxonomy for the sample pipeline
//!
//! Two failure classes: the input CSV is missing (detected before any
//! output is created, mapped to exit code 2 by the binary), and a data row
//! that cannot be converted (aborts the whole run on first occurrence).

use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the sample pipeline
#[derive(Debug, Error)]
pub enum SampleError {
    /// The input CSV does not exist. Raised before any row processing
    /// and before the output directory is created.
    #[error("input CSV not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// A data row lacks one of the required columns.
    #[error("row {row}: required field '{field}' is missing")]
    MissingField { row: usize, field: String },

    /// A numeric cell could not be parsed as a float.
    #[error("row {row}: field '{field}' has non-numeric value '{value}'")]
    MalformedField {
        row: usize,
        field: String,
        value: String,
    },
}

impl SampleError {
    /// True for the missing-input case the binary maps to exit code 2
    pub fn is_input_not_found(&self) -> bool {
        matches!(self, SampleError::InputNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SampleError::MissingField {
            row: 3,
            field: "ph".to_string(),
        };
        assert_eq!(err.to_string(), "row 3: required field 'ph' is missing");

        let err = SampleError::MalformedField {
            row: 1,
            field: "nitrogen".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "row 1: field 'nitrogen' has non-numeric value 'abc'"
        );
    }

    #[test]
    fn test_input_not_found_predicate() {
        let err = SampleError::InputNotFound(PathBuf::from("samples.csv"));
        assert!(err.is_input_not_found());
        assert!(err.to_string().contains("samples.csv"));

        let err = SampleError::MissingField {
            row: 1,
            field: "id".to_string(),
        };
        assert!(!err.is_input_not_found());
    }
}
