//! Soil Sample Records
//!
//! Converts one raw CSV row into a typed sample record: numeric coercion,
//! pH classification, and the derived fertility index.

use serde::{Deserialize, Serialize};

use crate::data::RawRecord;
use crate::error::SampleError;

/// pH classification of a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhStatus {
    Acidic,
    Neutral,
    Alkaline,
}

impl PhStatus {
    /// Classify a pH reading. The boundary values 6.5 and 7.5 are neutral.
    pub fn classify(ph: f64) -> Self {
        if ph < 6.5 {
            PhStatus::Acidic
        } else if ph > 7.5 {
            PhStatus::Alkaline
        } else {
            PhStatus::Neutral
        }
    }
}

/// Round to 2 decimal places. Halves round away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One parsed soil sample
///
/// Field declaration order is the JSON output order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilSample {
    pub id: String,
    pub ph: f64,
    pub ph_status: PhStatus,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub moisture: f64,
    pub fertility_index: f64,
}

impl SoilSample {
    /// Parse one raw row into a sample record
    ///
    /// Required fields: `id`, `ph`, `nitrogen`, `phosphorus`, `potassium`.
    /// `moisture` defaults to 0.0 when the column is absent; when the
    /// column exists its cell must parse, so an empty cell is an error.
    /// The fertility index is the mean of the three nutrient readings,
    /// rounded to 2 decimals.
    pub fn parse(record: &RawRecord) -> Result<Self, SampleError> {
        let id = required(record, "id")?.to_string();
        let ph = required_f64(record, "ph")?;
        let nitrogen = required_f64(record, "nitrogen")?;
        let phosphorus = required_f64(record, "phosphorus")?;
        let potassium = required_f64(record, "potassium")?;
        let moisture = match record.get("moisture") {
            Some(value) => parse_f64(record.row, "moisture", value)?,
            None => 0.0,
        };

        Ok(SoilSample {
            id,
            ph,
            ph_status: PhStatus::classify(ph),
            nitrogen,
            phosphorus,
            potassium,
            moisture,
            fertility_index: round2((nitrogen + phosphorus + potassium) / 3.0),
        })
    }
}

fn required<'a>(record: &'a RawRecord, field: &str) -> Result<&'a str, SampleError> {
    record.get(field).ok_or_else(|| SampleError::MissingField {
        row: record.row,
        field: field.to_string(),
    })
}

fn required_f64(record: &RawRecord, field: &str) -> Result<f64, SampleError> {
    parse_f64(record.row, field, required(record, field)?)
}

fn parse_f64(row: usize, field: &str, value: &str) -> Result<f64, SampleError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| SampleError::MalformedField {
            row,
            field: field.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn record(pairs: &[(&str, &str)]) -> RawRecord {
        let mut record = RawRecord::new(1);
        for (field, value) in pairs {
            record.fields.insert(field.to_string(), value.to_string());
        }
        record
    }

    fn full_record() -> RawRecord {
        record(&[
            ("id", "S1"),
            ("ph", "6.0"),
            ("nitrogen", "10"),
            ("phosphorus", "20"),
            ("potassium", "30"),
            ("moisture", "15"),
        ])
    }

    #[test]
    fn test_worked_example() {
        let sample = SoilSample::parse(&full_record()).unwrap();

        assert_eq!(sample.id, "S1");
        assert_relative_eq!(sample.ph, 6.0);
        assert_eq!(sample.ph_status, PhStatus::Acidic);
        assert_relative_eq!(sample.nitrogen, 10.0);
        assert_relative_eq!(sample.phosphorus, 20.0);
        assert_relative_eq!(sample.potassium, 30.0);
        assert_relative_eq!(sample.moisture, 15.0);
        assert_relative_eq!(sample.fertility_index, 20.0);
    }

    #[test]
    fn test_ph_boundaries() {
        assert_eq!(PhStatus::classify(6.49), PhStatus::Acidic);
        assert_eq!(PhStatus::classify(6.5), PhStatus::Neutral);
        assert_eq!(PhStatus::classify(7.0), PhStatus::Neutral);
        assert_eq!(PhStatus::classify(7.5), PhStatus::Neutral);
        assert_eq!(PhStatus::classify(7.51), PhStatus::Alkaline);
    }

    #[test]
    fn test_ph_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PhStatus::Alkaline).unwrap(),
            "\"alkaline\""
        );
    }

    #[test]
    fn test_fertility_index_rounds_to_two_decimals() {
        let mut raw = full_record();
        raw.fields.insert("nitrogen".to_string(), "10".to_string());
        raw.fields.insert("phosphorus".to_string(), "10".to_string());
        raw.fields.insert("potassium".to_string(), "11".to_string());

        let sample = SoilSample::parse(&raw).unwrap();
        assert_relative_eq!(sample.fertility_index, 10.33);
    }

    #[test]
    fn test_round2_halves_away_from_zero() {
        assert_relative_eq!(round2(0.125), 0.13);
        assert_relative_eq!(round2(-0.125), -0.13);
        assert_relative_eq!(round2(20.0), 20.0);
    }

    #[test]
    fn test_missing_moisture_defaults_to_zero() {
        let mut raw = full_record();
        raw.fields.remove("moisture");

        let sample = SoilSample::parse(&raw).unwrap();
        assert_relative_eq!(sample.moisture, 0.0);
    }

    #[test]
    fn test_empty_moisture_cell_is_malformed() {
        let mut raw = full_record();
        raw.fields.insert("moisture".to_string(), String::new());

        let err = SoilSample::parse(&raw).unwrap_err();
        assert!(matches!(
            err,
            SampleError::MalformedField { ref field, .. } if field == "moisture"
        ));
    }

    #[test]
    fn test_missing_required_field() {
        let mut raw = full_record();
        raw.fields.remove("ph");

        let err = SoilSample::parse(&raw).unwrap_err();
        assert!(matches!(
            err,
            SampleError::MissingField { row: 1, ref field } if field == "ph"
        ));
    }

    #[test]
    fn test_malformed_number() {
        let mut raw = full_record();
        raw.fields
            .insert("nitrogen".to_string(), "plenty".to_string());

        let err = SoilSample::parse(&raw).unwrap_err();
        assert!(matches!(
            err,
            SampleError::MalformedField { ref field, ref value, .. }
                if field == "nitrogen" && value == "plenty"
        ));
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        let mut raw = full_record();
        raw.fields.insert("ph".to_string(), " 7.5 ".to_string());

        let sample = SoilSample::parse(&raw).unwrap();
        assert_relative_eq!(sample.ph, 7.5);
        assert_eq!(sample.ph_status, PhStatus::Neutral);
    }
}
