//! Computes missing-value counts, duplicate counts, and column types.
//!
//! Pure and read-only: the assessor never mutates the table. Its output is
//! consumed only by the reporter.

use crate::error::Result;
use crate::types::{ColumnQuality, QualityAssessment};
use crate::utils::duplicate_row_count;
use polars::prelude::*;
use tracing::info;

pub struct QualityAssessor;

impl QualityAssessor {
    /// Assess the raw table: per-column missing counts and fractions, total
    /// duplicate-row count, per-column dtypes.
    pub fn assess(df: &DataFrame) -> Result<QualityAssessment> {
        let total_rows = df.height();

        let columns: Vec<ColumnQuality> = df
            .get_columns()
            .iter()
            .map(|col| {
                let missing_count = col.null_count();
                let missing_fraction = if total_rows == 0 {
                    0.0
                } else {
                    missing_count as f64 / total_rows as f64
                };
                ColumnQuality {
                    name: col.name().to_string(),
                    dtype: col.dtype().to_string(),
                    missing_count,
                    missing_fraction,
                }
            })
            .collect();

        let duplicate_rows = duplicate_row_count(df)?;

        let assessment = QualityAssessment {
            shape: df.shape(),
            columns,
            duplicate_rows,
        };

        Self::log_assessment(&assessment);
        Ok(assessment)
    }

    fn log_assessment(assessment: &QualityAssessment) {
        info!(
            "Initial quality assessment: {} rows x {} columns",
            assessment.shape.0, assessment.shape.1
        );
        for col in assessment.columns_with_missing() {
            info!(
                "Missing values in '{}': {} ({:.1}%)",
                col.name,
                col.missing_count,
                col.missing_fraction * 100.0
            );
        }
        info!("Duplicate rows found: {}", assessment.duplicate_rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_assess_counts_missing_per_column() {
        let df = df![
            "Income" => [Some(50000.0), None, Some(60000.0), None],
            "Education" => [Some("PhD"), Some("Basic"), Some("PhD"), Some("Basic")],
        ]
        .unwrap();

        let assessment = QualityAssessor::assess(&df).unwrap();

        assert_eq!(assessment.shape, (4, 2));
        let income = &assessment.columns[0];
        assert_eq!(income.name, "Income");
        assert_eq!(income.missing_count, 2);
        assert_eq!(income.missing_fraction, 0.5);
        assert_eq!(assessment.columns[1].missing_count, 0);
    }

    #[test]
    fn test_assess_counts_duplicates() {
        let df = df![
            "a" => [1, 2, 2, 3],
            "b" => ["x", "y", "y", "z"],
        ]
        .unwrap();

        let assessment = QualityAssessor::assess(&df).unwrap();
        assert_eq!(assessment.duplicate_rows, 1);
    }

    #[test]
    fn test_assess_is_read_only() {
        let df = df![
            "a" => [Some(1.0), None],
        ]
        .unwrap();
        let before = df.clone();

        QualityAssessor::assess(&df).unwrap();
        assert!(df.equals_missing(&before));
    }

    #[test]
    fn test_assess_reports_dtypes() {
        let df = df![
            "n" => [1i64, 2, 3],
            "s" => ["a", "b", "c"],
        ]
        .unwrap();

        let assessment = QualityAssessor::assess(&df).unwrap();
        assert_eq!(assessment.columns[0].dtype, "i64");
        assert_eq!(assessment.columns[1].dtype, "str");
    }
}
