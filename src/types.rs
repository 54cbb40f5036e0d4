//! Shared types: quality metrics and per-step cleaning counters.
//!
//! The original dataset's cleaning process narrated its progress to stdout;
//! here each sub-step emits structured counters instead and the reporter
//! formats them at the end of the run.

use serde::{Deserialize, Serialize};

/// Missing-value metrics for a single column, as observed before cleaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnQuality {
    /// Column name as it appears in the source file.
    pub name: String,
    /// Polars dtype at load time, rendered as a string.
    pub dtype: String,
    /// Number of missing entries.
    pub missing_count: usize,
    /// Missing entries as a fraction of total rows (0.0 - 1.0).
    pub missing_fraction: f64,
}

/// Read-only quality assessment of the raw table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityAssessment {
    /// (rows, columns) of the raw table.
    pub shape: (usize, usize),
    /// Per-column missing-value metrics and inferred types.
    pub columns: Vec<ColumnQuality>,
    /// Number of exact-duplicate rows (first occurrence not counted).
    pub duplicate_rows: usize,
}

impl QualityAssessment {
    /// Columns that have at least one missing entry.
    pub fn columns_with_missing(&self) -> impl Iterator<Item = &ColumnQuality> {
        self.columns.iter().filter(|c| c.missing_count > 0)
    }

    /// Total missing entries across all columns.
    pub fn total_missing(&self) -> usize {
        self.columns.iter().map(|c| c.missing_count).sum()
    }
}

/// Outcome of IQR capping for one numeric column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlierTreatment {
    /// Column name (post-standardization).
    pub column: String,
    /// Lower cap, Q1 - 1.5 * IQR.
    pub lower_bound: f64,
    /// Upper cap, Q3 + 1.5 * IQR.
    pub upper_bound: f64,
    /// Number of values clipped to a bound.
    pub values_capped: usize,
}

/// Counters collected across the six cleaning sub-steps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleaningSummary {
    /// Exact-duplicate rows removed (first occurrence kept).
    pub duplicates_removed: usize,
    /// Missing income values filled with the median.
    pub income_values_imputed: usize,
    /// The median used for imputation, if any value was filled.
    pub income_median: Option<f64>,
    /// Column names actually changed by standardization.
    pub columns_renamed: usize,
    /// Enrollment-date values parsed into calendar dates.
    pub dates_parsed: usize,
    /// Categorical cell values changed by trim/lowercase normalization.
    pub categorical_values_normalized: usize,
    /// Per-column outlier capping results, in treatment order.
    pub outlier_treatments: Vec<OutlierTreatment>,
    /// Columns coerced to a different type in the final validation pass.
    pub columns_coerced: usize,
}

impl CleaningSummary {
    /// Total values clipped across all treated columns.
    pub fn total_values_capped(&self) -> usize {
        self.outlier_treatments
            .iter()
            .map(|t| t.values_capped)
            .sum()
    }

    /// True when a reapplication of the pipeline changed nothing.
    pub fn is_noop(&self) -> bool {
        self.duplicates_removed == 0
            && self.income_values_imputed == 0
            && self.columns_renamed == 0
            && self.categorical_values_normalized == 0
            && self.total_values_capped() == 0
    }
}

/// Final result of a pipeline run, returned to the caller after the output
/// files have been written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineOutcome {
    /// (rows, columns) of the raw table.
    pub original_shape: (usize, usize),
    /// (rows, columns) of the cleaned table.
    pub final_shape: (usize, usize),
    /// Quality assessment of the raw table.
    pub assessment: QualityAssessment,
    /// Per-step cleaning counters.
    pub summary: CleaningSummary,
    /// Missing entries remaining after cleaning.
    pub remaining_missing: usize,
    /// Duplicate rows remaining after cleaning.
    pub remaining_duplicates: usize,
    /// `(final_rows - remaining_missing - remaining_duplicates) / final_rows * 100`.
    pub data_quality_score: f64,
    /// Column names of the cleaned table, in order.
    pub final_columns: Vec<String>,
}
