//! Data cleaning: six ordered sub-steps plus a final type-coercion pass.
//!
//! The steps run in a fixed order and each is idempotent when reapplied to
//! already-clean data:
//! 1. Deduplication
//! 2. Median imputation of the income column
//! 3. Column-name standardization
//! 4. Enrollment-date parsing
//! 5. Categorical text normalization
//! 6. IQR outlier capping
//!
//! Outlier treatment runs strictly after name standardization and matches
//! columns by their standardized names.

mod categorical;
mod coerce;
mod dates;
mod dedup;
mod impute;
mod names;
mod outliers;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::types::CleaningSummary;
use polars::prelude::*;
use tracing::info;

/// Runs the six cleaning sub-steps over a table, in place, collecting
/// per-step counters.
pub struct Cleaner<'a> {
    config: &'a PipelineConfig,
}

impl<'a> Cleaner<'a> {
    pub fn new(config: &'a PipelineConfig) -> Self {
        Self { config }
    }

    /// Apply all cleaning steps to the table in order. Rows are only ever
    /// removed (duplicates) or mutated; none are added.
    pub fn clean(&self, df: &mut DataFrame) -> Result<CleaningSummary> {
        let mut summary = CleaningSummary::default();

        info!("Step 1: removing duplicate rows");
        summary.duplicates_removed = dedup::remove_duplicates(df)?;

        info!("Step 2: imputing missing income values");
        let (imputed, median) = impute::impute_median(df, &self.config.income_column)?;
        summary.income_values_imputed = imputed;
        summary.income_median = median;

        info!("Step 3: standardizing column names");
        summary.columns_renamed = names::standardize_columns(df)?;

        info!("Step 4: parsing enrollment dates");
        summary.dates_parsed =
            dates::parse_dates(df, &self.config.date_column, &self.config.date_format)?;

        info!("Step 5: normalizing categorical text");
        summary.categorical_values_normalized =
            categorical::normalize_columns(df, &self.config.categorical_columns)?;

        info!("Step 6: capping outliers");
        summary.outlier_treatments = outliers::cap_outliers(
            df,
            &self.config.outlier_columns,
            self.config.iqr_multiplier,
        )?;

        info!("Validating column types");
        summary.columns_coerced = coerce::coerce_types(
            df,
            &self.config.outlier_columns,
            &self.config.categorical_columns,
        )?;

        info!(
            "Cleaning complete: {} duplicates removed, {} values imputed, {} outliers capped",
            summary.duplicates_removed,
            summary.income_values_imputed,
            summary.total_values_capped()
        );
        Ok(summary)
    }
}
