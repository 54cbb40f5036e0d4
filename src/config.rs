//! Configuration for the cleaning pipeline.
//!
//! The pipeline has no CLI flags and no environment variables: paths and
//! column lists are fixed constants, collected in [`PipelineConfig`] so that
//! library callers (and tests) can point the same pipeline at other files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fixed input path: the raw marketing-campaign dataset, tab-separated.
pub const INPUT_PATH: &str = "marketing_campaign.csv";

/// Fixed output path for the cleaned dataset, comma-separated.
pub const OUTPUT_DATA_PATH: &str = "customer_personality_cleaned.csv";

/// Fixed output path for the plain-text summary report.
pub const OUTPUT_REPORT_PATH: &str = "data_cleaning_summary.txt";

/// Configuration for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Path of the tab-separated input file.
    pub input_path: PathBuf,

    /// Path the cleaned CSV is written to.
    pub output_data_path: PathBuf,

    /// Path the summary report is written to.
    pub output_report_path: PathBuf,

    /// Columns that must be present in the input (source names, before
    /// standardization). A missing column is a schema error.
    pub required_columns: Vec<String>,

    /// Numeric column imputed with its median (source name; imputation runs
    /// before name standardization).
    pub income_column: String,

    /// Enrollment-date column (post-standardization name; date parsing runs
    /// after name standardization).
    pub date_column: String,

    /// Source pattern of the enrollment date, chrono syntax.
    pub date_format: String,

    /// Categorical text columns normalized to trimmed lowercase
    /// (post-standardization names).
    pub categorical_columns: Vec<String>,

    /// Numeric columns subject to IQR outlier capping (post-standardization
    /// names, per the fixed list of the source dataset).
    pub outlier_columns: Vec<String>,

    /// Multiplier applied to the IQR when computing outlier bounds.
    pub iqr_multiplier: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(INPUT_PATH),
            output_data_path: PathBuf::from(OUTPUT_DATA_PATH),
            output_report_path: PathBuf::from(OUTPUT_REPORT_PATH),
            required_columns: vec![
                "Year_Birth".to_string(),
                "Income".to_string(),
                "Education".to_string(),
                "Marital_Status".to_string(),
                "Dt_Customer".to_string(),
                "Recency".to_string(),
                "MntWines".to_string(),
                "MntFruits".to_string(),
                "MntMeatProducts".to_string(),
                "MntFishProducts".to_string(),
                "MntSweetProducts".to_string(),
                "MntGoldProds".to_string(),
            ],
            income_column: "Income".to_string(),
            date_column: "dt_customer".to_string(),
            date_format: "%d-%m-%Y".to_string(),
            categorical_columns: vec!["education".to_string(), "marital_status".to_string()],
            outlier_columns: vec![
                "year_birth".to_string(),
                "income".to_string(),
                "recency".to_string(),
                "mntwines".to_string(),
                "mntfruits".to_string(),
                "mntmeatproducts".to_string(),
                "mntfishproducts".to_string(),
                "mntsweetproducts".to_string(),
                "mntgoldprods".to_string(),
            ],
            iqr_multiplier: 1.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_paths_are_fixed_constants() {
        let config = PipelineConfig::default();
        assert_eq!(config.input_path, PathBuf::from("marketing_campaign.csv"));
        assert_eq!(
            config.output_data_path,
            PathBuf::from("customer_personality_cleaned.csv")
        );
        assert_eq!(
            config.output_report_path,
            PathBuf::from("data_cleaning_summary.txt")
        );
    }

    #[test]
    fn test_default_outlier_columns_match_source_list() {
        let config = PipelineConfig::default();
        assert_eq!(config.outlier_columns.len(), 9);
        assert!(config.outlier_columns.contains(&"year_birth".to_string()));
        assert!(config.outlier_columns.contains(&"mntgoldprods".to_string()));
        assert_eq!(config.iqr_multiplier, 1.5);
    }
}
