//! Pipeline orchestration: load, assess, clean, report.

use crate::cleaner::Cleaner;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::loader;
use crate::quality::QualityAssessor;
use crate::reporting::{data_quality_score, ReportParams, Reporter};
use crate::types::PipelineOutcome;
use crate::utils::{duplicate_row_count, total_null_count};
use tracing::info;

/// The whole cleaning run, end to end. Stages execute strictly in order and
/// the first error aborts the run; partially written outputs are left as-is.
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Execute the pipeline: load the raw table, assess it, run the cleaning
    /// steps, write the cleaned CSV and summary report, and return the
    /// collected metrics.
    pub fn run(&self) -> Result<PipelineOutcome> {
        let mut df = loader::load_table(&self.config)?;
        let original_shape = df.shape();

        let assessment = QualityAssessor::assess(&df)?;

        let summary = Cleaner::new(&self.config).clean(&mut df)?;

        let final_shape = df.shape();
        let remaining_missing = total_null_count(&df);
        let remaining_duplicates = duplicate_row_count(&df)?;
        let score = data_quality_score(final_shape.0, remaining_missing, remaining_duplicates);
        let final_columns: Vec<String> = df
            .get_column_names()
            .into_iter()
            .map(|s| s.to_string())
            .collect();

        info!(
            "Final dataset: {} rows x {} columns, quality score {:.1}%",
            final_shape.0, final_shape.1, score
        );

        let reporter = Reporter::new(&self.config);
        reporter.write_dataset(&mut df)?;
        reporter.write_summary(&ReportParams {
            assessment: &assessment,
            summary: &summary,
            original_shape,
            final_shape,
            remaining_missing,
            remaining_duplicates,
            data_quality_score: score,
            final_columns: &final_columns,
        })?;

        Ok(PipelineOutcome {
            original_shape,
            final_shape,
            assessment,
            summary,
            remaining_missing,
            remaining_duplicates,
            data_quality_score: score,
            final_columns,
        })
    }
}
