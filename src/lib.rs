//! Batch cleaning pipeline for the Customer Personality Analysis dataset.
//!
//! One linear run: load the tab-separated source file, assess its quality,
//! apply a fixed sequence of cleaning steps, then write a cleaned CSV and a
//! plain-text summary report.
//!
//! ```no_run
//! use customer_cleaner::{Pipeline, PipelineConfig};
//!
//! let outcome = Pipeline::new(PipelineConfig::default()).run()?;
//! println!("quality score: {:.1}%", outcome.data_quality_score);
//! # Ok::<(), customer_cleaner::CleaningError>(())
//! ```

pub mod cleaner;
pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod quality;
pub mod reporting;
pub mod types;
pub mod utils;

pub use cleaner::Cleaner;
pub use config::PipelineConfig;
pub use error::{CleaningError, Result};
pub use pipeline::Pipeline;
pub use quality::QualityAssessor;
pub use reporting::Reporter;
pub use types::{CleaningSummary, PipelineOutcome, QualityAssessment};
