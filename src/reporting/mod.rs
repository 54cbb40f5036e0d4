//! Output generation: the cleaned CSV and the plain-text summary report.

mod generator;

pub use generator::{data_quality_score, ReportParams, Reporter};
