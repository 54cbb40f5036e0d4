//! Read-only data-quality assessment of the raw table.

mod assessor;

pub use assessor::QualityAssessor;
