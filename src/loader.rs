//! Loads the tab-separated input file into a DataFrame.

use crate::config::PipelineConfig;
use crate::error::{CleaningError, Result};
use polars::io::csv::read::{CsvParseOptions, CsvReadOptions};
use polars::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Read the tab-separated input file into a DataFrame and validate that the
/// expected column set is present.
///
/// A missing or unreadable file, or a row that does not match the header
/// shape, fails with [`CleaningError::Load`]. An absent expected column
/// fails with [`CleaningError::Schema`].
pub fn load_table(config: &PipelineConfig) -> Result<DataFrame> {
    let path = &config.input_path;
    if !path.exists() {
        return Err(CleaningError::Load {
            path: path.clone(),
            reason: "file not found".to_string(),
        });
    }

    info!("Loading raw dataset from {}", path.display());
    let df = read_tsv(path)?;
    debug!("Loaded shape: {:?}", df.shape());

    verify_schema(&df, &config.required_columns)?;

    Ok(df)
}

fn read_tsv(path: &Path) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .with_parse_options(CsvParseOptions::default().with_separator(b'\t'))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| CleaningError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?
        .finish()
        .map_err(|e| CleaningError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Check that every required column is present, under its source name.
fn verify_schema(df: &DataFrame, required: &[String]) -> Result<()> {
    let present: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|s| s.to_string())
        .collect();

    for col in required {
        if !present.contains(col) {
            return Err(CleaningError::Schema(format!(
                "expected column '{}' not found in input",
                col
            )));
        }
    }
    Ok(())
}
