//! Median imputation for the income column.

use crate::cleaner::names::standardize_name;
use crate::error::{CleaningError, Result};
use crate::utils::fill_numeric_nulls;
use polars::prelude::*;
use tracing::debug;

/// Fill missing income values with the median of the non-missing values.
///
/// The median is computed once, on the column state at the time of
/// imputation, before any value is filled. Returns the number of values
/// filled and the median used.
///
/// The column is looked up by its source name, falling back to its
/// standardized form so that reapplying the pipeline to already-cleaned
/// data stays well-defined.
pub(crate) fn impute_median(df: &mut DataFrame, column: &str) -> Result<(usize, Option<f64>)> {
    let col_name = resolve_column(df, column)?;

    let (missing, median, series) = {
        let col = df.column(&col_name)?;
        let series = col.as_materialized_series();
        (series.null_count(), series.median(), series.clone())
    };

    if missing == 0 {
        debug!("No missing values in '{}'", col_name);
        return Ok((0, None));
    }

    // All-null column: there is no median to fill with, leave it alone.
    let Some(median) = median else {
        debug!("Column '{}' has no non-missing values to take a median of", col_name);
        return Ok((0, None));
    };

    let filled = fill_numeric_nulls(&series, median)?;
    df.replace(&col_name, filled)?;

    debug!(
        "Filled {} missing '{}' values with median: {:.2}",
        missing, col_name, median
    );
    Ok((missing, Some(median)))
}

/// Look up a column by its source name or its standardized form.
fn resolve_column(df: &DataFrame, column: &str) -> Result<String> {
    let names: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|s| s.to_string())
        .collect();

    if names.iter().any(|n| n == column) {
        return Ok(column.to_string());
    }
    let standardized = standardize_name(column);
    if names.iter().any(|n| n == &standardized) {
        return Ok(standardized);
    }
    Err(CleaningError::Schema(format!(
        "expected column '{}' not found in table",
        column
    )))
}
