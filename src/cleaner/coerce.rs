//! Final type validation and coercion.

use crate::error::Result;
use polars::prelude::*;
use tracing::debug;

/// Coerce the designated numeric columns to Float64 and the categorical
/// columns to String. Numeric casting is non-strict: values that cannot be
/// parsed become missing rather than failing the run. Returns the number of
/// columns whose type changed.
pub(crate) fn coerce_types(
    df: &mut DataFrame,
    numeric_columns: &[String],
    categorical_columns: &[String],
) -> Result<usize> {
    let mut coerced = 0;

    for col_name in numeric_columns {
        let series = match df.column(col_name) {
            Ok(col) => col.as_materialized_series().clone(),
            Err(_) => continue,
        };
        if series.dtype() == &DataType::Float64 {
            continue;
        }
        let cast = series.cast(&DataType::Float64)?;
        df.replace(col_name, cast)?;
        debug!("Coerced '{}' to numeric", col_name);
        coerced += 1;
    }

    for col_name in categorical_columns {
        let series = match df.column(col_name) {
            Ok(col) => col.as_materialized_series().clone(),
            Err(_) => continue,
        };
        if series.dtype() == &DataType::String {
            continue;
        }
        let cast = series.cast(&DataType::String)?;
        df.replace(col_name, cast)?;
        debug!("Coerced '{}' to text", col_name);
        coerced += 1;
    }

    Ok(coerced)
}
