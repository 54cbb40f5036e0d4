//! Categorical text normalization.

use crate::error::Result;
use polars::prelude::*;
use tracing::debug;

/// Trim and lowercase the values of the given text columns. Values are
/// otherwise left as free text; no canonicalization dictionary is applied,
/// so distinct spellings stay distinct. Returns the number of cell values
/// actually changed.
pub(crate) fn normalize_columns(df: &mut DataFrame, columns: &[String]) -> Result<usize> {
    let mut changed = 0;

    for col_name in columns {
        let series = match df.column(col_name) {
            Ok(col) => col.as_materialized_series().clone(),
            Err(_) => continue,
        };
        if series.dtype() != &DataType::String {
            continue;
        }

        let str_chunked = series.str()?;
        let mut values = Vec::with_capacity(str_chunked.len());
        let mut column_changed = 0;
        for opt_val in str_chunked.into_iter() {
            match opt_val {
                Some(val) => {
                    let normalized = val.trim().to_lowercase();
                    if normalized != val {
                        column_changed += 1;
                    }
                    values.push(Some(normalized));
                }
                None => values.push(None),
            }
        }

        if column_changed > 0 {
            df.replace(col_name, Series::new(col_name.as_str().into(), values))?;
            debug!("Normalized {} values in '{}'", column_changed, col_name);
        }
        changed += column_changed;
    }

    Ok(changed)
}
