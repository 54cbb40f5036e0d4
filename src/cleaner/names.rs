//! Column-name standardization.

use crate::error::{CleaningError, Result};
use polars::prelude::*;
use std::collections::HashMap;
use tracing::debug;

/// Standard form of a column name: trimmed, lowercased, spaces replaced
/// with underscores.
pub(crate) fn standardize_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Rename every column to its standard form. Two distinct source names
/// mapping to the same target is a schema error. Returns the number of
/// names actually changed.
pub(crate) fn standardize_columns(df: &mut DataFrame) -> Result<usize> {
    let old_names: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|s| s.to_string())
        .collect();

    let new_names: Vec<String> = old_names.iter().map(|n| standardize_name(n)).collect();

    // Frames cannot hold two columns with the same name, so a repeated
    // target always comes from distinct sources.
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for (source, target) in old_names.iter().zip(&new_names) {
        if let Some(previous) = seen.insert(target.as_str(), source.as_str()) {
            return Err(CleaningError::Schema(format!(
                "column names '{}' and '{}' both standardize to '{}'",
                previous, source, target
            )));
        }
    }

    let renamed = old_names
        .iter()
        .zip(&new_names)
        .filter(|(old, new)| old != new)
        .count();

    df.set_column_names(new_names)?;

    if renamed > 0 {
        debug!("Standardized {} column names", renamed);
    }
    Ok(renamed)
}
