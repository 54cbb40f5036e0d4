//! Exact-duplicate row removal.

use crate::error::Result;
use polars::prelude::*;
use tracing::debug;

/// Remove rows that are exact duplicates of an earlier row, keeping the
/// first occurrence and preserving the order of survivors. Returns the
/// number of rows removed.
pub(crate) fn remove_duplicates(df: &mut DataFrame) -> Result<usize> {
    let before = df.height();
    *df = df.unique_stable(None, UniqueKeepStrategy::First, None)?;
    let removed = before - df.height();

    if removed > 0 {
        debug!("Removed {} duplicate rows", removed);
    } else {
        debug!("No duplicate rows found");
    }
    Ok(removed)
}
