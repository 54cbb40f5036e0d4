//! Shared helpers used across the pipeline modules.

use polars::prelude::*;

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Fill null values in a numeric Series with a specific value.
///
/// The result is always Float64: the fill value may be fractional (a median
/// of an integer column) even when the source column is integral.
pub fn fill_numeric_nulls(series: &Series, fill_value: f64) -> PolarsResult<Series> {
    let mask = series.is_null();
    let len = series.len();
    let mut result_vec = Vec::with_capacity(len);

    for i in 0..len {
        if mask.get(i).unwrap_or(false) {
            result_vec.push(Some(fill_value));
        } else {
            let val = series.get(i)?;
            result_vec.push(Some(val.try_extract::<f64>()?));
        }
    }

    Ok(Series::new(series.name().clone(), result_vec))
}

/// Collect the non-null values of a numeric column as a sorted Float64 vec.
pub fn sorted_non_null_values(series: &Series) -> PolarsResult<Vec<f64>> {
    let float_series = series.cast(&DataType::Float64)?;
    let mut values: Vec<f64> = float_series.f64()?.into_iter().flatten().collect();
    values.sort_by(f64::total_cmp);
    Ok(values)
}

/// Total missing entries across all columns of a frame.
pub fn total_null_count(df: &DataFrame) -> usize {
    df.get_columns().iter().map(|col| col.null_count()).sum()
}

/// Number of exact-duplicate rows in a frame, first occurrence not counted.
pub fn duplicate_row_count(df: &DataFrame) -> PolarsResult<usize> {
    let unique = df.unique_stable(None, UniqueKeepStrategy::First, None)?;
    Ok(df.height() - unique.height())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_numeric_dtype() {
        assert!(is_numeric_dtype(&DataType::Int64));
        assert!(is_numeric_dtype(&DataType::Float64));
        assert!(!is_numeric_dtype(&DataType::String));
        assert!(!is_numeric_dtype(&DataType::Date));
    }

    #[test]
    fn test_fill_numeric_nulls() {
        let series = Series::new("test".into(), &[Some(1.0), None, Some(3.0)]);
        let filled = fill_numeric_nulls(&series, 2.0).unwrap();

        assert_eq!(filled.null_count(), 0);
        assert_eq!(filled.get(1).unwrap().try_extract::<f64>().unwrap(), 2.0);
        assert_eq!(filled.get(2).unwrap().try_extract::<f64>().unwrap(), 3.0);
    }

    #[test]
    fn test_sorted_non_null_values_sorts_and_drops_nulls() {
        let series = Series::new("test".into(), &[Some(3.0), None, Some(1.0), Some(2.0)]);
        let values = sorted_non_null_values(&series).unwrap();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_total_null_count() {
        let df = df![
            "a" => [Some(1.0), None, Some(3.0)],
            "b" => [Some("x"), Some("y"), None],
        ]
        .unwrap();
        assert_eq!(total_null_count(&df), 2);
    }

    #[test]
    fn test_duplicate_row_count() {
        let df = df![
            "a" => [1, 1, 2, 2, 2],
            "b" => ["x", "x", "y", "y", "z"],
        ]
        .unwrap();
        // (1,"x") appears twice, (2,"y") appears twice -> 2 duplicates
        assert_eq!(duplicate_row_count(&df).unwrap(), 2);
    }
}
