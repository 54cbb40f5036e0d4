//! IQR outlier detection and capping.

use crate::error::Result;
use crate::types::OutlierTreatment;
use crate::utils::sorted_non_null_values;
use polars::prelude::*;
use tracing::debug;

/// Cap outliers in the designated numeric columns.
///
/// For each column, Q1 and Q3 are estimated with linear interpolation on the
/// column's current non-null values, bounds are `[Q1 - k*IQR, Q3 + k*IQR]`,
/// and any value outside the bounds is clipped to the nearest bound. Values
/// are never removed. Quantiles are computed once per column, before any
/// clipping. A zero-IQR column clips everything to the single value, which
/// is valid, not an error.
pub(crate) fn cap_outliers(
    df: &mut DataFrame,
    columns: &[String],
    iqr_multiplier: f64,
) -> Result<Vec<OutlierTreatment>> {
    let mut treatments = Vec::with_capacity(columns.len());

    for col_name in columns {
        let series = match df.column(col_name) {
            Ok(col) => col.as_materialized_series().clone(),
            Err(_) => continue,
        };

        let values = sorted_non_null_values(&series)?;
        if values.is_empty() {
            continue;
        }

        let q1 = quantile_linear(&values, 0.25);
        let q3 = quantile_linear(&values, 0.75);
        let iqr = q3 - q1;
        let lower = q1 - iqr_multiplier * iqr;
        let upper = q3 + iqr_multiplier * iqr;

        let float_series = series.cast(&DataType::Float64)?;
        let f64_chunked = float_series.f64()?;
        let values_capped = f64_chunked
            .into_iter()
            .filter(|v| v.map(|x| x < lower || x > upper).unwrap_or(false))
            .count();

        if values_capped > 0 {
            let capped = f64_chunked.apply(|v| v.map(|x| x.clamp(lower, upper)));
            df.replace(col_name, capped.into_series())?;
            debug!(
                "Capped {} outliers in '{}' (range: {:.2} to {:.2})",
                values_capped, col_name, lower, upper
            );
        }

        treatments.push(OutlierTreatment {
            column: col_name.clone(),
            lower_bound: lower,
            upper_bound: upper,
            values_capped,
        });
    }

    Ok(treatments)
}

/// Quantile of a sorted, non-empty slice by linear interpolation between
/// the two nearest order statistics.
fn quantile_linear(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let below = position.floor() as usize;
    let above = position.ceil() as usize;
    let weight = position - below as f64;
    sorted[below] + (sorted[above] - sorted[below]) * weight
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_quantile_linear_interpolates() {
        let values = [5.0, 6.0, 7.0, 8.0, 9.0, 1000.0];
        assert_eq!(quantile_linear(&values, 0.25), 6.25);
        assert_eq!(quantile_linear(&values, 0.75), 8.75);
        assert_eq!(quantile_linear(&values, 0.0), 5.0);
        assert_eq!(quantile_linear(&values, 1.0), 1000.0);
    }

    #[test]
    fn test_quantile_linear_single_value() {
        assert_eq!(quantile_linear(&[42.0], 0.25), 42.0);
        assert_eq!(quantile_linear(&[42.0], 0.75), 42.0);
    }

    #[test]
    fn test_caps_high_outlier_to_upper_bound() {
        let mut df = df![
            "spend" => [5.0, 6.0, 7.0, 8.0, 9.0, 1000.0],
        ]
        .unwrap();

        let treatments = cap_outliers(&mut df, &cols(&["spend"]), 1.5).unwrap();

        assert_eq!(treatments.len(), 1);
        let t = &treatments[0];
        // Q1=6.25, Q3=8.75, IQR=2.5 -> bounds [2.5, 12.5]
        assert_eq!(t.lower_bound, 2.5);
        assert_eq!(t.upper_bound, 12.5);
        assert_eq!(t.values_capped, 1);

        let col = df.column("spend").unwrap();
        assert_eq!(col.get(5).unwrap().try_extract::<f64>().unwrap(), 12.5);
        // In-range values untouched
        assert_eq!(col.get(0).unwrap().try_extract::<f64>().unwrap(), 5.0);
    }

    #[test]
    fn test_no_value_outside_bounds_after_capping() {
        let mut df = df![
            "v" => [-500.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 900.0],
        ]
        .unwrap();

        let treatments = cap_outliers(&mut df, &cols(&["v"]), 1.5).unwrap();
        let t = &treatments[0];

        let col = df.column("v").unwrap().f64().unwrap();
        for v in col.into_iter().flatten() {
            assert!(v >= t.lower_bound && v <= t.upper_bound);
        }
        assert_eq!(t.values_capped, 2);
    }

    #[test]
    fn test_zero_iqr_clips_to_single_value() {
        let mut df = df![
            "v" => [5.0, 5.0, 5.0, 5.0, 7.0],
        ]
        .unwrap();

        let treatments = cap_outliers(&mut df, &cols(&["v"]), 1.5).unwrap();
        let t = &treatments[0];
        assert_eq!(t.lower_bound, 5.0);
        assert_eq!(t.upper_bound, 5.0);
        assert_eq!(t.values_capped, 1);

        let col = df.column("v").unwrap();
        assert_eq!(col.get(4).unwrap().try_extract::<f64>().unwrap(), 5.0);
    }

    #[test]
    fn test_nulls_preserved_not_capped() {
        let mut df = df![
            "v" => [Some(1.0), Some(2.0), None, Some(3.0), Some(4.0), Some(100.0)],
        ]
        .unwrap();

        cap_outliers(&mut df, &cols(&["v"]), 1.5).unwrap();
        assert_eq!(df.column("v").unwrap().null_count(), 1);
    }

    #[test]
    fn test_integer_column_is_capped() {
        let mut df = df![
            "recency" => [5i64, 6, 7, 8, 9, 1000],
        ]
        .unwrap();

        let treatments = cap_outliers(&mut df, &cols(&["recency"]), 1.5).unwrap();
        assert_eq!(treatments[0].values_capped, 1);

        let col = df.column("recency").unwrap();
        assert_eq!(col.dtype(), &DataType::Float64);
        assert_eq!(col.get(5).unwrap().try_extract::<f64>().unwrap(), 12.5);
    }

    #[test]
    fn test_idempotent_on_capped_data() {
        let mut df = df![
            "v" => [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0],
        ]
        .unwrap();

        let first = cap_outliers(&mut df, &cols(&["v"]), 1.5).unwrap();
        assert!(first[0].values_capped > 0);

        let second = cap_outliers(&mut df, &cols(&["v"]), 1.5).unwrap();
        assert_eq!(second[0].values_capped, 0);
    }

    #[test]
    fn test_missing_column_skipped() {
        let mut df = df!["other" => [1.0]].unwrap();
        let treatments = cap_outliers(&mut df, &cols(&["income"]), 1.5).unwrap();
        assert!(treatments.is_empty());
    }
}
