//! Enrollment-date parsing.

use crate::error::{CleaningError, Result};
use chrono::NaiveDate;
use polars::prelude::*;
use tracing::debug;

/// Parse the enrollment-date column from its fixed day-month-year source
/// pattern into a calendar date column. Any value that does not match the
/// pattern (missing values included) fails the run, naming the row and the
/// raw value. Returns the number of values parsed.
///
/// Already-parsed columns (dtype `Date`) are left untouched.
pub(crate) fn parse_dates(df: &mut DataFrame, column: &str, format: &str) -> Result<usize> {
    let series = match df.column(column) {
        Ok(col) => col.as_materialized_series().clone(),
        Err(_) => {
            return Err(CleaningError::Schema(format!(
                "expected column '{}' not found in table",
                column
            )));
        }
    };

    if series.dtype() == &DataType::Date {
        debug!("Column '{}' already holds calendar dates", column);
        return Ok(0);
    }

    let str_series = series.cast(&DataType::String)?;
    let str_chunked = str_series.str()?;

    let epoch = NaiveDate::default();
    let mut days = Vec::with_capacity(str_chunked.len());
    for (row, opt_val) in str_chunked.into_iter().enumerate() {
        let raw = opt_val.ok_or_else(|| CleaningError::DateParse {
            row,
            value: "<missing>".to_string(),
        })?;
        let date = NaiveDate::parse_from_str(raw.trim(), format).map_err(|_| {
            CleaningError::DateParse {
                row,
                value: raw.to_string(),
            }
        })?;
        days.push((date - epoch).num_days() as i32);
    }

    let parsed = Int32Chunked::from_vec(column.into(), days)
        .into_date()
        .into_series();
    let count = parsed.len();
    df.replace(column, parsed)?;

    debug!("Parsed {} enrollment dates in '{}'", count, column);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FORMAT: &str = "%d-%m-%Y";

    #[test]
    fn test_parses_day_month_year() {
        let mut df = df![
            "dt_customer" => ["04-09-2012", "08-03-2014"],
        ]
        .unwrap();

        let parsed = parse_dates(&mut df, "dt_customer", FORMAT).unwrap();
        assert_eq!(parsed, 2);

        let col = df.column("dt_customer").unwrap();
        assert_eq!(col.dtype(), &DataType::Date);

        let expected =
            (NaiveDate::from_ymd_opt(2012, 9, 4).unwrap() - NaiveDate::default()).num_days() as i32;
        assert_eq!(col.get(0).unwrap(), AnyValue::Date(expected));
    }

    #[test]
    fn test_round_trips_to_source_pattern() {
        let raw = ["04-09-2012", "21-01-2013", "31-12-1999"];
        let mut df = df!["dt_customer" => raw].unwrap();

        parse_dates(&mut df, "dt_customer", FORMAT).unwrap();

        let col = df.column("dt_customer").unwrap();
        for (i, original) in raw.iter().enumerate() {
            let AnyValue::Date(days) = col.get(i).unwrap() else {
                panic!("expected a date value");
            };
            let date = NaiveDate::default() + chrono::Duration::days(days as i64);
            assert_eq!(&date.format(FORMAT).to_string(), original);
        }
    }

    #[test]
    fn test_invalid_value_names_row_and_value() {
        let mut df = df![
            "dt_customer" => ["04-09-2012", "2012/09/04"],
        ]
        .unwrap();

        let err = parse_dates(&mut df, "dt_customer", FORMAT).unwrap_err();
        match err {
            CleaningError::DateParse { row, value } => {
                assert_eq!(row, 1);
                assert_eq!(value, "2012/09/04");
            }
            other => panic!("expected DateParse, got {:?}", other),
        }
    }

    #[test]
    fn test_impossible_calendar_date_fails() {
        let mut df = df![
            "dt_customer" => ["31-02-2012"],
        ]
        .unwrap();

        let err = parse_dates(&mut df, "dt_customer", FORMAT).unwrap_err();
        assert_eq!(err.error_code(), "DATE_PARSE_ERROR");
    }

    #[test]
    fn test_missing_value_fails() {
        let mut df = df![
            "dt_customer" => [Some("04-09-2012"), None],
        ]
        .unwrap();

        let err = parse_dates(&mut df, "dt_customer", FORMAT).unwrap_err();
        assert_eq!(err.error_code(), "DATE_PARSE_ERROR");
        assert!(err.to_string().contains("<missing>"));
    }

    #[test]
    fn test_idempotent_on_parsed_column() {
        let mut df = df![
            "dt_customer" => ["04-09-2012"],
        ]
        .unwrap();

        parse_dates(&mut df, "dt_customer", FORMAT).unwrap();
        let before = df.clone();

        let parsed = parse_dates(&mut df, "dt_customer", FORMAT).unwrap();
        assert_eq!(parsed, 0);
        assert!(df.equals_missing(&before));
    }

    #[test]
    fn test_absent_column_is_schema_error() {
        let mut df = df!["other" => [1.0]].unwrap();
        let err = parse_dates(&mut df, "dt_customer", FORMAT).unwrap_err();
        assert_eq!(err.error_code(), "SCHEMA_ERROR");
    }
}
