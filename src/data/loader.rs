//! CSV Data Loader Module
//! Reads the funding CSV with Polars and converts it into typed funding events.

use super::model::{FundingEvent, FundingTable};
use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Columns the dataset must provide. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "date",
    "startup",
    "investors",
    "vertical",
    "subvertical",
    "city",
    "round",
    "amount",
];

/// Date formats tried in order. Month-first precedes day-first.
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d/%m/%Y", "%d-%m-%Y"];

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y/%m/%d %H:%M:%S"];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Dataset not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(String),
}

/// Loads the funding dataset from disk.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file into an immutable [`FundingTable`].
    pub fn load_csv(path: &Path) -> Result<FundingTable, LoaderError> {
        if !path.is_file() {
            return Err(LoaderError::NotFound(path.to_path_buf()));
        }

        // Schema inference disabled: every column arrives as text and is typed below.
        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .finish()?
            .collect()?;

        let table = Self::from_dataframe(&df)?;

        let undated = table.events().iter().filter(|e| e.date.is_none()).count();
        let no_amount = table.events().iter().filter(|e| e.amount.is_none()).count();
        log::info!(
            "Loaded {} funding events from {} ({} without a usable date, {} without an amount)",
            table.len(),
            path.display(),
            undated,
            no_amount
        );

        Ok(table)
    }

    /// Convert a text-typed DataFrame into funding events.
    pub fn from_dataframe(df: &DataFrame) -> Result<FundingTable, LoaderError> {
        let [date, startup, investors, vertical, subvertical, city, round, amount] =
            REQUIRED_COLUMNS.map(|name| Self::text_column(df, name));

        let dates = date?;
        let startups = startup?;
        let investors = investors?;
        let verticals = vertical?;
        let subverticals = subvertical?;
        let cities = city?;
        let rounds = round?;
        let amounts = amount?;

        let events = (0..df.height())
            .map(|i| FundingEvent {
                date: dates[i].as_deref().and_then(parse_date),
                startup: startups[i].clone(),
                investors: investors[i].clone(),
                vertical: verticals[i].clone(),
                subvertical: subverticals[i].clone(),
                city: cities[i].clone(),
                round: rounds[i].clone(),
                amount: amounts[i].as_deref().and_then(parse_amount),
            })
            .collect();

        Ok(FundingTable::new(events))
    }

    /// Extract a column as optional strings; empty cells become `None`.
    fn text_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, LoaderError> {
        let column = df
            .column(name)
            .map_err(|_| LoaderError::MissingColumn(name.to_string()))?;
        let text = column.cast(&DataType::String)?;
        let values = text.as_materialized_series().str()?;

        Ok(values
            .into_iter()
            .map(|v| v.filter(|s| !s.trim().is_empty()).map(str::to_string))
            .collect())
    }
}

/// Best-effort date parsing. Returns `None` for anything unrecognised.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Parse an amount in Cr. Negative or non-finite values are rejected.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_date_layouts() {
        let expected = NaiveDate::from_ymd_opt(2020, 1, 9);
        assert_eq!(parse_date("2020-01-09"), expected);
        assert_eq!(parse_date("2020/01/09"), expected);
        assert_eq!(parse_date("2020-01-09 00:00:00"), expected);
        assert_eq!(parse_date(" 2020-01-09 "), expected);
        // Ambiguous slash dates are read month-first.
        assert_eq!(parse_date("01/09/2020"), expected);
        assert_eq!(parse_date("13/01/2020"), NaiveDate::from_ymd_opt(2020, 1, 13));
        assert_eq!(parse_date("09-01-2020"), expected);
    }

    #[test]
    fn unparseable_dates_become_none() {
        assert_eq!(parse_date("05/072018"), None);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn amount_parsing_rejects_malformed_values() {
        assert_eq!(parse_amount("12.5"), Some(12.5));
        assert_eq!(parse_amount(" 300 "), Some(300.0));
        assert_eq!(parse_amount("unknown"), None);
        assert_eq!(parse_amount("-4"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn missing_file_is_reported() {
        let err = DataLoader::load_csv(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, LoaderError::NotFound(_)));
    }
}
