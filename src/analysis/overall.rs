//! Overall Aggregator
//! Dataset-wide funding metrics and the month-on-month series.

use super::grouping::{round_currency, sum_by, Bucket, Dimension};
use super::AnalysisError;
use crate::data::FundingTable;
use serde::Serialize;
use statrs::statistics::Statistics;
use std::collections::BTreeMap;
use std::fmt;

/// Aggregation used for the month-on-month series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum MomMode {
    /// Sum of amounts per month.
    #[default]
    Total,
    /// Number of funded events per month.
    Count,
}

impl MomMode {
    pub const ALL: [MomMode; 2] = [MomMode::Total, MomMode::Count];
}

impl fmt::Display for MomMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MomMode::Total => write!(f, "Total"),
            MomMode::Count => write!(f, "Count"),
        }
    }
}

/// Dataset-wide aggregations.
pub struct OverallAggregator;

impl OverallAggregator {
    /// Sum of every amount, rounded once.
    pub fn total_funding(table: &FundingTable) -> Result<i64, AnalysisError> {
        if table.is_empty() {
            return Err(AnalysisError::NoData);
        }
        let total: f64 = table.events().iter().map(|e| e.amount_or_zero()).sum();
        Ok(round_currency(total))
    }

    /// Largest per-startup total (sum over all of a startup's rounds).
    pub fn max_single_startup_funding(table: &FundingTable) -> Result<i64, AnalysisError> {
        let totals = Self::startup_totals(table)?;
        let max = totals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Ok(round_currency(max))
    }

    /// Mean of the per-startup totals.
    pub fn avg_funding_per_startup(table: &FundingTable) -> Result<i64, AnalysisError> {
        let totals = Self::startup_totals(table)?;
        Ok(round_currency(totals.iter().mean()))
    }

    /// Number of distinct startup names.
    pub fn startup_count(table: &FundingTable) -> Result<usize, AnalysisError> {
        Ok(Self::startup_totals(table)?.len())
    }

    /// Series bucketed by (year, month) ascending, labelled `"<month>-<year>"`.
    /// Undated events are excluded.
    pub fn month_on_month(
        table: &FundingTable,
        mode: MomMode,
    ) -> Result<Vec<Bucket>, AnalysisError> {
        if table.is_empty() {
            return Err(AnalysisError::NoData);
        }

        let mut months: BTreeMap<(i32, u32), f64> = BTreeMap::new();
        for event in table.events() {
            let (Some(year), Some(month)) = (event.year(), event.month()) else {
                continue;
            };
            let slot = months.entry((year, month)).or_default();
            match mode {
                MomMode::Total => *slot += event.amount_or_zero(),
                MomMode::Count => {
                    if event.amount.is_some() {
                        *slot += 1.0;
                    }
                }
            }
        }

        Ok(months
            .into_iter()
            .map(|((year, month), value)| Bucket::new(format!("{month}-{year}"), value))
            .collect())
    }

    fn startup_totals(table: &FundingTable) -> Result<Vec<f64>, AnalysisError> {
        let totals: Vec<f64> = sum_by(table.events(), Dimension::Startup)
            .into_iter()
            .map(|b| b.value)
            .collect();
        if totals.is_empty() {
            return Err(AnalysisError::NoData);
        }
        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FundingEvent;
    use chrono::NaiveDate;

    fn event(startup: &str, date: Option<(i32, u32, u32)>, amount: Option<f64>) -> FundingEvent {
        FundingEvent {
            startup: Some(startup.to_string()),
            date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            amount,
            ..Default::default()
        }
    }

    fn sample() -> FundingTable {
        FundingTable::new(vec![
            event("Ola", Some((2017, 1, 5)), Some(100.5)),
            event("Ola", Some((2017, 1, 20)), Some(50.0)),
            event("Paytm", Some((2017, 2, 1)), Some(120.0)),
            event("paytm", Some((2016, 12, 31)), Some(10.0)),
            event("Swiggy", Some((2018, 3, 3)), None),
        ])
    }

    #[test]
    fn total_is_rounded_once() {
        let table = FundingTable::new(vec![
            event("A", None, Some(0.3)),
            event("B", None, Some(0.3)),
            event("C", None, None),
        ]);
        assert_eq!(OverallAggregator::total_funding(&table).unwrap(), 1);
        // 280.5 rounds to the even neighbour.
        assert_eq!(OverallAggregator::total_funding(&sample()).unwrap(), 280);
    }

    #[test]
    fn max_is_largest_startup_total() {
        // Ola's rounds sum to 150.5, above Paytm's single 120.
        assert_eq!(
            OverallAggregator::max_single_startup_funding(&sample()).unwrap(),
            150
        );
    }

    #[test]
    fn average_is_mean_of_startup_totals() {
        // (150.5 + 120 + 10 + 0) / 4 = 70.125
        assert_eq!(
            OverallAggregator::avg_funding_per_startup(&sample()).unwrap(),
            70
        );
    }

    #[test]
    fn startup_count_is_case_sensitive() {
        assert_eq!(OverallAggregator::startup_count(&sample()).unwrap(), 4);
    }

    #[test]
    fn month_on_month_orders_by_year_then_month() {
        let series = OverallAggregator::month_on_month(&sample(), MomMode::Total).unwrap();
        assert_eq!(
            series,
            vec![
                Bucket::new("12-2016", 10.0),
                Bucket::new("1-2017", 150.5),
                Bucket::new("2-2017", 120.0),
                Bucket::new("3-2018", 0.0),
            ]
        );
    }

    #[test]
    fn month_on_month_count_ignores_missing_amounts() {
        let series = OverallAggregator::month_on_month(&sample(), MomMode::Count).unwrap();
        let values: Vec<f64> = series.iter().map(|b| b.value).collect();
        assert_eq!(values, vec![1.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn month_on_month_total_matches_total_funding() {
        let table = sample();
        let sum: f64 = OverallAggregator::month_on_month(&table, MomMode::Total)
            .unwrap()
            .iter()
            .map(|b| b.value)
            .sum();
        assert_eq!(
            round_currency(sum),
            OverallAggregator::total_funding(&table).unwrap()
        );
    }

    #[test]
    fn empty_table_reports_no_data() {
        let table = FundingTable::default();
        assert_eq!(
            OverallAggregator::total_funding(&table),
            Err(AnalysisError::NoData)
        );
        assert_eq!(
            OverallAggregator::max_single_startup_funding(&table),
            Err(AnalysisError::NoData)
        );
        assert_eq!(
            OverallAggregator::avg_funding_per_startup(&table),
            Err(AnalysisError::NoData)
        );
        assert_eq!(
            OverallAggregator::startup_count(&table),
            Err(AnalysisError::NoData)
        );
        assert!(OverallAggregator::month_on_month(&table, MomMode::Count).is_err());
    }

    #[test]
    fn unnamed_rows_give_no_startup_metrics() {
        let table = FundingTable::new(vec![
            FundingEvent {
                amount: Some(3.0),
                ..Default::default()
            },
            FundingEvent::default(),
        ]);
        assert_eq!(OverallAggregator::total_funding(&table), Ok(3));
        assert_eq!(
            OverallAggregator::startup_count(&table),
            Err(AnalysisError::NoData)
        );
        assert_eq!(
            OverallAggregator::max_single_startup_funding(&table),
            Err(AnalysisError::NoData)
        );
        assert_eq!(
            OverallAggregator::avg_funding_per_startup(&table),
            Err(AnalysisError::NoData)
        );
    }
}
