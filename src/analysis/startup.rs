//! Startup Aggregator
//! Drill-down over the funding rounds of a single startup.

use super::grouping::{sort_descending, sum_by, Bucket, Dimension};
use crate::data::{FundingEvent, FundingTable};
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// A funding round as shown in the recent rounds table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundingRound {
    pub date: Option<NaiveDate>,
    pub investors: Option<String>,
    pub vertical: Option<String>,
    pub city: Option<String>,
    pub round: Option<String>,
    pub amount: Option<f64>,
}

impl From<&FundingEvent> for FundingRound {
    fn from(event: &FundingEvent) -> Self {
        Self {
            date: event.date,
            investors: event.investors.clone(),
            vertical: event.vertical.clone(),
            city: event.city.clone(),
            round: event.round.clone(),
            amount: event.amount,
        }
    }
}

/// Per-startup aggregations. Unknown names produce empty results.
pub struct StartupAggregator;

impl StartupAggregator {
    /// Events whose startup name matches exactly.
    pub fn events<'a>(
        table: &'a FundingTable,
        startup: &'a str,
    ) -> impl Iterator<Item = &'a FundingEvent> + 'a {
        table
            .events()
            .iter()
            .filter(move |e| e.startup.as_deref() == Some(startup))
    }

    /// Latest `n` rounds, newest first. Undated rounds go last, ties keep file order.
    pub fn recent_rounds(table: &FundingTable, startup: &str, n: usize) -> Vec<FundingRound> {
        let mut rounds: Vec<&FundingEvent> = Self::events(table, startup).collect();
        rounds.sort_by(|a, b| match (a.date, b.date) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        rounds.into_iter().take(n).map(FundingRound::from).collect()
    }

    /// Amount raised per year, ascending.
    pub fn funding_by_year(table: &FundingTable, startup: &str) -> Vec<Bucket> {
        sum_by(Self::events(table, startup), Dimension::Year)
    }

    /// Amount raised per funding round.
    pub fn funding_by_round(table: &FundingTable, startup: &str) -> Vec<Bucket> {
        sum_by(Self::events(table, startup), Dimension::Round)
    }

    /// Amount attributed to each listed investor, largest first.
    ///
    /// Every investor named on an event is credited with the full amount of
    /// that event; a name listed twice is credited twice.
    pub fn investor_contributions(table: &FundingTable, startup: &str) -> Vec<Bucket> {
        let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
        for event in Self::events(table, startup) {
            for investor in event.investor_names() {
                *totals.entry(investor).or_default() += event.amount_or_zero();
            }
        }

        let mut contributions: Vec<Bucket> = totals
            .into_iter()
            .map(|(investor, amount)| Bucket::new(investor, amount))
            .collect();
        sort_descending(&mut contributions);
        contributions
    }
}
