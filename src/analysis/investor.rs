//! Investor Aggregator
//! Drill-down over the events an investor took part in.

use super::grouping::{sort_descending, sum_by, Bucket, Dimension};
use crate::data::{FundingEvent, FundingTable};
use chrono::NaiveDate;
use serde::Serialize;

/// An investment as shown in the recent investments table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Investment {
    pub date: Option<NaiveDate>,
    pub startup: Option<String>,
    pub vertical: Option<String>,
    pub subvertical: Option<String>,
    pub city: Option<String>,
    pub round: Option<String>,
    pub amount: Option<f64>,
}

impl From<&FundingEvent> for Investment {
    fn from(event: &FundingEvent) -> Self {
        Self {
            date: event.date,
            startup: event.startup.clone(),
            vertical: event.vertical.clone(),
            subvertical: event.subvertical.clone(),
            city: event.city.clone(),
            round: event.round.clone(),
            amount: event.amount,
        }
    }
}

/// Per-investor aggregations.
///
/// An event belongs to an investor when its raw investor list contains the
/// name as a case-sensitive substring, so `"Sequoia"` also picks up
/// `"Sequoia Capital India"`.
pub struct InvestorAggregator;

impl InvestorAggregator {
    pub fn matches(event: &FundingEvent, investor: &str) -> bool {
        event
            .investors
            .as_deref()
            .is_some_and(|list| list.contains(investor))
    }

    /// Matching events in file order.
    pub fn events<'a>(
        table: &'a FundingTable,
        investor: &'a str,
    ) -> impl Iterator<Item = &'a FundingEvent> + 'a {
        table
            .events()
            .iter()
            .filter(move |e| Self::matches(e, investor))
    }

    /// First `n` matching events in file order.
    pub fn recent_investments(table: &FundingTable, investor: &str, n: usize) -> Vec<Investment> {
        Self::events(table, investor)
            .take(n)
            .map(Investment::from)
            .collect()
    }

    /// Startups with the largest total amount, top `n`.
    pub fn top_startups(table: &FundingTable, investor: &str, n: usize) -> Vec<Bucket> {
        let mut startups = sum_by(Self::events(table, investor), Dimension::Startup);
        sort_descending(&mut startups);
        startups.truncate(n);
        startups
    }

    pub fn sector_breakdown(table: &FundingTable, investor: &str) -> Vec<Bucket> {
        sum_by(Self::events(table, investor), Dimension::Vertical)
    }

    pub fn round_breakdown(table: &FundingTable, investor: &str) -> Vec<Bucket> {
        sum_by(Self::events(table, investor), Dimension::Round)
    }

    pub fn city_breakdown(table: &FundingTable, investor: &str) -> Vec<Bucket> {
        sum_by(Self::events(table, investor), Dimension::City)
    }

    /// Amount invested per year, ascending.
    pub fn yearly_trend(table: &FundingTable, investor: &str) -> Vec<Bucket> {
        sum_by(Self::events(table, investor), Dimension::Year)
    }
}
