//! Funding Event Model
//! Typed row schema for the funding dataset and the immutable table holding it.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeSet;

/// One funding transaction (one row of the source CSV).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FundingEvent {
    pub date: Option<NaiveDate>,
    pub startup: Option<String>,
    /// Raw comma-separated investor list, kept verbatim for substring matching.
    pub investors: Option<String>,
    pub vertical: Option<String>,
    pub subvertical: Option<String>,
    pub city: Option<String>,
    pub round: Option<String>,
    /// Amount in Cr. Never negative.
    pub amount: Option<f64>,
}

impl FundingEvent {
    /// Month (1-12) derived from the date.
    pub fn month(&self) -> Option<u32> {
        self.date.map(|d| d.month())
    }

    /// Calendar year derived from the date.
    pub fn year(&self) -> Option<i32> {
        self.date.map(|d| d.year())
    }

    /// Amount with missing values counted as zero.
    pub fn amount_or_zero(&self) -> f64 {
        self.amount.unwrap_or(0.0)
    }

    /// Trimmed investor names listed on this event, duplicates included.
    pub fn investor_names(&self) -> impl Iterator<Item = &str> {
        self.investors
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// The full dataset, loaded once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct FundingTable {
    events: Vec<FundingEvent>,
}

impl FundingTable {
    pub fn new(events: Vec<FundingEvent>) -> Self {
        Self { events }
    }

    /// All events in file order.
    pub fn events(&self) -> &[FundingEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Distinct startup names, sorted.
    pub fn startup_names(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| e.startup.as_deref())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Distinct investor names across every event, sorted.
    pub fn investor_names(&self) -> Vec<String> {
        self.events
            .iter()
            .flat_map(|e| e.investor_names())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(startup: &str, investors: &str) -> FundingEvent {
        FundingEvent {
            startup: Some(startup.to_string()),
            investors: Some(investors.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn investor_names_are_trimmed_and_keep_duplicates() {
        let event = named("Ola", " Tiger Global,  SoftBank , ,Tiger Global");
        let names: Vec<&str> = event.investor_names().collect();
        assert_eq!(names, vec!["Tiger Global", "SoftBank", "Tiger Global"]);
    }

    #[test]
    fn derived_fields_follow_the_date() {
        let mut event = named("Ola", "A");
        assert_eq!(event.month(), None);
        assert_eq!(event.year(), None);

        event.date = NaiveDate::from_ymd_opt(2019, 7, 14);
        assert_eq!(event.month(), Some(7));
        assert_eq!(event.year(), Some(2019));
    }

    #[test]
    fn pick_lists_are_sorted_and_distinct() {
        let table = FundingTable::new(vec![
            named("Zomato", "Sequoia, Info Edge"),
            named("Byju's", "Sequoia"),
            named("Zomato", "Info Edge"),
            FundingEvent::default(),
        ]);

        assert_eq!(table.startup_names(), vec!["Byju's", "Zomato"]);
        assert_eq!(table.investor_names(), vec!["Info Edge", "Sequoia"]);
    }
}
