//! Grouping Primitives
//! Typed group-by over funding events, keyed by an enumerated column.

use crate::data::FundingEvent;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Columns a breakdown can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Startup,
    Vertical,
    City,
    Round,
    Year,
}

impl Dimension {
    /// Group key of an event, `None` when the column is missing.
    pub fn key(self, event: &FundingEvent) -> Option<GroupKey> {
        let text = match self {
            Dimension::Startup => &event.startup,
            Dimension::Vertical => &event.vertical,
            Dimension::City => &event.city,
            Dimension::Round => &event.round,
            Dimension::Year => return event.year().map(GroupKey::Year),
        };
        text.as_ref().map(|s| GroupKey::Text(s.clone()))
    }
}

/// Ordered group key. Years sort numerically, text lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupKey {
    Year(i32),
    Text(String),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Year(y) => write!(f, "{y}"),
            GroupKey::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One labelled value of an aggregated series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    pub label: String,
    pub value: f64,
}

impl Bucket {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Sum amounts per group, ascending by key. Events without a key are skipped;
/// groups whose amounts are all missing sum to zero.
pub fn sum_by<'a, I>(events: I, dimension: Dimension) -> Vec<Bucket>
where
    I: IntoIterator<Item = &'a FundingEvent>,
{
    let mut sums: BTreeMap<GroupKey, f64> = BTreeMap::new();
    for event in events {
        if let Some(key) = dimension.key(event) {
            *sums.entry(key).or_default() += event.amount_or_zero();
        }
    }

    sums.into_iter()
        .map(|(key, value)| Bucket::new(key.to_string(), value))
        .collect()
}

/// Stable sort, largest value first.
pub fn sort_descending(buckets: &mut [Bucket]) {
    buckets.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
}

/// Percentage share of each bucket in the total, for pie labels.
pub fn shares(buckets: &[Bucket]) -> Vec<f64> {
    let total: f64 = buckets.iter().map(|b| b.value).sum();
    buckets
        .iter()
        .map(|b| if total > 0.0 { b.value / total * 100.0 } else { 0.0 })
        .collect()
}

/// Round a currency aggregate to whole units, ties to even.
pub fn round_currency(value: f64) -> i64 {
    value.round_ties_even() as i64
}
