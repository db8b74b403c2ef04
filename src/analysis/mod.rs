//! Analysis module - aggregations over the funding table

mod grouping;
mod investor;
mod overall;
mod startup;

pub use grouping::{round_currency, shares, sort_descending, sum_by, Bucket, Dimension, GroupKey};
pub use investor::{InvestorAggregator, Investment};
pub use overall::{MomMode, OverallAggregator};
pub use startup::{FundingRound, StartupAggregator};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("No data: the dataset contains no startups")]
    NoData,
}
