//! Data module - CSV loading and the funding event model

mod loader;
mod model;

pub use loader::{parse_amount, parse_date, DataLoader, LoaderError, REQUIRED_COLUMNS};
pub use model::{FundingEvent, FundingTable};
