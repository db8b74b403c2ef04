//! Fundscope - Startup Funding Analysis Dashboard
//!
//! Loads a CSV of startup funding events and answers three questions about it:
//! an overall analysis, a per-startup drill-down and a per-investor drill-down.

pub mod analysis;
pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod report;
