//! Report entry points
//! The three analyses the dashboard (or the headless CLI) asks for. Each one is
//! a pure function of the loaded table and the selected entity.

use crate::analysis::{
    AnalysisError, Bucket, FundingRound, InvestorAggregator, Investment, MomMode,
    OverallAggregator, StartupAggregator,
};
use crate::charts::{safe_file_name, ChartKind, ChartSpec};
use crate::data::FundingTable;
use serde::Serialize;

/// Rows shown in the recent/top tables.
pub const DEFAULT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallReport {
    pub total_funding: i64,
    pub max_funding: i64,
    pub avg_funding: i64,
    pub startup_count: usize,
    pub month_on_month_total: Vec<Bucket>,
    pub month_on_month_count: Vec<Bucket>,
}

impl OverallReport {
    pub fn month_on_month(&self, mode: MomMode) -> &[Bucket] {
        match mode {
            MomMode::Total => &self.month_on_month_total,
            MomMode::Count => &self.month_on_month_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartupReport {
    pub startup: String,
    pub recent_rounds: Vec<FundingRound>,
    pub funding_by_year: Vec<Bucket>,
    pub funding_by_round: Vec<Bucket>,
    pub investor_contributions: Vec<Bucket>,
}

impl StartupReport {
    pub fn is_empty(&self) -> bool {
        self.recent_rounds.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestorReport {
    pub investor: String,
    pub recent_investments: Vec<Investment>,
    pub top_startups: Vec<Bucket>,
    pub sectors: Vec<Bucket>,
    pub rounds: Vec<Bucket>,
    pub cities: Vec<Bucket>,
    pub yearly_trend: Vec<Bucket>,
}

impl InvestorReport {
    pub fn is_empty(&self) -> bool {
        self.recent_investments.is_empty()
    }
}

/// Any of the three analyses, as handed to the dashboard and the exporter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Report {
    Overall(OverallReport),
    Startup(StartupReport),
    Investor(InvestorReport),
}

impl Report {
    pub fn title(&self) -> String {
        match self {
            Report::Overall(_) => "Overall Analysis".to_string(),
            Report::Startup(r) => format!("Detailed Analysis for: {}", r.startup),
            Report::Investor(r) => format!("Investor Analysis: {}", r.investor),
        }
    }

    /// File name stem used when the report is exported.
    pub fn file_stem(&self) -> String {
        match self {
            Report::Overall(_) => "overall".to_string(),
            Report::Startup(r) => format!("startup_{}", safe_file_name(&r.startup)),
            Report::Investor(r) => format!("investor_{}", safe_file_name(&r.investor)),
        }
    }

    /// Every chart of the report, in display order.
    pub fn chart_specs(&self) -> Vec<ChartSpec<'_>> {
        match self {
            Report::Overall(r) => vec![
                ChartSpec::new("Month-on-Month Total", ChartKind::Line, &r.month_on_month_total),
                ChartSpec::new("Month-on-Month Count", ChartKind::Line, &r.month_on_month_count),
            ],
            Report::Startup(r) => vec![
                ChartSpec::new("Funding Over Time", ChartKind::Line, &r.funding_by_year),
                ChartSpec::new("Funding by Round", ChartKind::Bar, &r.funding_by_round),
                ChartSpec::new("Investor Contributions", ChartKind::Bar, &r.investor_contributions),
            ],
            Report::Investor(r) => vec![
                ChartSpec::new("Biggest Investments", ChartKind::Bar, &r.top_startups),
                ChartSpec::new("Sectors Invested In", ChartKind::Pie, &r.sectors),
                ChartSpec::new("Stages Invested In", ChartKind::Pie, &r.rounds),
                ChartSpec::new("Cities Invested In", ChartKind::Pie, &r.cities),
                ChartSpec::new("Year-on-Year Investment Trend", ChartKind::Line, &r.yearly_trend),
            ],
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Headline metrics and month-on-month series. Fails on an empty dataset.
pub fn overall_analysis(table: &FundingTable) -> Result<OverallReport, AnalysisError> {
    log::debug!("Computing overall analysis over {} events", table.len());
    Ok(OverallReport {
        total_funding: OverallAggregator::total_funding(table)?,
        max_funding: OverallAggregator::max_single_startup_funding(table)?,
        avg_funding: OverallAggregator::avg_funding_per_startup(table)?,
        startup_count: OverallAggregator::startup_count(table)?,
        month_on_month_total: OverallAggregator::month_on_month(table, MomMode::Total)?,
        month_on_month_count: OverallAggregator::month_on_month(table, MomMode::Count)?,
    })
}

/// Drill-down for one startup. Unknown names give an empty report.
pub fn startup_analysis(table: &FundingTable, startup: &str, limit: usize) -> StartupReport {
    log::debug!("Computing startup analysis for '{startup}'");
    StartupReport {
        startup: startup.to_string(),
        recent_rounds: StartupAggregator::recent_rounds(table, startup, limit),
        funding_by_year: StartupAggregator::funding_by_year(table, startup),
        funding_by_round: StartupAggregator::funding_by_round(table, startup),
        investor_contributions: StartupAggregator::investor_contributions(table, startup),
    }
}

/// Drill-down for one investor. Names matching nothing give an empty report.
pub fn investor_analysis(table: &FundingTable, investor: &str, limit: usize) -> InvestorReport {
    log::debug!("Computing investor analysis for '{investor}'");
    InvestorReport {
        investor: investor.to_string(),
        recent_investments: InvestorAggregator::recent_investments(table, investor, limit),
        top_startups: InvestorAggregator::top_startups(table, investor, limit),
        sectors: InvestorAggregator::sector_breakdown(table, investor),
        rounds: InvestorAggregator::round_breakdown(table, investor),
        cities: InvestorAggregator::city_breakdown(table, investor),
        yearly_trend: InvestorAggregator::yearly_trend(table, investor),
    }
}
