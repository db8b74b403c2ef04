//! Command-line configuration.

use crate::analysis::AnalysisError;
use crate::data::FundingTable;
use crate::report::{self, Report, DEFAULT_LIMIT};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_DATA_PATH: &str = "Startup_Funding_cleaned_final.csv";

#[derive(Parser, Debug)]
#[command(
    name = "fundscope",
    version,
    about = "Startup funding analysis dashboard",
    long_about = "Explore startup funding events: an overall analysis, per-startup and \
                  per-investor drill-downs. Without a subcommand the desktop dashboard opens."
)]
pub struct Settings {
    /// Funding dataset (CSV)
    #[arg(short, long, env = "FUNDSCOPE_DATA", default_value = DEFAULT_DATA_PATH, global = true)]
    pub data: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the overall analysis as JSON
    Overall {
        /// Also render the charts as PNG files into this folder
        #[arg(long)]
        charts: Option<PathBuf>,
    },
    /// Print the analysis of one startup as JSON
    Startup {
        name: String,
        /// Rows in the recent rounds table
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
        #[arg(long)]
        charts: Option<PathBuf>,
    },
    /// Print the analysis of one investor as JSON
    Investor {
        name: String,
        /// Rows in the recent investments and top startups tables
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
        #[arg(long)]
        charts: Option<PathBuf>,
    },
    /// List every startup name
    Startups,
    /// List every investor name
    Investors,
}

/// What a headless subcommand produces.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// Names printed one per line.
    Listing(Vec<String>),
    /// A report printed as JSON, optionally exported as charts.
    Report {
        report: Report,
        charts: Option<PathBuf>,
    },
}

impl Command {
    /// Run the subcommand against the loaded table.
    pub fn execute(self, table: &FundingTable) -> Result<Output, AnalysisError> {
        let output = match self {
            Command::Startups => Output::Listing(table.startup_names()),
            Command::Investors => Output::Listing(table.investor_names()),
            Command::Overall { charts } => Output::Report {
                report: Report::Overall(report::overall_analysis(table)?),
                charts,
            },
            Command::Startup { name, limit, charts } => {
                let startup = report::startup_analysis(table, &name, limit);
                if startup.is_empty() {
                    log::warn!("No funding rounds found for startup '{name}'");
                }
                Output::Report {
                    report: Report::Startup(startup),
                    charts,
                }
            }
            Command::Investor { name, limit, charts } => {
                let investor = report::investor_analysis(table, &name, limit);
                if investor.is_empty() {
                    log::warn!("No investments found for investor '{name}'");
                }
                Output::Report {
                    report: Report::Investor(investor),
                    charts,
                }
            }
        };
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FundingEvent;
    use chrono::NaiveDate;

    fn round(startup: &str, investors: &str, day: u32, amount: f64) -> FundingEvent {
        FundingEvent {
            date: NaiveDate::from_ymd_opt(2020, 1, day),
            startup: Some(startup.to_string()),
            investors: Some(investors.to_string()),
            amount: Some(amount),
            ..Default::default()
        }
    }

    fn table() -> FundingTable {
        FundingTable::new(vec![
            round("Ola", "Tiger Global, SoftBank", 3, 10.0),
            round("Ola", "SoftBank", 9, 20.0),
            round("Ola", "Accel", 6, 5.0),
            round("Zomato", "SoftBank", 1, 40.0),
        ])
    }

    #[test]
    fn defaults_open_the_dashboard() {
        let settings = Settings::try_parse_from(["fundscope", "--data", "funding.csv"]).unwrap();
        assert_eq!(settings.data, PathBuf::from("funding.csv"));
        assert_eq!(settings.command, None);
    }

    #[test]
    fn report_subcommands_parse() {
        let settings =
            Settings::try_parse_from(["fundscope", "investor", "Sequoia Capital", "-l", "3"])
                .unwrap();
        assert_eq!(
            settings.command,
            Some(Command::Investor {
                name: "Sequoia Capital".to_string(),
                limit: 3,
                charts: None,
            })
        );

        let settings =
            Settings::try_parse_from(["fundscope", "overall", "--charts", "out"]).unwrap();
        assert_eq!(
            settings.command,
            Some(Command::Overall {
                charts: Some(PathBuf::from("out")),
            })
        );
    }

    #[test]
    fn listings_are_sorted_names() {
        assert_eq!(
            Command::Startups.execute(&table()),
            Ok(Output::Listing(vec!["Ola".to_string(), "Zomato".to_string()]))
        );
        assert_eq!(
            Command::Investors.execute(&table()),
            Ok(Output::Listing(vec![
                "Accel".to_string(),
                "SoftBank".to_string(),
                "Tiger Global".to_string(),
            ]))
        );
    }

    #[test]
    fn limit_reaches_the_report() {
        let settings =
            Settings::try_parse_from(["fundscope", "startup", "Ola", "--limit", "2"]).unwrap();
        let Some(command) = settings.command else {
            panic!("subcommand expected");
        };
        let Ok(Output::Report {
            report: Report::Startup(startup),
            charts,
        }) = command.execute(&table())
        else {
            panic!("startup report expected");
        };
        assert_eq!(charts, None);
        let days: Vec<_> = startup.recent_rounds.iter().map(|r| r.date).collect();
        assert_eq!(
            days,
            vec![
                NaiveDate::from_ymd_opt(2020, 1, 9),
                NaiveDate::from_ymd_opt(2020, 1, 6),
            ]
        );

        let output = Command::Investor {
            name: "SoftBank".to_string(),
            limit: 1,
            charts: Some(PathBuf::from("out")),
        }
        .execute(&table())
        .unwrap();
        let Output::Report {
            report: Report::Investor(investor),
            charts,
        } = output
        else {
            panic!("investor report expected");
        };
        assert_eq!(charts, Some(PathBuf::from("out")));
        assert_eq!(investor.recent_investments.len(), 1);
        assert_eq!(investor.top_startups.len(), 1);
    }

    #[test]
    fn overall_on_empty_table_fails() {
        let empty = FundingTable::default();
        assert_eq!(
            Command::Overall { charts: None }.execute(&empty),
            Err(AnalysisError::NoData)
        );
    }
}
