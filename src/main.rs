//! Fundscope - Startup Funding Analysis Dashboard
//!
//! Opens the desktop dashboard, or prints a report as JSON when a subcommand is given.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use eframe::egui;
use fundscope::charts::StaticChartRenderer;
use fundscope::config::{Command, Output, Settings};
use fundscope::data::{DataLoader, FundingTable};
use fundscope::gui::FundscopeApp;
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::parse();

    // The dataset is loaded once; a broken file is fatal.
    let table = DataLoader::load_csv(&settings.data)
        .with_context(|| format!("loading dataset {}", settings.data.display()))?;

    match settings.command {
        None => run_dashboard(table, settings.data),
        Some(command) => run_headless(&table, command),
    }
}

fn run_headless(table: &FundingTable, command: Command) -> Result<()> {
    match command.execute(table)? {
        Output::Listing(names) => names.iter().for_each(|name| println!("{name}")),
        Output::Report { report, charts } => {
            println!("{}", report.to_json()?);
            if let Some(dir) = charts {
                StaticChartRenderer::export_report(&report, &dir)
                    .with_context(|| format!("exporting charts to {}", dir.display()))?;
            }
        }
    }
    Ok(())
}

fn run_dashboard(table: FundingTable, data_path: PathBuf) -> Result<()> {
    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 850.0])
            .with_min_inner_size([1100.0, 650.0])
            .with_title("Startup Funding Analysis"),
        ..Default::default()
    };

    eframe::run_native(
        "Fundscope",
        options,
        Box::new(move |cc| Ok(Box::new(FundscopeApp::new(cc, table, &data_path)))),
    )
    .map_err(|e| anyhow!("dashboard terminated: {e}"))
}
