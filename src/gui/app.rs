//! Fundscope Main Application
//! Main window with control panel and report viewer.

use crate::charts::StaticChartRenderer;
use crate::data::FundingTable;
use crate::gui::{ControlPanel, ControlPanelAction, ReportViewer, View};
use crate::report::{self, Report, DEFAULT_LIMIT};
use egui::SidePanel;
use std::path::Path;

/// Main application window. Owns the read-only dataset for the whole session.
pub struct FundscopeApp {
    table: FundingTable,
    control_panel: ControlPanel,
    viewer: ReportViewer,
}

impl FundscopeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, table: FundingTable, data_path: &Path) -> Self {
        let dataset_label = format!(
            "{} · {} events",
            data_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| data_path.display().to_string()),
            table.len()
        );
        let control_panel =
            ControlPanel::new(dataset_label, table.startup_names(), table.investor_names());

        let mut app = Self {
            table,
            control_panel,
            viewer: ReportViewer::new(),
        };
        app.handle_view_changed();
        app
    }

    /// Overall analysis is shown right away; drill-downs wait for "Show details".
    fn handle_view_changed(&mut self) {
        match self.control_panel.view {
            View::Overall => match report::overall_analysis(&self.table) {
                Ok(overall) => self.viewer.set_report(Report::Overall(overall)),
                Err(e) => {
                    log::warn!("Overall analysis unavailable: {e}");
                    self.viewer.set_message(e.to_string());
                }
            },
            View::Startups => self
                .viewer
                .set_message("🚀 Startup Analysis\n\nPick a startup and press Show Details"),
            View::Investors => self
                .viewer
                .set_message("💼 Investor Analysis\n\nPick an investor and press Show Details"),
        }
        self.update_export_state();
    }

    fn handle_show_startup(&mut self) {
        let name = self.control_panel.selected_startup.clone();
        let startup = report::startup_analysis(&self.table, &name, DEFAULT_LIMIT);
        if startup.is_empty() {
            self.control_panel
                .set_status(&format!("No funding rounds found for {name}"));
        } else {
            self.control_panel.set_status("Ready");
        }
        self.viewer.set_report(Report::Startup(startup));
        self.update_export_state();
    }

    fn handle_show_investor(&mut self) {
        let name = self.control_panel.selected_investor.clone();
        let investor = report::investor_analysis(&self.table, &name, DEFAULT_LIMIT);
        if investor.is_empty() {
            self.control_panel
                .set_status(&format!("No investments found for {name}"));
        } else {
            self.control_panel.set_status("Ready");
        }
        self.viewer.set_report(Report::Investor(investor));
        self.update_export_state();
    }

    /// Handle report export - JSON plus one PNG per chart into a chosen folder
    fn handle_export(&mut self) {
        let Some(active) = self.viewer.report.as_ref() else {
            self.control_panel.set_status("No report to export");
            return;
        };

        // Ask user for output location
        let Some(dir) = rfd::FileDialog::new()
            .set_title("Export report to folder")
            .pick_folder()
        else {
            return; // User cancelled
        };

        match StaticChartRenderer::export_report(active, &dir) {
            Ok(written) => {
                self.control_panel
                    .set_status(&format!("Exported {} files", written.len()));
                if let Err(e) = open::that(&dir) {
                    log::warn!("Could not open {}: {e}", dir.display());
                }
            }
            Err(e) => {
                log::error!("Export failed: {e}");
                self.control_panel.set_status(&format!("Error: {e}"));
            }
        }
    }

    fn update_export_state(&mut self) {
        self.control_panel.export_enabled = self.viewer.report.is_some();
    }
}

impl eframe::App for FundscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(300.0)
            .max_width(350.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::ViewChanged => self.handle_view_changed(),
                        ControlPanelAction::ShowStartup => self.handle_show_startup(),
                        ControlPanelAction::ShowInvestor => self.handle_show_investor(),
                        ControlPanelAction::ExportReport => self.handle_export(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Report Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.viewer.show(ui);
        });
    }
}
