//! Report Viewer Widget
//! Central scrollable panel rendering the active report as metric cards,
//! tables and charts.

use crate::analysis::{FundingRound, Investment, MomMode};
use crate::charts::{ChartKind, ChartPlotter, ChartSpec};
use crate::report::{InvestorReport, OverallReport, Report, StartupReport};
use chrono::NaiveDate;
use egui::{Color32, ComboBox, RichText, ScrollArea};

const CHART_HEIGHT: f32 = 260.0;
const PIE_DIAMETER: f32 = 180.0;
const CURRENCY: &str = "Cr";

/// Central panel showing either a report or a message.
#[derive(Default)]
pub struct ReportViewer {
    pub report: Option<Report>,
    pub message: Option<String>,
    pub mom_mode: MomMode,
}

impl ReportViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_report(&mut self, report: Report) {
        self.report = Some(report);
        self.message = None;
    }

    /// Replace the report with a message (prompt or error).
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.report = None;
        self.message = Some(message.into());
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let Self {
            report,
            message,
            mom_mode,
        } = self;

        let Some(report) = report else {
            let text = message.as_deref().unwrap_or("No Data");
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new(text).size(20.0));
            });
            return;
        };

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(RichText::new(report.title()).size(24.0).strong());
                ui.add_space(10.0);
                match report {
                    Report::Overall(r) => Self::show_overall(ui, r, mom_mode),
                    Report::Startup(r) => Self::show_startup(ui, r),
                    Report::Investor(r) => Self::show_investor(ui, r),
                }
            });
    }

    fn show_overall(ui: &mut egui::Ui, report: &OverallReport, mom_mode: &mut MomMode) {
        ui.columns(4, |cols| {
            Self::metric_card(
                &mut cols[0],
                "💰 Total Funding",
                format!("{} {CURRENCY}", report.total_funding),
            );
            Self::metric_card(
                &mut cols[1],
                "🏆 Max Funding",
                format!("{} {CURRENCY}", report.max_funding),
            );
            Self::metric_card(
                &mut cols[2],
                "📈 Avg Funding",
                format!("{} {CURRENCY}", report.avg_funding),
            );
            Self::metric_card(
                &mut cols[3],
                "🏢 Number of Startups",
                report.startup_count.to_string(),
            );
        });

        ui.add_space(20.0);
        ui.label(RichText::new("📆 Month-on-Month (MOM) Graph").size(18.0).strong());
        ui.add_space(5.0);
        ui.horizontal(|ui| {
            ui.label("📌 Select Type:");
            ComboBox::from_id_salt("mom_mode")
                .selected_text(mom_mode.to_string())
                .show_ui(ui, |ui| {
                    for mode in MomMode::ALL {
                        ui.selectable_value(mom_mode, mode, mode.to_string());
                    }
                });
        });
        ui.add_space(5.0);

        let title = match mom_mode {
            MomMode::Total => "Total funding per month",
            MomMode::Count => "Funded events per month",
        };
        ChartPlotter::draw(
            ui,
            &ChartSpec::new(title, ChartKind::Line, report.month_on_month(*mom_mode)),
            CHART_HEIGHT + 80.0,
        );
    }

    fn show_startup(ui: &mut egui::Ui, report: &StartupReport) {
        if report.is_empty() {
            ChartPlotter::draw_no_data(ui);
            return;
        }

        ui.label(RichText::new("🧾 Recent Funding Rounds").size(18.0).strong());
        ui.add_space(5.0);
        Self::rounds_table(ui, &report.recent_rounds);
        ui.add_space(15.0);

        ui.columns(2, |cols| {
            ChartPlotter::draw(
                &mut cols[0],
                &ChartSpec::new("📆 Funding Over Time", ChartKind::Line, &report.funding_by_year),
                CHART_HEIGHT,
            );
            ChartPlotter::draw(
                &mut cols[1],
                &ChartSpec::new("📊 Funding by Round", ChartKind::Bar, &report.funding_by_round),
                CHART_HEIGHT,
            );
        });
        ui.add_space(15.0);

        ChartPlotter::draw(
            ui,
            &ChartSpec::new(
                "🤝 Investor Contributions",
                ChartKind::Bar,
                &report.investor_contributions,
            ),
            CHART_HEIGHT,
        );
        ui.add_space(5.0);
        ChartPlotter::draw_bucket_table(
            ui,
            &report.startup,
            ["Investor", "Total Investment"],
            &report.investor_contributions,
        );
    }

    fn show_investor(ui: &mut egui::Ui, report: &InvestorReport) {
        if report.is_empty() {
            ChartPlotter::draw_no_data(ui);
            return;
        }

        ui.label(RichText::new("🆕 Most Recent Investments").size(18.0).strong());
        ui.add_space(5.0);
        Self::investments_table(ui, &report.recent_investments);
        ui.add_space(15.0);

        ui.columns(4, |cols| {
            ChartPlotter::draw(
                &mut cols[0],
                &ChartSpec::new("🏆 Biggest Investments", ChartKind::Bar, &report.top_startups),
                CHART_HEIGHT,
            );
            ChartPlotter::draw(
                &mut cols[1],
                &ChartSpec::new("🏭 Sectors Invested In", ChartKind::Pie, &report.sectors),
                PIE_DIAMETER,
            );
            ChartPlotter::draw(
                &mut cols[2],
                &ChartSpec::new("📊 Stages Invested In", ChartKind::Pie, &report.rounds),
                PIE_DIAMETER,
            );
            ChartPlotter::draw(
                &mut cols[3],
                &ChartSpec::new("🌆 Cities Invested In", ChartKind::Pie, &report.cities),
                PIE_DIAMETER,
            );
        });
        ui.add_space(15.0);

        ChartPlotter::draw(
            ui,
            &ChartSpec::new(
                "📈 Year-on-Year (YOY) Investment Trend",
                ChartKind::Line,
                &report.yearly_trend,
            ),
            CHART_HEIGHT,
        );
    }

    fn metric_card(ui: &mut egui::Ui, label: &str, value: String) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.5, Color32::from_rgb(100, 149, 237)))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(label).size(13.0).color(Color32::GRAY));
                ui.label(RichText::new(value).size(22.0).strong());
            });
    }

    fn rounds_table(ui: &mut egui::Ui, rounds: &[FundingRound]) {
        Self::table(
            ui,
            "recent_rounds",
            &["Date", "Investors", "Vertical", "City", "Round", "Amount"],
            rounds.iter().map(|r| {
                vec![
                    date_cell(r.date),
                    text_cell(&r.investors),
                    text_cell(&r.vertical),
                    text_cell(&r.city),
                    text_cell(&r.round),
                    amount_cell(r.amount),
                ]
            }),
        );
    }

    fn investments_table(ui: &mut egui::Ui, investments: &[Investment]) {
        Self::table(
            ui,
            "recent_investments",
            &["Date", "Startup", "Vertical", "Subvertical", "City", "Round", "Amount"],
            investments.iter().map(|i| {
                vec![
                    date_cell(i.date),
                    text_cell(&i.startup),
                    text_cell(&i.vertical),
                    text_cell(&i.subvertical),
                    text_cell(&i.city),
                    text_cell(&i.round),
                    amount_cell(i.amount),
                ]
            }),
        );
    }

    fn table(
        ui: &mut egui::Ui,
        id: &str,
        headers: &[&str],
        rows: impl Iterator<Item = Vec<String>>,
    ) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new(ui.make_persistent_id(id))
                    .striped(true)
                    .min_col_width(70.0)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        for header in headers {
                            ui.label(RichText::new(*header).strong().size(12.0));
                        }
                        ui.end_row();

                        for row in rows {
                            for cell in row {
                                ui.label(RichText::new(cell).size(12.0));
                            }
                            ui.end_row();
                        }
                    });
            });
    }
}

fn text_cell(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

fn date_cell(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn amount_cell(amount: Option<f64>) -> String {
    amount
        .map(|a| format!("{a:.2}"))
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_cells_render_as_dash() {
        assert_eq!(text_cell(&None), "-");
        assert_eq!(text_cell(&Some("Pune".to_string())), "Pune");
        assert_eq!(date_cell(NaiveDate::from_ymd_opt(2020, 1, 9)), "2020-01-09");
        assert_eq!(date_cell(None), "-");
        assert_eq!(amount_cell(Some(12.5)), "12.50");
        assert_eq!(amount_cell(None), "-");
    }

    #[test]
    fn message_replaces_report() {
        let mut viewer = ReportViewer::new();
        viewer.set_message("Select a startup");
        assert!(viewer.report.is_none());
        assert_eq!(viewer.message.as_deref(), Some("Select a startup"));
    }
}
