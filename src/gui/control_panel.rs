//! Control Panel Widget
//! Left side panel with navigation, entity selection and export controls.

use egui::{Color32, ComboBox, RichText};

/// Which analysis the dashboard shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Overall,
    Startups,
    Investors,
}

impl View {
    pub const ALL: [View; 3] = [View::Overall, View::Startups, View::Investors];

    pub fn label(self) -> &'static str {
        match self {
            View::Overall => "Overall Analysis",
            View::Startups => "Startups",
            View::Investors => "Investors",
        }
    }
}

/// Left side control panel.
pub struct ControlPanel {
    pub view: View,
    pub startups: Vec<String>,
    pub investors: Vec<String>,
    pub selected_startup: String,
    pub selected_investor: String,
    pub search: String,
    pub status: String,
    pub export_enabled: bool,
    dataset_label: String,
}

impl ControlPanel {
    pub fn new(dataset_label: String, startups: Vec<String>, investors: Vec<String>) -> Self {
        Self {
            view: View::default(),
            selected_startup: startups.first().cloned().unwrap_or_default(),
            selected_investor: investors.first().cloned().unwrap_or_default(),
            startups,
            investors,
            search: String::new(),
            status: "Ready".to_string(),
            export_enabled: false,
            dataset_label,
        }
    }

    /// Options whose name contains the search text, ignoring case.
    pub fn filter_options<'a>(options: &'a [String], search: &str) -> Vec<&'a String> {
        let needle = search.trim().to_lowercase();
        options
            .iter()
            .filter(|name| needle.is_empty() || name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 Startup Funding Analysis")
                    .size(20.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(RichText::new(&self.dataset_label).size(11.0).color(Color32::GRAY));
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Navigation =====
        ui.label(RichText::new("🔎 Select One").size(14.0).strong());
        ui.add_space(5.0);
        for view in View::ALL {
            if ui.radio_value(&mut self.view, view, view.label()).changed() {
                self.search.clear();
                action = ControlPanelAction::ViewChanged;
            }
        }

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Entity selection =====
        match self.view {
            View::Overall => {}
            View::Startups => {
                if Self::entity_picker(
                    ui,
                    "🏢 Select Startup",
                    "startup_pick",
                    &self.startups,
                    &mut self.search,
                    &mut self.selected_startup,
                ) {
                    action = ControlPanelAction::ShowStartup;
                }
            }
            View::Investors => {
                if Self::entity_picker(
                    ui,
                    "💼 Select Investor",
                    "investor_pick",
                    &self.investors,
                    &mut self.search,
                    &mut self.selected_investor,
                ) {
                    action = ControlPanelAction::ShowInvestor;
                }
            }
        }

        // ===== Export =====
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.add_enabled_ui(self.export_enabled, |ui| {
                let button = egui::Button::new(RichText::new("📄 Export Report").size(14.0))
                    .min_size(egui::vec2(150.0, 30.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::ExportReport;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Exported") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// Search box, picker and "Show details" button. Returns true when clicked.
    fn entity_picker(
        ui: &mut egui::Ui,
        heading: &str,
        id: &str,
        options: &[String],
        search: &mut String,
        selected: &mut String,
    ) -> bool {
        ui.label(RichText::new(heading).size(14.0).strong());
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.label("Search:");
            ui.text_edit_singleline(search);
        });
        ui.add_space(5.0);

        let matching = Self::filter_options(options, search);
        ComboBox::from_id_salt(id)
            .width(250.0)
            .height(400.0)
            .selected_text(selected.as_str())
            .show_ui(ui, |ui| {
                for name in &matching {
                    if ui.selectable_label(*selected == **name, name.as_str()).clicked() {
                        *selected = (*name).clone();
                    }
                }
            });
        ui.label(
            RichText::new(format!("{} of {} shown", matching.len(), options.len()))
                .size(11.0)
                .color(Color32::GRAY),
        );

        ui.add_space(10.0);
        let mut clicked = false;
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(!selected.is_empty(), |ui| {
                let button = egui::Button::new(RichText::new("📌 Show Details").size(16.0))
                    .min_size(egui::vec2(200.0, 35.0));
                clicked = ui.add(button).clicked();
            });
        });
        ui.add_space(10.0);
        ui.separator();
        clicked
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    ViewChanged,
    ShowStartup,
    ShowInvestor,
    ExportReport,
}
