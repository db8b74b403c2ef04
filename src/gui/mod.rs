//! GUI module - User interface components

mod app;
mod control_panel;
mod report_viewer;

pub use app::FundscopeApp;
pub use control_panel::{ControlPanel, ControlPanelAction, View};
pub use report_viewer::ReportViewer;
