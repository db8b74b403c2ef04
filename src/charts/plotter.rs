//! Chart Plotter Module
//! Draws funding series on screen using egui_plot and the egui painter.

use super::{ChartKind, ChartSpec};
use crate::analysis::{shares, Bucket};
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints, Points};
use std::f32::consts::{FRAC_PI_2, TAU};

pub const LINE_COLOR: Color32 = Color32::from_rgb(0, 128, 128); // Teal
pub const BAR_COLOR: Color32 = Color32::from_rgb(243, 156, 18); // Orange

pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(52, 152, 219),  // Blue
    Color32::from_rgb(231, 76, 60),   // Red
    Color32::from_rgb(46, 204, 113),  // Green
    Color32::from_rgb(155, 89, 182),  // Purple
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(26, 188, 156),  // Teal
    Color32::from_rgb(233, 30, 99),   // Pink
    Color32::from_rgb(0, 188, 212),   // Cyan
    Color32::from_rgb(121, 85, 72),   // Brown
    Color32::from_rgb(96, 125, 139),  // Blue Grey
];

/// Creates dashboard charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Color of the i-th slice or series.
    pub fn palette_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Label for a category axis mark; only whole positions are labelled.
    pub fn category_label(labels: &[String], position: f64) -> String {
        if (position - position.round()).abs() > 1e-6 || position < -0.5 {
            return String::new();
        }
        labels
            .get(position.round() as usize)
            .cloned()
            .unwrap_or_default()
    }

    /// Draw a chart with its title, or a "No data" note when the series is empty.
    pub fn draw(ui: &mut egui::Ui, spec: &ChartSpec<'_>, height: f32) {
        ui.label(RichText::new(spec.title).size(15.0).strong());
        ui.add_space(4.0);

        if spec.data.is_empty() {
            Self::draw_no_data(ui);
            return;
        }

        match spec.kind {
            ChartKind::Line => Self::draw_line_chart(ui, spec.title, spec.data, height),
            ChartKind::Bar => Self::draw_bar_chart(ui, spec.title, spec.data, height),
            ChartKind::Pie => Self::draw_pie_chart(ui, spec.data, height),
        }
    }

    pub fn draw_no_data(ui: &mut egui::Ui) {
        ui.label(RichText::new("No data").italics().color(Color32::GRAY));
    }

    /// Line with markers over categorical x positions.
    pub fn draw_line_chart(ui: &mut egui::Ui, id: &str, data: &[Bucket], height: f32) {
        let labels: Vec<String> = data.iter().map(|b| b.label.clone()).collect();
        let points_vec: Vec<[f64; 2]> = data
            .iter()
            .enumerate()
            .map(|(i, b)| [i as f64, b.value])
            .collect();

        Plot::new(format!("line_{id}"))
            .height(height)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .include_y(0.0)
            .x_axis_formatter(move |mark, _range| Self::category_label(&labels, mark.value))
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from_iter(points_vec.iter().copied()))
                        .color(LINE_COLOR)
                        .width(2.0)
                        .name(id),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(points_vec.iter().copied()))
                        .radius(3.5)
                        .color(LINE_COLOR),
                );
            });
    }

    /// Vertical bars, one per bucket.
    pub fn draw_bar_chart(ui: &mut egui::Ui, id: &str, data: &[Bucket], height: f32) {
        let labels: Vec<String> = data.iter().map(|b| b.label.clone()).collect();
        let bars: Vec<Bar> = data
            .iter()
            .enumerate()
            .map(|(i, b)| Bar::new(i as f64, b.value).name(&b.label).width(0.6))
            .collect();

        Plot::new(format!("bar_{id}"))
            .height(height)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_formatter(move |mark, _range| Self::category_label(&labels, mark.value))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).color(BAR_COLOR).name(id));
            });
    }

    /// Pie drawn with the painter, followed by a legend with percentage shares.
    pub fn draw_pie_chart(ui: &mut egui::Ui, data: &[Bucket], diameter: f32) {
        let total: f64 = data.iter().map(|b| b.value.max(0.0)).sum();
        if total <= 0.0 {
            Self::draw_no_data(ui);
            return;
        }

        let (response, painter) =
            ui.allocate_painter(egui::vec2(diameter, diameter), egui::Sense::hover());
        let center = response.rect.center();
        let radius = diameter / 2.0 - 4.0;

        // Slices are fanned out of thin triangles so every shape stays convex.
        let mut angle = -FRAC_PI_2;
        for (i, bucket) in data.iter().enumerate() {
            let sweep = (bucket.value.max(0.0) / total) as f32 * TAU;
            let steps = ((sweep / TAU) * 96.0).ceil().max(1.0) as usize;
            let color = Self::palette_color(i);
            for step in 0..steps {
                let a0 = angle + sweep * step as f32 / steps as f32;
                let a1 = angle + sweep * (step + 1) as f32 / steps as f32;
                painter.add(egui::Shape::convex_polygon(
                    vec![
                        center,
                        center + egui::vec2(a0.cos(), a0.sin()) * radius,
                        center + egui::vec2(a1.cos(), a1.sin()) * radius,
                    ],
                    color,
                    egui::Stroke::NONE,
                ));
            }
            angle += sweep;
        }

        ui.add_space(6.0);
        for (i, (bucket, share)) in data.iter().zip(shares(data)).enumerate() {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 2.0, Self::palette_color(i));
                ui.label(RichText::new(format!("{} ({:.1}%)", bucket.label, share)).size(12.0));
            });
        }
    }

    /// Two-column table of a series.
    pub fn draw_bucket_table(ui: &mut egui::Ui, id: &str, headers: [&str; 2], data: &[Bucket]) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new(ui.make_persistent_id(format!("bucket_table_{id}")))
                    .striped(true)
                    .min_col_width(120.0)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new(headers[0]).strong().size(12.0));
                        ui.label(RichText::new(headers[1]).strong().size(12.0));
                        ui.end_row();

                        for bucket in data {
                            ui.label(RichText::new(&bucket.label).size(12.0));
                            ui.label(RichText::new(format!("{:.2}", bucket.value)).size(12.0));
                            ui.end_row();
                        }
                    });
            });
    }
}
