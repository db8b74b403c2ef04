//! Static Chart Renderer
//! Exports the charts of a report as PNG images with plotters, next to a JSON
//! dump of the report itself.
//!
//! Layout of every image:
//! 1. Title centered on top
//! 2. Line and bar charts: category x axis with bucket labels, amounts on y
//! 3. Pie charts: slices labelled with their percentage share

use super::plotter::{ChartPlotter, BAR_COLOR, LINE_COLOR};
use super::{ChartKind, ChartSpec};
use crate::analysis::{shares, Bucket};
use crate::report::Report;
use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const IMAGE_WIDTH: u32 = 1000;
const IMAGE_HEIGHT: u32 = 700;
const FONT: &str = "sans-serif";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to draw chart: {0}")]
    Draw(String),
}

fn draw_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Draw(e.to_string())
}

fn rgb(color: egui::Color32) -> RGBColor {
    RGBColor(color.r(), color.g(), color.b())
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Write `<stem>.json` and one PNG per chart of the report into `dir`.
    /// Returns the written paths, JSON first.
    pub fn export_report(report: &Report, dir: &Path) -> Result<Vec<PathBuf>, RenderError> {
        fs::create_dir_all(dir)?;
        let stem = report.file_stem();

        let json_path = dir.join(format!("{stem}.json"));
        fs::write(&json_path, report.to_json()?)?;
        let mut written = vec![json_path];

        for spec in report.chart_specs() {
            let path = dir.join(format!("{stem}_{}.png", safe_file_name(spec.title)));
            Self::render_png(&spec, &path, IMAGE_WIDTH, IMAGE_HEIGHT)?;
            written.push(path);
        }

        log::info!("Exported {} files to {}", written.len(), dir.display());
        Ok(written)
    }

    /// Render a single chart into a PNG file.
    pub fn render_png(
        spec: &ChartSpec<'_>,
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), RenderError> {
        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        if spec.data.is_empty() {
            Self::draw_no_data(&root, spec.title)?;
        } else {
            match spec.kind {
                ChartKind::Line => Self::draw_line(&root, spec)?,
                ChartKind::Bar => Self::draw_bars(&root, spec)?,
                ChartKind::Pie => Self::draw_pie(&root, spec)?,
            }
        }

        root.present().map_err(draw_err)?;
        log::debug!("Rendered '{}' to {}", spec.title, path.display());
        Ok(())
    }

    fn y_range(data: &[Bucket]) -> std::ops::Range<f64> {
        let max = data.iter().map(|b| b.value).fold(0.0, f64::max);
        0.0..if max > 0.0 { max * 1.1 } else { 1.0 }
    }

    fn x_range(data: &[Bucket]) -> std::ops::Range<f64> {
        -0.5..(data.len() as f64 - 0.5)
    }

    fn draw_line<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        spec: &ChartSpec<'_>,
    ) -> Result<(), RenderError> {
        let labels: Vec<String> = spec.data.iter().map(|b| b.label.clone()).collect();
        let label_fmt = |x: &f64| ChartPlotter::category_label(&labels, *x);

        let mut chart = ChartBuilder::on(root)
            .caption(spec.title, (FONT, 26))
            .margin(20)
            .x_label_area_size(70)
            .y_label_area_size(80)
            .build_cartesian_2d(Self::x_range(spec.data), Self::y_range(spec.data))
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(spec.data.len().min(24))
            .x_label_formatter(&label_fmt)
            .y_desc("Cr")
            .draw()
            .map_err(draw_err)?;

        let color = rgb(LINE_COLOR);
        let points: Vec<(f64, f64)> = spec
            .data
            .iter()
            .enumerate()
            .map(|(i, b)| (i as f64, b.value))
            .collect();

        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))
            .map_err(draw_err)?;
        chart
            .draw_series(points.iter().map(|&p| Circle::new(p, 4, color.filled())))
            .map_err(draw_err)?;

        Ok(())
    }

    fn draw_bars<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        spec: &ChartSpec<'_>,
    ) -> Result<(), RenderError> {
        let labels: Vec<String> = spec.data.iter().map(|b| b.label.clone()).collect();
        let label_fmt = |x: &f64| ChartPlotter::category_label(&labels, *x);

        let mut chart = ChartBuilder::on(root)
            .caption(spec.title, (FONT, 26))
            .margin(20)
            .x_label_area_size(70)
            .y_label_area_size(80)
            .build_cartesian_2d(Self::x_range(spec.data), Self::y_range(spec.data))
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(spec.data.len().min(24))
            .x_label_formatter(&label_fmt)
            .y_desc("Cr")
            .draw()
            .map_err(draw_err)?;

        let color = rgb(BAR_COLOR);
        chart
            .draw_series(spec.data.iter().enumerate().map(|(i, b)| {
                let x = i as f64;
                Rectangle::new([(x - 0.3, 0.0), (x + 0.3, b.value)], color.filled())
            }))
            .map_err(draw_err)?;

        Ok(())
    }

    fn draw_pie<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        spec: &ChartSpec<'_>,
    ) -> Result<(), RenderError> {
        let area = root.titled(spec.title, (FONT, 26)).map_err(draw_err)?;

        let sizes: Vec<f64> = spec.data.iter().map(|b| b.value.max(0.0)).collect();
        if sizes.iter().sum::<f64>() <= 0.0 {
            return Self::draw_no_data(&area, "");
        }

        let (width, height) = area.dim_in_pixel();
        let center = ((width / 2) as i32, (height / 2) as i32);
        let radius = f64::from(width.min(height)) * 0.32;
        let colors: Vec<RGBColor> = (0..sizes.len())
            .map(|i| rgb(ChartPlotter::palette_color(i)))
            .collect();
        let labels: Vec<String> = spec
            .data
            .iter()
            .zip(shares(spec.data))
            .map(|(b, share)| format!("{} ({share:.1}%)", b.label))
            .collect();

        let pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        area.draw(&pie).map_err(draw_err)?;
        Ok(())
    }

    fn draw_no_data<DB: DrawingBackend>(
        area: &DrawingArea<DB, Shift>,
        title: &str,
    ) -> Result<(), RenderError> {
        let area = if title.is_empty() {
            area.clone()
        } else {
            area.titled(title, (FONT, 26)).map_err(draw_err)?
        };
        let (width, height) = area.dim_in_pixel();
        area.draw(&Text::new(
            "No data",
            ((width / 2) as i32 - 40, (height / 2) as i32),
            (FONT, 22).into_font(),
        ))
        .map_err(draw_err)?;
        Ok(())
    }
}

/// Replace anything but alphanumerics, `_` and `-` so the name is filesystem safe.
pub fn safe_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
