//! Charts module - Chart rendering

mod plotter;
mod renderer;

pub use plotter::{ChartPlotter, PALETTE};
pub use renderer::{safe_file_name, RenderError, StaticChartRenderer};

use crate::analysis::Bucket;

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

/// A titled series ready to be drawn on screen or exported.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec<'a> {
    pub title: &'static str,
    pub kind: ChartKind,
    pub data: &'a [Bucket],
}

impl<'a> ChartSpec<'a> {
    pub fn new(title: &'static str, kind: ChartKind, data: &'a [Bucket]) -> Self {
        Self { title, kind, data }
    }
}
