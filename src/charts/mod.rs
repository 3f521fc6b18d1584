//! Chart renderer: pure builders that map a [`Dataset`] to the two chart specs
//! the dashboard draws. Nothing in here touches egui state, so every label,
//! color and slice angle can be checked without a rendering surface.

pub mod bar;
pub mod doughnut;
pub mod palette;

use std::fmt;

pub use bar::{BarEntry, BarSpec, build_bar};
pub use doughnut::{DoughnutSlice, DoughnutSpec, build_doughnut};
pub use palette::{Palette, RgbColor};

use crate::config::chart::ChartTheme;
use crate::domain::Dataset;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Failures that stop a single chart from rendering. They never cross over to
/// the other chart.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    /// A palette entry could not be parsed as a color
    InvalidColor(String),
    /// The dataset has categories but the palette has no colors to give them
    EmptyPalette,
    /// The area the chart should be drawn into is missing or has no size
    MissingSurface(&'static str),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::InvalidColor(msg) => write!(f, "Invalid palette color: {}", msg),
            ChartError::EmptyPalette => write!(f, "Palette has no colors"),
            ChartError::MissingSurface(chart) => write!(f, "No drawing surface for {}", chart),
        }
    }
}

impl std::error::Error for ChartError {}

/// Both charts, each built on its own.
pub struct ChartSet {
    pub doughnut: Result<DoughnutSpec, ChartError>,
    pub bar: Result<BarSpec, ChartError>,
}

impl ChartSet {
    pub fn build(dataset: &Dataset, theme: &ChartTheme) -> Self {
        let doughnut = build_doughnut(dataset, theme);
        let bar = build_bar(dataset, theme);

        if let Err(e) = &doughnut {
            log::error!("PnL distribution chart unavailable: {}", e);
        }
        if let Err(e) = &bar {
            log::error!("Win rate chart unavailable: {}", e);
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_chart_specs {
            if let Ok(spec) = &doughnut {
                for slice in &spec.slices {
                    log::info!("[doughnut] {}", slice.legend_text);
                }
            }
            if let Ok(spec) = &bar {
                for entry in &spec.bars {
                    log::info!("[bar] {}: {}", entry.label, entry.tooltip_lines.join(" | "));
                }
            }
        }

        Self { doughnut, bar }
    }
}
