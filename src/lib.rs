#![allow(clippy::collapsible_if)]

// Core modules
pub mod animation;
pub mod charts;
pub mod config;
pub mod domain;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use animation::{LabelBinding, NumericAnimator};
pub use charts::{BarSpec, ChartError, ChartSet, DoughnutSpec};
pub use domain::{AssetRecord, Dataset};
pub use ui::DashboardApp;
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;
use serde::Serialize;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print both chart specs as JSON and exit without opening a window
    #[arg(long, default_value_t = false)]
    pub dump_specs: bool,

    /// Show final values immediately instead of counting up
    #[arg(long, default_value_t = false)]
    pub no_animation: bool,
}

/// Serializable view of both charts, one entry per chart so a failed chart
/// reports its error without hiding the other.
#[derive(Serialize)]
pub struct SpecDump<'a> {
    pub doughnut: Result<&'a DoughnutSpec, String>,
    pub bar: Result<&'a BarSpec, String>,
}

impl<'a> SpecDump<'a> {
    pub fn from_charts(charts: &'a ChartSet) -> Self {
        Self {
            doughnut: charts.doughnut.as_ref().map_err(|e| e.to_string()),
            bar: charts.bar.as_ref().map_err(|e| e.to_string()),
        }
    }
}

/// Pretty JSON of both chart specs for `dataset`.
pub fn dump_specs(dataset: &Dataset) -> anyhow::Result<String> {
    let charts = ChartSet::build(dataset, &config::CHART_THEME);
    let json = serde_json::to_string_pretty(&SpecDump::from_charts(&charts))?;
    Ok(json)
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, animate: bool) -> Box<dyn eframe::App> {
    let app = ui::DashboardApp::new(cc, Dataset::trading_results(), animate);
    Box::new(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_contains_both_charts() {
        let json = dump_specs(&Dataset::trading_results()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let slices = value["doughnut"]["Ok"]["slices"].as_array().unwrap();
        assert_eq!(slices.len(), 4);
        assert_eq!(slices[0]["legend_text"], "BTC: $55,706.51 (44.6%)");
        assert_eq!(slices[0]["color"], "#1fb8cd");
        let bars = value["bar"]["Ok"]["bars"].as_array().unwrap();
        assert_eq!(bars[1]["tooltip_lines"][1], "Trades: 106");
    }

    #[test]
    fn cli_flags_parse() {
        let cli = Cli::parse_from(["pnl-dashboard", "--dump-specs", "--no-animation"]);
        assert!(cli.dump_specs);
        assert!(cli.no_animation);
        let cli = Cli::parse_from(["pnl-dashboard"]);
        assert!(!cli.dump_specs);
    }
}
