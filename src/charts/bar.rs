//! Categorical (bar) chart of win rate per asset.

use serde::Serialize;

use crate::charts::ChartError;
use crate::charts::palette::{Palette, RgbColor};
use crate::config::chart::ChartTheme;
use crate::domain::Dataset;
use crate::utils::{format_currency, format_plain};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarEntry {
    pub label: String,
    pub win_rate: f64,
    /// Fill and border share this color
    pub color: RgbColor,
    pub tooltip_title: String,
    /// Win rate, trade count, PnL, in that order
    pub tooltip_lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSpec {
    pub bars: Vec<BarEntry>,
    pub y_max: f64,
    pub y_ticks: Vec<f64>,
    pub bar_width: f64,
}

impl BarSpec {
    /// Index of the category column containing `x`, if `y` is inside the value range.
    /// Bar `i` is centred on `x = i`.
    pub fn bar_at(&self, x: f64, y: f64) -> Option<usize> {
        if self.bars.is_empty() || !(0.0..=self.y_max).contains(&y) {
            return None;
        }
        let index = x.round();
        if index < 0.0 || index >= self.bars.len() as f64 {
            return None;
        }
        Some(index as usize)
    }

    /// Category name for an x-axis grid mark, empty between categories.
    pub fn category_label(&self, x: f64) -> &str {
        if (x - x.round()).abs() > 1e-6 || x < 0.0 {
            return "";
        }
        self.bars
            .get(x.round() as usize)
            .map(|b| b.label.as_str())
            .unwrap_or("")
    }
}

/// Convex outline of a bar centred on `x` from `0` to `top`, with the two top
/// corners rounded by elliptical arcs of `radius` (clamped to fit the bar).
pub fn rounded_bar(
    x: f64,
    half_width: f64,
    top: f64,
    radius: [f64; 2],
    segments: usize,
) -> Vec<[f64; 2]> {
    if top <= 0.0 || half_width <= 0.0 {
        return Vec::new();
    }
    let rx = radius[0].clamp(0.0, half_width);
    let ry = radius[1].clamp(0.0, top);
    let left = x - half_width;
    let right = x + half_width;

    let mut points = vec![[left, 0.0], [right, 0.0]];
    if rx == 0.0 || ry == 0.0 || segments == 0 {
        points.extend([[right, top], [left, top]]);
        return points;
    }

    // Right corner sweeps 0 -> 90 degrees, left corner 90 -> 180.
    let arc = |cx: f64, from: f64| {
        (0..=segments).map(move |i| {
            let angle = from + std::f64::consts::FRAC_PI_2 * i as f64 / segments as f64;
            [cx + rx * angle.cos(), top - ry + ry * angle.sin()]
        })
    };
    points.extend(arc(right - rx, 0.0));
    points.extend(arc(left + rx, std::f64::consts::FRAC_PI_2));
    points
}

/// Y-axis tick text: the value with a `%` suffix.
pub fn y_tick_label(value: f64) -> String {
    format!("{}%", format_plain(value))
}

pub fn build_bar(dataset: &Dataset, theme: &ChartTheme) -> Result<BarSpec, ChartError> {
    let palette = Palette::from_hex(theme.palette)?;
    let colors = palette.assign(dataset.len())?;

    let bars = dataset
        .records()
        .iter()
        .zip(colors)
        .map(|(record, color)| BarEntry {
            label: record.name.clone(),
            win_rate: record.win_rate,
            color,
            tooltip_title: record.name.clone(),
            tooltip_lines: vec![
                format!("Win Rate: {}%", format_plain(record.win_rate)),
                format!("Trades: {}", record.trades),
                format!("PnL: {}", format_currency(record.pnl)),
            ],
        })
        .collect();

    let step = theme.bar.y_tick_step;
    let y_ticks = if step > 0.0 {
        let count = (theme.bar.y_max / step).floor() as usize;
        (0..=count).map(|i| i as f64 * step).collect()
    } else {
        vec![0.0, theme.bar.y_max]
    };

    Ok(BarSpec {
        bars,
        y_max: theme.bar.y_max,
        y_ticks,
        bar_width: theme.bar.bar_width,
    })
}
