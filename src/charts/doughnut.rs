//! Proportional (doughnut) chart of PnL per asset.

use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, TAU};

use crate::charts::ChartError;
use crate::charts::palette::{Palette, RgbColor};
use crate::config::chart::ChartTheme;
use crate::domain::Dataset;
use crate::utils::{format_currency, format_fixed};

/// Outer radius of the ring in chart coordinates.
pub const OUTER_RADIUS: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoughnutSlice {
    pub label: String,
    pub value: f64,
    /// Share of the signed total, rounded to one decimal (0.0 when the total is zero)
    pub percentage: f64,
    pub color: RgbColor,
    pub legend_text: String,
    pub tooltip_title: String,
    pub tooltip_text: String,
    /// Clockwise from 12 o'clock, as fractions of a full turn
    pub start_fraction: f64,
    pub end_fraction: f64,
}

impl DoughnutSlice {
    pub fn sweep(&self) -> f64 {
        self.end_fraction - self.start_fraction
    }

    /// Convex quads approximating this slice of the ring. `reveal` in `[0, 1]`
    /// scales every angle, so slices sweep in together from 12 o'clock.
    pub fn quads(&self, cutout: f64, reveal: f64, segments_per_turn: usize) -> Vec<[[f64; 2]; 4]> {
        let reveal = reveal.clamp(0.0, 1.0);
        let start = self.start_fraction * reveal;
        let end = self.end_fraction * reveal;
        let sweep = end - start;
        if sweep <= 0.0 {
            return Vec::new();
        }

        let inner = OUTER_RADIUS * cutout;
        let steps = ((sweep * segments_per_turn as f64).ceil() as usize).max(1);
        let step = sweep / steps as f64;

        (0..steps)
            .map(|i| {
                let a = start + step * i as f64;
                let b = if i + 1 == steps { end } else { a + step };
                [
                    point_at(a, inner),
                    point_at(a, OUTER_RADIUS),
                    point_at(b, OUTER_RADIUS),
                    point_at(b, inner),
                ]
            })
            .collect()
    }

    /// Closed outline of the slice: outer arc clockwise, then inner arc back.
    pub fn outline(&self, cutout: f64, reveal: f64, segments_per_turn: usize) -> Vec<[f64; 2]> {
        let quads = self.quads(cutout, reveal, segments_per_turn);
        let Some(first) = quads.first() else {
            return Vec::new();
        };

        let mut points = vec![first[0], first[1]];
        points.extend(quads.iter().map(|q| q[2]));
        points.extend(quads.iter().rev().map(|q| q[3]));
        points.push(first[0]);
        points
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoughnutSpec {
    pub slices: Vec<DoughnutSlice>,
    /// Signed sum of all values
    pub total: f64,
    /// Inner radius as a fraction of the outer radius
    pub cutout: f64,
}

impl DoughnutSpec {
    /// Index of the slice drawn under `(x, y)` at `reveal`, or `None` outside
    /// the ring or in the part not yet swept in.
    pub fn slice_at(&self, x: f64, y: f64, reveal: f64) -> Option<usize> {
        let radius = x.hypot(y);
        if radius < OUTER_RADIUS * self.cutout || radius > OUTER_RADIUS {
            return None;
        }
        let reveal = reveal.clamp(0.0, 1.0);
        let fraction = fraction_of_angle(y.atan2(x));
        self.slices.iter().position(|s| {
            s.sweep() > 0.0
                && fraction >= s.start_fraction * reveal
                && fraction < s.end_fraction * reveal
        })
    }
}

/// Share of `total` as a percentage rounded to one decimal place.
/// A zero (or non-finite) total gives `0.0` rather than `NaN`.
pub fn share_percentage(value: f64, total: f64) -> f64 {
    if total == 0.0 || !total.is_finite() {
        return 0.0;
    }
    let raw = value / total * 100.0;
    (raw * 10.0).round() / 10.0
}

pub fn build_doughnut(dataset: &Dataset, theme: &ChartTheme) -> Result<DoughnutSpec, ChartError> {
    let palette = Palette::from_hex(theme.palette)?;
    let colors = palette.assign(dataset.len())?;

    let total = dataset.total_pnl();
    let magnitude: f64 = dataset.records().iter().map(|r| r.pnl.abs()).sum();

    let mut cursor = 0.0;
    let slices = dataset
        .records()
        .iter()
        .zip(colors)
        .map(|(record, color)| {
            let percentage = share_percentage(record.pnl, total);
            let pct_text = format_fixed(percentage, 1);
            let currency = format_currency(record.pnl);

            let sweep = if magnitude > 0.0 {
                record.pnl.abs() / magnitude
            } else {
                0.0
            };
            let start_fraction = cursor;
            cursor = (cursor + sweep).min(1.0);

            DoughnutSlice {
                label: record.name.clone(),
                value: record.pnl,
                percentage,
                color,
                legend_text: format!("{}: {} ({}%)", record.name, currency, pct_text),
                tooltip_title: record.name.clone(),
                tooltip_text: format!("PnL: {} ({}%)", currency, pct_text),
                start_fraction,
                end_fraction: cursor,
            }
        })
        .collect();

    Ok(DoughnutSpec {
        slices,
        total,
        cutout: theme.doughnut.cutout,
    })
}

/// Point on a circle of `radius` at `fraction` of a clockwise turn from 12 o'clock.
pub fn point_at(fraction: f64, radius: f64) -> [f64; 2] {
    let angle = FRAC_PI_2 - TAU * fraction;
    [radius * angle.cos(), radius * angle.sin()]
}

/// Inverse of [`point_at`]'s angle mapping, normalised to `[0, 1)`.
fn fraction_of_angle(angle: f64) -> f64 {
    ((FRAC_PI_2 - angle) / TAU).rem_euclid(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::chart::CHART_THEME;
    use crate::domain::AssetRecord;

    fn trading_spec() -> DoughnutSpec {
        build_doughnut(&Dataset::trading_results(), &CHART_THEME).unwrap()
    }

    #[test]
    fn btc_legend_matches_pinned_text() {
        // 55706.51 / 125027.87 = 44.555...%
        let spec = trading_spec();
        assert_eq!(spec.slices[0].legend_text, "BTC: $55,706.51 (44.6%)");
        assert_eq!(spec.slices[0].tooltip_text, "PnL: $55,706.51 (44.6%)");
        assert_eq!(spec.slices[2].legend_text, "SOL: $19,479.1 (15.6%)");
        assert_eq!(spec.slices[3].legend_text, "ETH: $9,599.69 (7.7%)");
    }

    #[test]
    fn legend_percentages_sum_to_one_hundred() {
        let spec = trading_spec();
        let sum: f64 = spec.slices.iter().map(|s| s.percentage).sum();
        // 44.6 + 32.2 + 15.6 + 7.7
        assert!((sum - 100.0).abs() <= 0.1 + 1e-9, "sum was {}", sum);

        let records = vec![
            AssetRecord::new("A", 1.0, 50.0, 1, "#000000"),
            AssetRecord::new("B", 1.0, 50.0, 1, "#000000"),
            AssetRecord::new("C", 1.0, 50.0, 1, "#000000"),
        ];
        let spec = build_doughnut(&Dataset::new(records), &CHART_THEME).unwrap();
        let sum: f64 = spec.slices.iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() <= 0.05 * 3.0 + 1e-9, "sum was {}", sum);
    }

    #[test]
    fn zero_total_falls_back_to_zero_percent() {
        let records = vec![
            AssetRecord::new("UP", 50.0, 50.0, 1, "#000000"),
            AssetRecord::new("DOWN", -50.0, 50.0, 1, "#000000"),
        ];
        let spec = build_doughnut(&Dataset::new(records), &CHART_THEME).unwrap();
        assert_eq!(spec.slices[0].legend_text, "UP: $50 (0.0%)");
        assert_eq!(spec.slices[1].legend_text, "DOWN: -$50 (0.0%)");
        // magnitudes still split the ring
        assert!((spec.slices[0].sweep() - 0.5).abs() < 1e-12);
        assert!((spec.slices[1].end_fraction - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_dataset_has_no_slices() {
        let spec = build_doughnut(&Dataset::default(), &CHART_THEME).unwrap();
        assert!(spec.slices.is_empty());
        assert_eq!(spec.total, 0.0);
        assert_eq!(spec.slice_at(0.0, 0.8, 1.0), None);
    }

    #[test]
    fn slices_cover_the_ring_in_order() {
        let spec = trading_spec();
        assert_eq!(spec.slices[0].start_fraction, 0.0);
        for pair in spec.slices.windows(2) {
            assert_eq!(pair[0].end_fraction, pair[1].start_fraction);
        }
        let last = spec.slices.last().unwrap();
        assert!((last.end_fraction - 1.0).abs() < 1e-9);
    }

    #[test]
    fn hit_test_finds_slice_under_point() {
        let spec = trading_spec();
        // Just right of 12 o'clock sits the first slice (BTC).
        let [x, y] = point_at(0.01, 0.8);
        assert_eq!(spec.slice_at(x, y, 1.0), Some(0));
        // Just left of 12 o'clock is the last slice (ETH).
        let [x, y] = point_at(0.99, 0.8);
        assert_eq!(spec.slice_at(x, y, 1.0), Some(3));
        // The hole and the outside miss.
        assert_eq!(spec.slice_at(0.0, 0.1, 1.0), None);
        assert_eq!(spec.slice_at(1.5, 0.0, 1.0), None);
    }

    #[test]
    fn hit_test_ignores_the_part_not_yet_revealed() {
        let spec = trading_spec();
        let [x, y] = point_at(0.99, 0.8);
        assert_eq!(spec.slice_at(x, y, 0.5), None);
        assert_eq!(spec.slice_at(x, y, 0.0), None);

        // Half revealed, the ring covers half a turn: BTC ends near 0.223, HYPE near 0.384.
        let [x, y] = point_at(0.2, 0.8);
        assert_eq!(spec.slice_at(x, y, 0.5), Some(0));
        let [x, y] = point_at(0.3, 0.8);
        assert_eq!(spec.slice_at(x, y, 0.5), Some(1));
        let [x, y] = point_at(0.6, 0.8);
        assert_eq!(spec.slice_at(x, y, 0.5), None);
    }

    #[test]
    fn mixed_signs_keep_signed_shares() {
        let records = vec![
            AssetRecord::new("WIN", 300.0, 80.0, 4, "#000000"),
            AssetRecord::new("LOSS", -100.0, 20.0, 5, "#000000"),
        ];
        let spec = build_doughnut(&Dataset::new(records), &CHART_THEME).unwrap();
        assert_eq!(spec.total, 200.0);
        assert_eq!(spec.slices[0].percentage, 150.0);
        assert_eq!(spec.slices[1].percentage, -50.0);
        let sum: f64 = spec.slices.iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() <= 0.1, "sum was {}", sum);

        assert_eq!(spec.slices[0].legend_text, "WIN: $300 (150.0%)");
        assert_eq!(spec.slices[1].legend_text, "LOSS: -$100 (-50.0%)");
        assert_eq!(spec.slices[1].tooltip_text, "PnL: -$100 (-50.0%)");

        // the ring itself splits by magnitude: 300 / 400 and 100 / 400
        assert!((spec.slices[0].sweep() - 0.75).abs() < 1e-12);
        assert!((spec.slices[1].end_fraction - 1.0).abs() < 1e-12);
    }

    #[test]
    fn quads_scale_with_reveal() {
        let spec = trading_spec();
        let slice = &spec.slices[1];
        assert!(slice.quads(0.6, 0.0, 180).is_empty());
        let full = slice.quads(0.6, 1.0, 180);
        assert!(!full.is_empty());
        let half = slice.quads(0.6, 0.5, 180);
        assert!(half.len() <= full.len());
        // The final edge of a fully revealed slice lands on its end angle.
        let last = full.last().unwrap();
        let expected = point_at(slice.end_fraction, OUTER_RADIUS);
        assert!((last[2][0] - expected[0]).abs() < 1e-9);
        assert!((last[2][1] - expected[1]).abs() < 1e-9);
    }

    #[test]
    fn outline_is_closed() {
        let spec = trading_spec();
        let outline = spec.slices[0].outline(0.6, 1.0, 180);
        assert!(outline.len() > 4);
        assert_eq!(outline.first(), outline.last());
        assert!(spec.slices[0].outline(0.6, 0.0, 180).is_empty());
    }
}
