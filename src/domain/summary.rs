//! Portfolio-level figures shown on the stat cards, plus the typed fields the
//! dashboard binds its animated labels to.

use strum_macros::{Display, EnumIter};

use crate::domain::asset::Dataset;
use crate::utils::{format_fixed, format_signed_currency, group_thousands};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum StatKind {
    #[strum(to_string = "Total PnL")]
    TotalPnl,
    #[strum(to_string = "Win Rate")]
    WinRate,
    #[strum(to_string = "Total Trades")]
    TotalTrades,
    #[strum(to_string = "Assets Traded")]
    AssetCount,
}

/// A numeric label on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayField {
    Stat(StatKind),
    /// PnL of the asset card at this dataset index
    CoinPnl(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSummary {
    pub total_pnl: f64,
    /// Trade-weighted win rate, 0..=100
    pub win_rate: f64,
    pub total_trades: u64,
    pub asset_count: usize,
}

impl PortfolioSummary {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let total_trades = dataset.total_trades();
        let win_rate = if total_trades == 0 {
            0.0
        } else {
            let weighted: f64 = dataset
                .records()
                .iter()
                .map(|r| r.win_rate * r.trades as f64)
                .sum();
            weighted / total_trades as f64
        };

        Self {
            total_pnl: dataset.total_pnl(),
            win_rate,
            total_trades,
            asset_count: dataset.len(),
        }
    }

    /// Statically rendered text of a stat card, before any animation.
    pub fn stat_text(&self, kind: StatKind) -> String {
        match kind {
            StatKind::TotalPnl => format_signed_currency(self.total_pnl),
            StatKind::WinRate => format!("{}%", format_fixed(self.win_rate, 1)),
            StatKind::TotalTrades => group_thousands(self.total_trades),
            StatKind::AssetCount => self.asset_count.to_string(),
        }
    }
}

/// Every numeric field of the dashboard paired with its initial text, in display order.
pub fn display_fields(dataset: &Dataset) -> Vec<(DisplayField, String)> {
    use strum::IntoEnumIterator;

    let summary = PortfolioSummary::from_dataset(dataset);
    let stats = StatKind::iter().map(|kind| (DisplayField::Stat(kind), summary.stat_text(kind)));
    let coins = dataset
        .records()
        .iter()
        .enumerate()
        .map(|(i, r)| (DisplayField::CoinPnl(i), format_signed_currency(r.pnl)));

    stats.chain(coins).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::asset::AssetRecord;

    #[test]
    fn summary_of_trading_results() {
        let summary = PortfolioSummary::from_dataset(&Dataset::trading_results());
        assert!((summary.total_pnl - 125_027.87).abs() < 1e-6);
        assert_eq!(summary.total_trades, 167);
        assert_eq!(summary.asset_count, 4);
        // (95*20 + 100*106 + 100*30 + 81.8*11) / 167
        assert!((summary.win_rate - 98.2023).abs() < 1e-3);

        assert_eq!(summary.stat_text(StatKind::TotalPnl), "+$125,027.87");
        assert_eq!(summary.stat_text(StatKind::WinRate), "98.2%");
        assert_eq!(summary.stat_text(StatKind::TotalTrades), "167");
    }

    #[test]
    fn zero_trades_has_zero_win_rate() {
        let dataset = Dataset::new(vec![AssetRecord::new("BTC", 10.0, 50.0, 0, "#f7931a")]);
        let summary = PortfolioSummary::from_dataset(&dataset);
        assert_eq!(summary.win_rate, 0.0);
    }

    #[test]
    fn display_fields_cover_stats_then_coins() {
        let fields = display_fields(&Dataset::trading_results());
        assert_eq!(fields.len(), 4 + 4);
        assert_eq!(fields[0].0, DisplayField::Stat(StatKind::TotalPnl));
        assert_eq!(fields[4], (DisplayField::CoinPnl(0), "+$55,706.51".to_string()));
        assert_eq!(fields[7], (DisplayField::CoinPnl(3), "+$9,599.69".to_string()));
    }
}
