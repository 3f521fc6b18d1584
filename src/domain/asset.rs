use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// One row of trading statistics for a single asset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetRecord {
    pub name: String,
    /// Realised profit/loss in USD (signed)
    pub pnl: f64,
    /// Percentage of winning trades, 0..=100
    pub win_rate: f64,
    pub trades: u32,
    /// Accent color of the asset itself (hex), used by the asset cards
    pub color: &'static str,
}

impl AssetRecord {
    pub fn new(name: &str, pnl: f64, win_rate: f64, trades: u32, color: &'static str) -> Self {
        Self {
            name: name.to_string(),
            pnl,
            win_rate,
            trades,
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DatasetError {
    EmptyName { index: usize },
    DuplicateName(String),
    NonFinitePnl(String),
    WinRateOutOfRange { name: String, win_rate: f64 },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::EmptyName { index } => write!(f, "Asset #{} has an empty name", index),
            DatasetError::DuplicateName(name) => write!(f, "Asset name '{}' appears twice", name),
            DatasetError::NonFinitePnl(name) => write!(f, "Asset '{}' has a non-finite PnL", name),
            DatasetError::WinRateOutOfRange { name, win_rate } => write!(
                f,
                "Asset '{}' has win rate {} outside 0..=100",
                name, win_rate
            ),
        }
    }
}

impl std::error::Error for DatasetError {}

/// Ordered asset records. Order drives chart category order and palette assignment.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    records: Vec<AssetRecord>,
}

impl Dataset {
    pub fn new(records: Vec<AssetRecord>) -> Self {
        Self { records }
    }

    /// The compiled-in trading results shown by the dashboard.
    pub fn trading_results() -> Self {
        Self::new(vec![
            AssetRecord::new("BTC", 55_706.51, 95.0, 20, "#f7931a"),
            AssetRecord::new("HYPE", 40_242.57, 100.0, 106, "#00ff88"),
            AssetRecord::new("SOL", 19_479.10, 100.0, 30, "#9945ff"),
            AssetRecord::new("ETH", 9_599.69, 81.8, 11, "#627eea"),
        ])
    }

    pub fn records(&self) -> &[AssetRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&AssetRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    /// Signed sum of every record's PnL. Computed on demand, never cached.
    pub fn total_pnl(&self) -> f64 {
        self.records.iter().map(|r| r.pnl).sum()
    }

    pub fn total_trades(&self) -> u64 {
        self.records.iter().map(|r| r.trades as u64).sum()
    }

    /// Checks the record invariants; the first violation found is returned.
    pub fn validate(&self) -> Result<(), DatasetError> {
        let mut seen = HashSet::new();
        for (index, record) in self.records.iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(DatasetError::EmptyName { index });
            }
            if !seen.insert(record.name.as_str()) {
                return Err(DatasetError::DuplicateName(record.name.clone()));
            }
            if !record.pnl.is_finite() {
                return Err(DatasetError::NonFinitePnl(record.name.clone()));
            }
            if !(0.0..=100.0).contains(&record.win_rate) {
                return Err(DatasetError::WinRateOutOfRange {
                    name: record.name.clone(),
                    win_rate: record.win_rate,
                });
            }
        }
        Ok(())
    }
}
