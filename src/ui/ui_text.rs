/// All user-facing strings of the dashboard.
pub struct UiText {
    pub app_title: &'static str,
    pub app_subtitle: &'static str,
    pub stats_heading: &'static str,
    pub assets_heading: &'static str,
    pub charts_heading: &'static str,
    pub pnl_chart_title: &'static str,
    pub winrate_chart_title: &'static str,
    pub label_win_rate: &'static str,
    pub label_trades: &'static str,
    pub empty_dataset: &'static str,
    pub invalid_dataset_prefix: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "Trading Performance",
    app_subtitle: "Realised PnL and win rate by asset",
    stats_heading: "Overview",
    assets_heading: "Assets",
    charts_heading: "Breakdown",
    pnl_chart_title: "PnL Distribution",
    winrate_chart_title: "Win Rate by Asset",
    label_win_rate: "Win Rate",
    label_trades: "Trades",
    empty_dataset: "No assets to display",
    invalid_dataset_prefix: "Dataset problem: ",
};
