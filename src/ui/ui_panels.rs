use eframe::egui::{Color32, RichText, Ui, Vec2};
use strum::IntoEnumIterator;

use crate::animation::NumericAnimator;
use crate::charts::{ChartError, RgbColor};
use crate::config::chart::ChartTheme;
use crate::domain::{AssetRecord, Dataset, DisplayField, StatKind};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{check_surface, section_heading};
use crate::utils::format_plain;

/// Color of a signed figure: profit green, loss red.
fn sign_color(text: &str) -> Color32 {
    if text.trim_start().starts_with('-') {
        UI_CONFIG.colors.loss
    } else {
        UI_CONFIG.colors.profit
    }
}

/// One card per portfolio figure, values read from the animator.
pub fn render_stats_row(ui: &mut Ui, animator: &NumericAnimator<DisplayField>) {
    section_heading(ui, UI_TEXT.stats_heading);

    let kinds: Vec<StatKind> = StatKind::iter().collect();
    ui.columns(kinds.len(), |columns| {
        for (column, kind) in columns.iter_mut().zip(kinds) {
            column.card(|ui| {
                ui.set_width(ui.available_width());
                ui.label_subdued(kind.to_string());
                let text = animator
                    .text(&DisplayField::Stat(kind))
                    .unwrap_or_default();
                let color = match kind {
                    StatKind::TotalPnl => sign_color(text),
                    _ => UI_CONFIG.colors.subsection_heading,
                };
                ui.label_figure(text, color);
            });
        }
    });
}

/// One card per asset: name in the asset's own color, animated PnL, static win rate and trades.
pub fn render_asset_cards(
    ui: &mut Ui,
    dataset: &Dataset,
    animator: &NumericAnimator<DisplayField>,
) {
    section_heading(ui, UI_TEXT.assets_heading);

    if dataset.is_empty() {
        ui.label_subdued(UI_TEXT.empty_dataset);
        return;
    }

    ui.columns(dataset.len(), |columns| {
        for (index, (column, record)) in columns.iter_mut().zip(dataset.records()).enumerate() {
            column.card(|ui| {
                ui.set_width(ui.available_width());
                render_asset_card(ui, index, record, animator);
            });
        }
    });
}

fn render_asset_card(
    ui: &mut Ui,
    index: usize,
    record: &AssetRecord,
    animator: &NumericAnimator<DisplayField>,
) {
    let accent = RgbColor::parse(record.color)
        .map(RgbColor::to_color32)
        .unwrap_or(UI_CONFIG.colors.label);

    ui.label(RichText::new(&record.name).strong().size(18.0).color(accent));
    let pnl = animator
        .text(&DisplayField::CoinPnl(index))
        .unwrap_or_default();
    ui.label_figure(pnl, sign_color(pnl));
    ui.metric(
        UI_TEXT.label_win_rate,
        &format!("{}%", format_plain(record.win_rate)),
        UI_CONFIG.colors.subsection_heading,
    );
    ui.metric(
        UI_TEXT.label_trades,
        &record.trades.to_string(),
        UI_CONFIG.colors.subsection_heading,
    );
}

/// Card around one chart. A failed spec or a missing surface shows an inline
/// error for this chart only.
pub fn render_chart_card<S>(
    ui: &mut Ui,
    title: &str,
    surface_name: &'static str,
    theme: &ChartTheme,
    spec: &Result<S, ChartError>,
    draw: impl FnOnce(&mut Ui, &S),
) {
    ui.card(|ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(title).strong().color(theme.text_color));
        ui.add_space(6.0);

        let surface = Vec2::new(ui.available_width(), UI_CONFIG.chart_height);
        let ready = spec
            .as_ref()
            .map_err(Clone::clone)
            .and_then(|spec| check_surface(surface, surface_name).map(|_| spec));

        match ready {
            Ok(spec) => draw(ui, spec),
            Err(e) => ui.label_error(e.to_string()),
        }
    });
}
