use eframe::{Frame, egui};
use std::time::Duration;

use crate::animation::{LabelBinding, NumericAnimator, ease_out_quart};
use crate::charts::ChartSet;
use crate::config::ANIMATION;
use crate::config::chart::{CHART_THEME, ChartTheme};
use crate::domain::{Dataset, DisplayField, display_fields};
use crate::ui::config::UI_TEXT;
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{render_asset_cards, render_chart_card, render_stats_row};
use crate::ui::ui_plot_view::{show_bar, show_doughnut};
use crate::ui::utils::{setup_custom_visuals, spaced_separator};
use crate::utils::app_time::{AppInstant, now, progress_between};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

pub struct DashboardApp {
    dataset: Dataset,
    theme: &'static ChartTheme,
    charts: ChartSet,
    animator: NumericAnimator<DisplayField>,
    started_at: AppInstant,
    animate: bool,
    dataset_issue: Option<String>,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, dataset: Dataset, animate: bool) -> Self {
        setup_custom_visuals(&cc.egui_ctx);
        Self::with_start(dataset, animate, now())
    }

    /// Builds both charts and starts the counters at `started_at`.
    pub fn with_start(dataset: Dataset, animate: bool, started_at: AppInstant) -> Self {
        let dataset_issue = match dataset.validate() {
            Ok(()) => None,
            Err(e) => {
                log::warn!("Rendering dataset with problems: {}", e);
                Some(e.to_string())
            }
        };

        let theme = &CHART_THEME;
        let charts = ChartSet::build(&dataset, theme);

        let bindings = display_fields(&dataset)
            .into_iter()
            .map(|(field, text)| LabelBinding::new(field, text));
        let mut animator = NumericAnimator::new(bindings, ANIMATION.counter_duration());
        if animate {
            animator.start(started_at);
        } else {
            animator.settle_all();
        }

        log::info!(
            "Dashboard ready: {} assets, animation {}",
            dataset.len(),
            if animate { "on" } else { "off" }
        );

        Self {
            dataset,
            theme,
            charts,
            animator,
            started_at,
            animate,
            dataset_issue,
        }
    }

    /// Eased sweep/grow progress of the charts at `at`.
    pub fn reveal_progress(&self, at: AppInstant) -> f64 {
        if !self.animate {
            return 1.0;
        }
        let duration = Duration::from_millis(self.theme.reveal_duration_ms);
        ease_out_quart(progress_between(self.started_at, at, duration))
    }

    /// Advances all time-driven state. Returns `true` while another frame is needed.
    pub fn advance(&mut self, at: AppInstant) -> bool {
        let counting = self.animator.tick(at);
        counting || self.reveal_progress(at) < 1.0
    }

    pub fn animator(&self) -> &NumericAnimator<DisplayField> {
        &self.animator
    }

    pub fn charts(&self) -> &ChartSet {
        &self.charts
    }

    fn render_header(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.label_header(UI_TEXT.app_title);
            ui.label_subdued(UI_TEXT.app_subtitle);
            if let Some(issue) = &self.dataset_issue {
                ui.label_error(format!("{}{}", UI_TEXT.invalid_dataset_prefix, issue));
            }
            ui.add_space(8.0);
        });
    }

    fn render_central_panel(&self, ctx: &egui::Context, reveal: f64) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                render_stats_row(ui, &self.animator);
                spaced_separator(ui);
                render_asset_cards(ui, &self.dataset, &self.animator);
                spaced_separator(ui);
                self.render_charts(ui, reveal);
            });
        });
    }

    fn render_charts(&self, ui: &mut egui::Ui, reveal: f64) {
        crate::ui::utils::section_heading(ui, UI_TEXT.charts_heading);
        let theme = self.theme;

        ui.columns(2, |columns| {
            render_chart_card(
                &mut columns[0],
                UI_TEXT.pnl_chart_title,
                "PnL distribution chart",
                theme,
                &self.charts.doughnut,
                |ui, spec| show_doughnut(ui, spec, theme, reveal),
            );
            render_chart_card(
                &mut columns[1],
                UI_TEXT.winrate_chart_title,
                "win rate chart",
                theme,
                &self.charts.bar,
                |ui, spec| show_bar(ui, spec, theme, reveal),
            );
        });
    }
}

impl eframe::App for DashboardApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let frame_time = now();
        let needs_frame = self.advance(frame_time);
        let reveal = self.reveal_progress(frame_time);

        self.render_header(ctx);
        self.render_central_panel(ctx, reveal);

        if needs_frame {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::CounterPhase;
    use crate::domain::StatKind;

    #[test]
    fn counters_and_reveal_finish_after_their_durations() {
        let t0 = AppInstant::now();
        let mut app = DashboardApp::with_start(Dataset::trading_results(), true, t0);

        assert_eq!(app.reveal_progress(t0), 0.0);
        assert!(app.advance(t0 + Duration::from_millis(1000)));
        assert_eq!(
            app.animator().phase(&DisplayField::CoinPnl(0)),
            Some(CounterPhase::Animating)
        );

        assert!(!app.advance(t0 + Duration::from_millis(2000)));
        assert_eq!(app.reveal_progress(t0 + Duration::from_millis(2000)), 1.0);
        assert_eq!(
            app.animator().text(&DisplayField::CoinPnl(1)),
            Some("+$40,242")
        );
        assert_eq!(
            app.animator().text(&DisplayField::Stat(StatKind::TotalTrades)),
            Some("167")
        );
    }

    #[test]
    fn without_animation_everything_starts_settled() {
        let t0 = AppInstant::now();
        let mut app = DashboardApp::with_start(Dataset::trading_results(), false, t0);
        assert!(app.animator().is_settled());
        assert_eq!(app.reveal_progress(t0), 1.0);
        assert!(!app.advance(t0));
        assert_eq!(
            app.animator().text(&DisplayField::Stat(StatKind::WinRate)),
            Some("98.2%")
        );
    }

    #[test]
    fn empty_dataset_still_builds_both_charts() {
        let app = DashboardApp::with_start(Dataset::default(), true, AppInstant::now());
        assert!(app.charts().doughnut.is_ok());
        assert!(app.charts().bar.is_ok());
        // only the four portfolio cards remain
        assert_eq!(app.animator().labels().len(), 4);
    }
}
