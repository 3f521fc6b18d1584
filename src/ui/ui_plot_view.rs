use eframe::egui;
use egui_plot::{AxisHints, Corner, GridMark, HPlacement, Legend, Plot};

use crate::charts::bar::y_tick_label;
use crate::charts::{BarSpec, DoughnutSpec};
use crate::config::chart::ChartTheme;
use crate::ui::config::UI_CONFIG;

use crate::ui::plot_layers::{
    BarContext, BarLayer, BarTooltipLayer, DoughnutContext, PlotLayer, SliceHoverLayer,
    SliceLayer,
};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Margin around the unit ring so the hover border is not clipped.
const RING_MARGIN: f64 = 1.1;

/// Draws the PnL doughnut. `reveal` (0..=1) controls the sweep-in.
pub fn show_doughnut(ui: &mut egui::Ui, spec: &DoughnutSpec, theme: &ChartTheme, reveal: f64) {
    let legend = Legend::default().position(Corner::LeftBottom);

    Plot::new("pnl_doughnut")
        .legend(legend)
        .height(UI_CONFIG.chart_height)
        .data_aspect(1.0)
        .include_x(-RING_MARGIN)
        .include_x(RING_MARGIN)
        .include_y(-RING_MARGIN)
        .include_y(RING_MARGIN)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .label_formatter(|_, _| String::new())
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            let hovered = plot_ui
                .pointer_coordinate()
                .and_then(|p| spec.slice_at(p.x, p.y, reveal));

            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_hover_hits {
                if let Some(index) = hovered {
                    log::info!("[doughnut] hovering slice {}", index);
                }
            }

            let ctx = DoughnutContext {
                spec,
                theme,
                reveal,
                hovered,
            };

            // Back to front
            let layers: Vec<Box<dyn for<'a> PlotLayer<DoughnutContext<'a>>>> =
                vec![Box::new(SliceLayer), Box::new(SliceHoverLayer)];
            for layer in layers {
                layer.render(plot_ui, &ctx);
            }
        });
}

/// Draws the win-rate bar chart. `reveal` (0..=1) controls how far the bars have grown.
pub fn show_bar(ui: &mut egui::Ui, spec: &BarSpec, theme: &ChartTheme, reveal: f64) {
    let category_count = spec.bars.len();
    let y_max = spec.y_max;
    let y_ticks = spec.y_ticks.clone();

    Plot::new("winrate_bar")
        .height(UI_CONFIG.chart_height)
        .custom_x_axes(vec![create_x_axis(spec)])
        .custom_y_axes(vec![create_y_axis()])
        .show_grid([theme.bar.show_x_grid, true])
        .show_x(false)
        .show_y(false)
        .label_formatter(|_, _| String::new())
        .x_grid_spacer(move |_input| {
            (0..category_count)
                .map(|i| GridMark {
                    value: i as f64,
                    step_size: 1.0,
                })
                .collect()
        })
        .y_grid_spacer(move |_input| {
            let step = if y_ticks.len() > 1 {
                y_ticks[1] - y_ticks[0]
            } else {
                y_max
            };
            y_ticks
                .iter()
                .map(|&value| GridMark {
                    value,
                    step_size: step,
                })
                .collect()
        })
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            let x_max = category_count.max(1) as f64 - 0.5;
            plot_ui.set_plot_bounds_x(-0.5..=x_max);
            plot_ui.set_plot_bounds_y(0.0..=y_max);

            let hovered = plot_ui
                .pointer_coordinate()
                .and_then(|p| spec.bar_at(p.x, p.y));

            let ctx = BarContext {
                spec,
                theme,
                reveal,
                hovered,
            };

            let layers: Vec<Box<dyn for<'a> PlotLayer<BarContext<'a>>>> =
                vec![Box::new(BarLayer), Box::new(BarTooltipLayer)];
            for layer in layers {
                layer.render(plot_ui, &ctx);
            }
        });
}

fn create_x_axis(spec: &BarSpec) -> AxisHints<'static> {
    let spec = spec.clone();
    AxisHints::new_x().formatter(move |grid_mark, _range| {
        spec.category_label(grid_mark.value).to_string()
    })
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .formatter(|grid_mark, _range| y_tick_label(grid_mark.value))
        .placement(HPlacement::Left)
}
