use eframe::egui::{Color32, Id, LayerId, Order::Tooltip, RichText, Stroke, Ui};

#[allow(deprecated)]
use eframe::egui::show_tooltip_at_pointer;

use egui_plot::{Line, PlotPoints, PlotUi, Polygon};

use crate::charts::bar::rounded_bar;
use crate::charts::{BarSpec, DoughnutSpec};
use crate::config::chart::ChartTheme;

/// Arc steps per rounded bar corner
const BAR_CORNER_SEGMENTS: usize = 6;

/// Context passed to every doughnut layer during rendering.
pub struct DoughnutContext<'a> {
    pub spec: &'a DoughnutSpec,
    pub theme: &'a ChartTheme,
    /// Sweep-in progress, 0..=1
    pub reveal: f64,
    pub hovered: Option<usize>,
}

/// Context passed to every bar layer during rendering.
pub struct BarContext<'a> {
    pub spec: &'a BarSpec,
    pub theme: &'a ChartTheme,
    /// Grow-in progress, 0..=1
    pub reveal: f64,
    pub hovered: Option<usize>,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer<C> {
    fn render(&self, ui: &mut PlotUi, ctx: &C);
}

// ============================================================================
// 1. DOUGHNUT SLICES
// ============================================================================
pub struct SliceLayer;

impl<'a> PlotLayer<DoughnutContext<'a>> for SliceLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &DoughnutContext<'a>) {
        let style = &ctx.theme.doughnut;

        for slice in &ctx.spec.slices {
            let fill = slice.color.to_color32();

            // Quads keep every polygon convex; sharing the legend text as the
            // name groups them into a single legend entry.
            for quad in slice.quads(ctx.spec.cutout, ctx.reveal, style.segments_per_turn) {
                let polygon = Polygon::new(&slice.legend_text, PlotPoints::new(quad.to_vec()))
                    .fill_color(fill)
                    .stroke(Stroke::new(0.5, fill));
                plot_ui.polygon(polygon);
            }

            let outline = slice.outline(ctx.spec.cutout, ctx.reveal, style.segments_per_turn);
            if !outline.is_empty() {
                plot_ui.line(
                    Line::new(&slice.legend_text, PlotPoints::new(outline))
                        .color(style.border_color)
                        .width(style.border_width),
                );
            }
        }
    }
}

// ============================================================================
// 2. DOUGHNUT HOVER (emphasis + tooltip)
// ============================================================================
pub struct SliceHoverLayer;

impl<'a> PlotLayer<DoughnutContext<'a>> for SliceHoverLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &DoughnutContext<'a>) {
        let Some(slice) = ctx.hovered.and_then(|i| ctx.spec.slices.get(i)) else {
            return;
        };
        let style = &ctx.theme.doughnut;

        let outline = slice.outline(ctx.spec.cutout, ctx.reveal, style.segments_per_turn);
        if !outline.is_empty() {
            plot_ui.line(
                Line::new(&slice.legend_text, PlotPoints::new(outline))
                    .color(style.hover_border_color)
                    .width(style.hover_border_width),
            );
        }

        show_chart_tooltip(
            plot_ui,
            ctx.theme,
            "doughnut",
            &slice.tooltip_title,
            std::slice::from_ref(&slice.tooltip_text),
            Some(slice.color.to_color32()),
        );
    }
}

// ============================================================================
// 3. BARS
// ============================================================================
pub struct BarLayer;

impl<'a> PlotLayer<BarContext<'a>> for BarLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &BarContext<'a>) {
        let style = &ctx.theme.bar;
        let half_w = ctx.spec.bar_width / 2.0;

        for (i, bar) in ctx.spec.bars.iter().enumerate() {
            let x = i as f64;
            let top = bar.win_rate * ctx.reveal.clamp(0.0, 1.0);
            let border = bar.color.to_color32();
            let fill = if ctx.hovered == Some(i) {
                border
            } else {
                border.linear_multiply(style.fill_opacity_pct)
            };

            let outline = rounded_bar(x, half_w, top, style.corner_radius, BAR_CORNER_SEGMENTS);
            if outline.is_empty() {
                continue;
            }
            let points = PlotPoints::new(outline);

            plot_ui.polygon(
                Polygon::new(&bar.label, points)
                    .fill_color(fill)
                    .stroke(Stroke::new(style.border_width, border)),
            );
        }
    }
}

// ============================================================================
// 4. BAR TOOLTIP
// ============================================================================
pub struct BarTooltipLayer;

impl<'a> PlotLayer<BarContext<'a>> for BarTooltipLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &BarContext<'a>) {
        let Some(bar) = ctx.hovered.and_then(|i| ctx.spec.bars.get(i)) else {
            return;
        };
        show_chart_tooltip(
            plot_ui,
            ctx.theme,
            "bar",
            &bar.tooltip_title,
            &bar.tooltip_lines,
            None,
        );
    }
}

// ============================================================================
// HELPER FUNCTIONS (Private to this module)
// ============================================================================

fn show_chart_tooltip(
    plot_ui: &PlotUi,
    theme: &ChartTheme,
    chart: &str,
    title: &str,
    lines: &[String],
    swatch: Option<Color32>,
) {
    let tooltip_layer = LayerId::new(Tooltip, Id::new("chart_tooltips"));
    let style = &theme.tooltip;

    #[allow(deprecated)]
    show_tooltip_at_pointer(
        plot_ui.ctx(),
        tooltip_layer,
        Id::new(format!("tooltip_{}_{}", chart, title)),
        |ui: &mut Ui| {
            ui.label(RichText::new(title).strong().color(style.title));
            ui.separator();
            for line in lines {
                ui.horizontal(|ui| {
                    if let Some(color) = swatch {
                        ui.label(RichText::new("■").color(color));
                    }
                    ui.label(RichText::new(line).color(style.body));
                });
            }
        },
    );
}
