//! Chart theme configuration.
//!
//! Every chart builder and view receives a `&ChartTheme` explicitly, so two
//! charts never observe each other's styling changes.

use eframe::egui::Color32;

/// Doughnut-specific styling
pub struct DoughnutStyle {
    /// Inner radius as a fraction of the outer radius (0.6 = 60% cutout)
    pub cutout: f64,
    pub border_color: Color32,
    pub border_width: f32,
    pub hover_border_color: Color32,
    pub hover_border_width: f32,
    /// Arc segments per full turn when tessellating slices
    pub segments_per_turn: usize,
}

/// Bar-specific styling
pub struct BarStyle {
    /// Fixed y-axis range upper bound (the lower bound is always 0)
    pub y_max: f64,
    /// Gap between y ticks
    pub y_tick_step: f64,
    /// Bar width in category units (1.0 = touching bars)
    pub bar_width: f64,
    pub border_width: f32,
    /// Fill opacity relative to the border color
    pub fill_opacity_pct: f32,
    /// Top corner radii in data units: category widths across, y units up
    pub corner_radius: [f64; 2],
    /// Vertical grid lines at each category
    pub show_x_grid: bool,
}

pub struct TooltipStyle {
    pub title: Color32,
    pub body: Color32,
}

pub struct ChartTheme {
    /// Positional palette, shared by both charts: category `i` gets `palette[i % len]`
    pub palette: &'static [&'static str],
    /// Chart titles and axis text
    pub text_color: Color32,
    pub doughnut: DoughnutStyle,
    pub bar: BarStyle,
    pub tooltip: TooltipStyle,
    /// Duration of the chart reveal (sweep / grow) animation
    pub reveal_duration_ms: u64,
}

pub static CHART_THEME: ChartTheme = ChartTheme {
    palette: &["#1FB8CD", "#FFC185", "#B4413C", "#5D878F"],
    text_color: Color32::from_rgb(204, 204, 204),
    doughnut: DoughnutStyle {
        cutout: 0.6,
        border_color: Color32::from_rgb(10, 10, 10),
        border_width: 3.0,
        hover_border_color: Color32::from_rgb(0, 255, 136),
        hover_border_width: 5.0,
        segments_per_turn: 180,
    },
    bar: BarStyle {
        y_max: 100.0,
        y_tick_step: 10.0,
        bar_width: 0.6,
        border_width: 2.0,
        fill_opacity_pct: 0.85,
        corner_radius: [0.08, 3.0],
        show_x_grid: false,
    },
    tooltip: TooltipStyle {
        title: Color32::WHITE,
        body: Color32::from_rgb(204, 204, 204),
    },
    reveal_duration_ms: 1500,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_chart_has_horizontal_grid_only() {
        assert!(!CHART_THEME.bar.show_x_grid);
        let [rx, ry] = CHART_THEME.bar.corner_radius;
        assert!(rx > 0.0 && rx < CHART_THEME.bar.bar_width / 2.0);
        assert!(ry > 0.0 && ry < CHART_THEME.bar.y_max);
    }
}
