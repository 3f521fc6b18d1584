use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card_fill: Color32,
    pub card_stroke: Color32,
    pub profit: Color32,
    pub loss: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub chart_height: f32,
    pub card_corner_radius: u8,
    pub stat_value_size: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(0, 255, 136),
        subsection_heading: Color32::from_rgb(204, 204, 204),
        central_panel: Color32::from_rgb(10, 10, 10),
        side_panel: Color32::from_rgb(18, 18, 18),
        card_fill: Color32::from_rgb(26, 26, 26),
        card_stroke: Color32::from_rgb(45, 45, 45),
        profit: Color32::from_rgb(0, 255, 136),
        loss: Color32::from_rgb(255, 100, 100),
    },
    chart_height: 320.0,
    card_corner_radius: 12,
    stat_value_size: 26.0,
};
