use eframe::egui::{Color32, CornerRadius, Frame, InnerResponse, Margin, RichText, Stroke, Ui};
use crate::ui::config::UI_CONFIG;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders small, gray text (good for labels like "Trades:").
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Renders a "Label: Value" pair with consistent spacing and styling.
    /// The label is subdued, the value is colored.
    fn metric(&mut self, label: &str, value: &str, color: Color32);

    /// Renders a large figure, as used on the stat and asset cards.
    fn label_figure(&mut self, text: impl Into<String>, color: Color32);

    /// Renders a section header using the configured global color.
    fn label_header(&mut self, text: impl Into<String>);

    /// Renders an error message (Red).
    fn label_error(&mut self, text: impl Into<String>);

    /// Draws `add_contents` inside a dashboard card.
    fn card<R>(&mut self, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R>;
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.label));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0; // Tight spacing
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn label_figure(&mut self, text: impl Into<String>, color: Color32) {
        self.label(
            RichText::new(text)
                .size(UI_CONFIG.stat_value_size)
                .strong()
                .monospace()
                .color(color),
        );
    }

    fn label_header(&mut self, text: impl Into<String>) {
        let text = text.into().to_uppercase();
        self.heading(RichText::new(text).color(UI_CONFIG.colors.heading).monospace());
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.loss));
    }

    fn card<R>(&mut self, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
        Frame::new()
            .fill(UI_CONFIG.colors.card_fill)
            .stroke(Stroke::new(1.0, UI_CONFIG.colors.card_stroke))
            .corner_radius(CornerRadius::same(UI_CONFIG.card_corner_radius))
            .inner_margin(Margin::same(12))
            .show(self, add_contents)
    }
}
