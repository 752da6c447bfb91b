//! egui visuals for the roster themes.

use eframe::egui;
use roster_core::{ButtonColors, Rgb, Theme};

pub fn color(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

pub fn visuals_for_theme(theme: Theme) -> egui::Visuals {
    let palette = theme.palette();
    let mut visuals = if theme.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    visuals.override_text_color = Some(color(palette.text));
    visuals.panel_fill = color(palette.panel_background);
    visuals.window_fill = color(palette.panel_background);
    visuals.extreme_bg_color = color(palette.table_background);
    visuals.selection.bg_fill = color(palette.selection);
    visuals.selection.stroke = egui::Stroke::new(1.0, color(palette.text));
    visuals
}

/// Filled button with the fixed per-action colours.
pub fn action_button(label: &str, colors: ButtonColors) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(label.to_owned()).color(color(colors.text)))
        .fill(color(colors.fill))
}
