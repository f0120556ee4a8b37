//! # Form Components
//!
//! Reusable form elements for consistent input handling across screens.

use crate::ui::theme::Theme;
use egui::RichText;

/// Render a labeled single-line text input.
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    size: [f32; 2],
) -> egui::Response {
    ui.label(RichText::new(label).size(14.0));
    ui.add_sized(
        size,
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .font(egui::TextStyle::Monospace),
    )
}

/// Render a button with optional icon and fill color.
pub fn render_button(
    ui: &mut egui::Ui,
    text: &str,
    icon: Option<&str>,
    fill_color: Option<egui::Color32>,
) -> egui::Response {
    let button_text = match icon {
        Some(icon) => format!("{icon} {text}"),
        None => text.to_string(),
    };

    let mut button = egui::Button::new(RichText::new(button_text).size(15.0));
    if let Some(color) = fill_color {
        button = button.fill(color);
    }
    ui.add(button)
}

/// Render a button that only reacts when `enabled` is true.
pub fn render_enabled_button(
    ui: &mut egui::Ui,
    enabled: bool,
    text: &str,
    icon: Option<&str>,
    fill_color: Option<egui::Color32>,
) -> egui::Response {
    let button_text = match icon {
        Some(icon) => format!("{icon} {text}"),
        None => text.to_string(),
    };
    let mut button = egui::Button::new(RichText::new(button_text).size(15.0));
    if let Some(color) = fill_color {
        button = button.fill(color);
    }
    ui.add_enabled(enabled, button)
}

/// Render a form section heading.
pub fn render_form_heading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.label(RichText::new(text).size(20.0).strong().color(theme.accent));
    ui.add_space(10.0);
}

/// Render an inline error message.
pub fn render_error(ui: &mut egui::Ui, error: &str, theme: &Theme) {
    ui.label(RichText::new(error).size(14.0).color(theme.error));
    ui.add_space(8.0);
}

/// Render a help/hint line.
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.label(RichText::new(hint).size(13.0).color(theme.dim));
}

/// Render a label/value stat row.
pub fn render_stat(ui: &mut egui::Ui, label: &str, value: &str, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).color(theme.dim));
        ui.monospace(RichText::new(value).color(theme.text));
    });
}
