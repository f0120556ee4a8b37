//! # GUI Theme
//!
//! Dark dashboard theme with an emerald accent. High contrast, sharp edges,
//! no rounded chrome.

use egui::{Color32, Context, Stroke, Visuals};

/// Color roles used across screens and widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Window background
    pub background: Color32,
    /// Panel/card background
    pub panel: Color32,
    /// Normal text
    pub text: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    /// Primary accent (headings, selection)
    pub accent: Color32,
    /// Darker accent for fills
    pub accent_dark: Color32,
    /// Border color
    pub border: Color32,
    /// Success/positive
    pub success: Color32,
    /// Error/negative
    pub error: Color32,
    /// Warning/attention
    pub warning: Color32,
    /// Informational
    pub info: Color32,
    /// Inactive/disabled fills
    pub inactive: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(10, 12, 11),
            panel: Color32::from_rgb(18, 22, 20),
            text: Color32::from_rgb(235, 240, 238),
            dim: Color32::from_rgb(140, 150, 146),
            accent: Color32::from_rgb(16, 185, 129),
            accent_dark: Color32::from_rgb(6, 95, 70),
            border: Color32::from_rgb(45, 52, 49),
            success: Color32::from_rgb(52, 211, 153),
            error: Color32::from_rgb(248, 113, 113),
            warning: Color32::from_rgb(251, 191, 36),
            info: Color32::from_rgb(96, 165, 250),
            inactive: Color32::from_rgb(30, 34, 32),
        }
    }
}

/// Install the theme into the egui context. Called once at startup.
pub fn apply(ctx: &Context) {
    let theme = Theme::default();
    let mut visuals = Visuals::dark();

    visuals.override_text_color = Some(theme.text);
    visuals.panel_fill = theme.background;
    visuals.window_fill = theme.panel;
    visuals.extreme_bg_color = theme.panel;
    visuals.selection.bg_fill = theme.accent_dark;
    visuals.selection.stroke = Stroke::new(1.0, theme.accent);
    visuals.hyperlink_color = theme.accent;

    visuals.widgets.noninteractive.bg_fill = theme.panel;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, theme.border);
    visuals.widgets.inactive.bg_fill = theme.inactive;
    visuals.widgets.hovered.bg_fill = theme.accent_dark;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, theme.accent);
    visuals.widgets.active.bg_fill = theme.accent_dark;

    ctx.set_visuals(visuals);
}
