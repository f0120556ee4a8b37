//! # Admin Screen
//!
//! Base APR control for the configured administrator account.

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::icons::{material, size, Icons};
use crate::ui::widgets::{forms, layouts, tables};
use shared::units::{format_units, PERCENT_DECIMALS};

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    if !state.is_admin() {
        tables::render_empty_state(
            ui,
            "Admin access required",
            Some("Connect with the contract owner account"),
            &theme,
        );
        return;
    }

    ui.horizontal(|ui| {
        ui.label(Icons::warning(material::SETTINGS, size::MEDIUM));
        ui.heading("Admin Panel");
    });
    ui.add_space(10.0);

    layouts::render_panel(ui, Some("Base APR"), |ui| {
        if let Some(summary) = state.staking.summary.as_ref() {
            forms::render_stat(
                ui,
                "Current:",
                &format!(
                    "{}%",
                    format_units(u128::from(summary.base_apr_bps), PERCENT_DECIMALS)
                ),
                &theme,
            );
            ui.add_space(8.0);
        }

        let mut input = state.admin.apr_input.clone();
        let response =
            forms::render_text_input(ui, "New base APR (%):", &mut input, "0 - 100", [180.0, 28.0]);
        if response.changed() {
            app.state.write().admin.apr_input = input;
        }
        forms::render_hint(ui, "Two decimal places, applied in basis points", &theme);
        ui.add_space(8.0);

        let busy = state.admin.busy;
        if forms::render_enabled_button(
            ui,
            !busy,
            if busy { "Updating..." } else { "Update Base APR" },
            None,
            Some(theme.accent_dark),
        )
        .clicked()
        {
            app.handle_update_apr_click();
        }
    });
}
