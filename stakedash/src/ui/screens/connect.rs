//! # Connect Screen
//!
//! Entry point: prompts the wallet agent for authorization. Connection
//! failures show inline; a dead session (network switch) shows the
//! restart-required banner.

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::icons::{material, size, Icons};
use crate::ui::widgets::{forms, layouts};

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    layouts::render_centered(ui, |ui| {
        ui.label(Icons::accent(material::WALLET, size::XLARGE));
        ui.add_space(10.0);
        forms::render_form_heading(ui, "Token Staking Dashboard", &theme);
        forms::render_hint(
            ui,
            "Connect your wallet to view balances and manage your stake",
            &theme,
        );
        ui.add_space(20.0);

        if let Some(fault) = &state.session_fault {
            ui.label(Icons::error(material::ERROR, size::MEDIUM));
            forms::render_error(ui, fault, &theme);
            return;
        }

        if state.connecting {
            ui.spinner();
            ui.add_space(5.0);
            forms::render_hint(ui, "Waiting for the wallet...", &theme);
        } else if forms::render_button(
            ui,
            "Connect Wallet",
            Some(material::WALLET),
            Some(theme.accent_dark),
        )
        .clicked()
        {
            app.handle_connect_click();
        }

        if let Some(error) = &state.connect_error {
            ui.add_space(10.0);
            forms::render_error(ui, error, &theme);
        }

        ui.add_space(20.0);
        forms::render_hint(ui, &format!("endpoint: {}", state.config.rpc_url), &theme);
    });
}
