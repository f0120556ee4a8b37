//! # NFT Inventory Screen
//!
//! The two disjoint certificate sets (held by the account, and in staking
//! custody) with stake/unstake controls per token.

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::icons::{material, size, Icons};
use crate::ui::widgets::{forms, layouts, tables};

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.label(Icons::accent(material::NFT, size::MEDIUM));
        ui.heading("NFT Certificates");
        if state.nfts.poll.in_flight() {
            ui.spinner();
        } else if forms::render_button(ui, "Rescan", Some(material::REFRESH), None).clicked() {
            app.handle_nft_refresh_click();
        }
    });
    ui.add_space(10.0);

    let Some(inventory) = state.nfts.inventory.clone() else {
        tables::render_empty_state(
            ui,
            "Scanning certificate ownership...",
            Some("The inventory appears after the first scan completes"),
            &theme,
        );
        return;
    };

    let busy_token = state.nfts.busy_token;

    ui.columns(2, |columns| {
        layouts::render_panel(&mut columns[0], Some("Unstaked"), |ui| {
            if inventory.unstaked.is_empty() {
                tables::render_empty_state(ui, "No unstaked certificates", None, &theme);
                return;
            }
            for token_id in &inventory.unstaked {
                ui.horizontal(|ui| {
                    ui.monospace(format!("#{token_id}"));
                    let busy = busy_token == Some(*token_id);
                    let label = if busy { "Staking..." } else { "Stake" };
                    if forms::render_enabled_button(
                        ui,
                        busy_token.is_none(),
                        label,
                        None,
                        Some(theme.accent_dark),
                    )
                    .clicked()
                    {
                        app.handle_stake_nft_click(*token_id);
                    }
                });
            }
        });

        layouts::render_panel(&mut columns[1], Some("Staked"), |ui| {
            if inventory.staked.is_empty() {
                tables::render_empty_state(ui, "No staked certificates", None, &theme);
                return;
            }
            for token_id in &inventory.staked {
                ui.horizontal(|ui| {
                    ui.monospace(format!("#{token_id}"));
                    let busy = busy_token == Some(*token_id);
                    let label = if busy { "Unstaking..." } else { "Unstake" };
                    if forms::render_enabled_button(ui, busy_token.is_none(), label, None, None)
                        .clicked()
                    {
                        app.handle_unstake_nft_click(*token_id);
                    }
                });
            }
        });
    });

    ui.add_space(10.0);
    forms::render_hint(
        ui,
        "Ownership is re-derived from the chain on every scan",
        &theme,
    );
}
