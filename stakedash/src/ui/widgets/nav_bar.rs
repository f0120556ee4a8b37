//! # Navigation Bar
//!
//! Top bar with screen buttons, the connected account, and the
//! connect/disconnect control.

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::icons::{material, size, Icons};
use egui::RichText;
use shared::units::truncate_address;

fn screen_icon(screen: Screen) -> &'static str {
    match screen {
        Screen::Connect => material::SEND,
        Screen::Account => material::WALLET,
        Screen::Staking => material::STAKE,
        Screen::Nfts => material::NFT,
        Screen::History => material::HISTORY,
        Screen::Admin => material::SETTINGS,
    }
}

/// Render the navigation bar.
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.label(RichText::new("STAKEDASH").size(18.0).strong().color(theme.accent));
        ui.separator();

        for screen in Screen::all().iter().copied() {
            if screen == Screen::Admin && !state.is_admin() {
                continue;
            }
            if Screen::requires_session(screen) && !state.is_connected() {
                continue;
            }
            let selected = state.current_screen == screen;
            let label = format!("{} {}", screen_icon(screen), screen.title());
            let text = if selected {
                RichText::new(label).color(theme.accent).strong()
            } else {
                RichText::new(label).color(theme.dim)
            };
            if ui.selectable_label(selected, text).clicked() {
                app.handle_screen_change(screen);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            match &state.session {
                Some(session) => {
                    if ui
                        .button(format!("{} Disconnect", material::CLOSE))
                        .clicked()
                    {
                        app.handle_disconnect_click();
                    }
                    ui.label(Icons::success(material::WALLET, size::SMALL));
                    ui.monospace(truncate_address(&session.account));
                    if state.is_admin() {
                        ui.label(RichText::new("admin").color(theme.warning).size(12.0));
                    }
                }
                None => {
                    ui.label(Icons::dim(material::WALLET, size::SMALL));
                    ui.colored_label(theme.dim, "not connected");
                }
            }
        });
    });
}
