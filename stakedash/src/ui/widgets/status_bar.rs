//! # Status Bar
//!
//! Bottom strip: endpoint, chain id, and the refresh counter.

use crate::app::AppState;
use crate::ui::theme::Theme;
use egui::RichText;

pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.label(RichText::new(&state.config.rpc_url).size(12.0).color(theme.dim));
        ui.separator();
        match &state.session {
            Some(session) => {
                ui.label(
                    RichText::new(format!("chain {}", session.chain_id))
                        .size(12.0)
                        .color(theme.success),
                );
            }
            None => {
                ui.label(RichText::new("offline").size(12.0).color(theme.dim));
            }
        }
        ui.separator();
        ui.label(
            RichText::new(format!("refresh #{}", state.refresh_epoch))
                .size(12.0)
                .color(theme.dim),
        );
    });
}
