//! # Staking Screen
//!
//! Contract-wide staking summary: base and effective APR, position size,
//! rewards and lock window.

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::icons::{material, size, Icons};
use crate::ui::widgets::{forms, tables};
use crate::ui::format_timestamp;
use shared::units::{format_units, PERCENT_DECIMALS, TOKEN_DECIMALS};

pub fn render(ui: &mut egui::Ui, state: &AppState, _app: &mut App) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.label(Icons::accent(material::STAKE, size::MEDIUM));
        ui.heading("Staking Overview");
    });
    ui.add_space(10.0);

    let Some(summary) = state.staking.summary.as_ref() else {
        tables::render_empty_state(
            ui,
            "Loading staking data...",
            Some("The summary appears after the first poll completes"),
            &theme,
        );
        return;
    };

    forms::render_stat(
        ui,
        "Base APR:",
        &format!("{}%", format_units(u128::from(summary.base_apr_bps), PERCENT_DECIMALS)),
        &theme,
    );
    forms::render_stat(
        ui,
        "Effective APR:",
        &format!(
            "{}%",
            format_units(u128::from(summary.effective_apr_bps()), PERCENT_DECIMALS)
        ),
        &theme,
    );
    forms::render_stat(ui, "Staked certificates:", &summary.staked_nft_count.to_string(), &theme);
    forms::render_stat(
        ui,
        "Staked amount:",
        &format_units(summary.staked_amount, TOKEN_DECIMALS),
        &theme,
    );
    forms::render_stat(
        ui,
        "Pending reward:",
        &format_units(summary.pending_rewards, TOKEN_DECIMALS),
        &theme,
    );
    forms::render_stat(
        ui,
        "Lock ends:",
        &if summary.lock_end_time == 0 {
            "—".to_string()
        } else {
            format_timestamp(summary.lock_end_time)
        },
        &theme,
    );

    ui.add_space(12.0);
    forms::render_hint(
        ui,
        "Each staked certificate adds 2.00% to the base APR",
        &theme,
    );
}
