//! # Account Screen
//!
//! Balances plus the deposit/withdraw/claim/faucet forms. All displayed
//! values come from the latest poll snapshot; the forms validate against
//! exactly what is displayed.

use crate::app::{App, AppState, WalletSummary};
use crate::ui::theme::Theme;
use crate::ui::widgets::icons::{material, size, Icons};
use crate::ui::widgets::{forms, tables};
use crate::ui::{format_countdown, format_timestamp};
use shared::units::{format_units, TOKEN_DECIMALS};

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    let Some(summary) = state.account.summary.clone() else {
        tables::render_empty_state(
            ui,
            "Loading account data...",
            Some("Balances appear after the first poll completes"),
            &theme,
        );
        return;
    };

    let now = chrono::Utc::now().timestamp();
    let locked = summary.is_locked(now);

    ui.horizontal(|ui| {
        ui.label(Icons::accent(material::WALLET, size::MEDIUM));
        ui.heading("My Account");
    });
    ui.add_space(10.0);

    render_balances(ui, &summary, locked, &theme);
    ui.add_space(12.0);
    ui.separator();
    ui.add_space(12.0);

    ui.columns(2, |columns| {
        render_deposit_form(&mut columns[0], state, app, &theme);
        render_withdraw_form(&mut columns[1], state, app, &summary, locked, &theme);
    });

    ui.add_space(12.0);
    render_claim_row(ui, state, app, &summary, locked, &theme);
    ui.add_space(12.0);
    ui.separator();
    ui.add_space(12.0);
    render_faucet_row(ui, state, app, &summary, &theme);
}

fn render_balances(ui: &mut egui::Ui, summary: &WalletSummary, locked: bool, theme: &Theme) {
    forms::render_stat(
        ui,
        "Token balance:",
        &format_units(summary.token_balance, TOKEN_DECIMALS),
        theme,
    );
    forms::render_stat(ui, "Certificates:", &summary.nft_balance.to_string(), theme);
    forms::render_stat(
        ui,
        "Staked amount:",
        &format_units(summary.stake.amount, TOKEN_DECIMALS),
        theme,
    );
    forms::render_stat(
        ui,
        "Pending reward:",
        &format_units(summary.stake.pending_rewards, TOKEN_DECIMALS),
        theme,
    );
    ui.horizontal(|ui| {
        let icon = if locked {
            Icons::warning(material::LOCK, size::SMALL)
        } else {
            Icons::success(material::UNLOCK, size::SMALL)
        };
        ui.label(icon);
        ui.label(egui::RichText::new("Lock ends:").color(theme.dim));
        let text = if summary.stake.lock_end_time == 0 {
            "—".to_string()
        } else {
            format_timestamp(summary.stake.lock_end_time)
        };
        ui.monospace(text);
    });
}

fn render_deposit_form(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    forms::render_form_heading(ui, "Deposit", theme);

    let mut input = state.account.deposit_input.clone();
    let response = forms::render_text_input(ui, "Amount:", &mut input, "0.0", [220.0, 28.0]);
    if response.changed() {
        app.state.write().account.deposit_input = input;
    }
    ui.add_space(8.0);

    let busy = state.account.deposit_busy;
    if forms::render_enabled_button(
        ui,
        !busy,
        if busy { "Depositing..." } else { "Deposit" },
        Some(material::SEND),
        Some(theme.accent_dark),
    )
    .clicked()
    {
        app.handle_deposit_click();
    }
}

fn render_withdraw_form(
    ui: &mut egui::Ui,
    state: &AppState,
    app: &mut App,
    summary: &WalletSummary,
    locked: bool,
    theme: &Theme,
) {
    forms::render_form_heading(ui, "Withdraw", theme);

    let mut input = state.account.withdraw_input.clone();
    let response = forms::render_text_input(ui, "Amount:", &mut input, "0.0", [220.0, 28.0]);
    if response.changed() {
        app.state.write().account.withdraw_input = input;
    }
    forms::render_hint(
        ui,
        &format!(
            "withdrawable: {}",
            format_units(summary.withdrawable, TOKEN_DECIMALS)
        ),
        theme,
    );
    ui.add_space(8.0);

    let busy = state.account.withdraw_busy;
    let label = if locked {
        format!("Locked until {}", format_timestamp(summary.stake.lock_end_time))
    } else if busy {
        "Withdrawing...".to_string()
    } else {
        "Withdraw".to_string()
    };
    if forms::render_enabled_button(ui, !locked && !busy, &label, Some(material::UNLOCK), None)
        .clicked()
    {
        app.handle_withdraw_click();
    }
}

fn render_claim_row(
    ui: &mut egui::Ui,
    state: &AppState,
    app: &mut App,
    summary: &WalletSummary,
    locked: bool,
    theme: &Theme,
) {
    let busy = state.account.claim_busy;
    let claimable = !locked && summary.stake.pending_rewards > 0;
    let label = if locked {
        "Claim locked until lock period ends".to_string()
    } else if busy {
        "Claiming...".to_string()
    } else {
        format!(
            "Claim {} reward",
            format_units(summary.stake.pending_rewards, TOKEN_DECIMALS)
        )
    };
    if forms::render_enabled_button(ui, claimable && !busy, &label, None, Some(theme.accent_dark))
        .clicked()
    {
        app.handle_claim_click();
    }
}

fn render_faucet_row(
    ui: &mut egui::Ui,
    state: &AppState,
    app: &mut App,
    summary: &WalletSummary,
    theme: &Theme,
) {
    let busy = state.account.faucet_busy;
    let on_cooldown = summary.faucet_remaining_secs > 0;
    let label = if on_cooldown {
        format!(
            "Faucet available in {}",
            format_countdown(summary.faucet_remaining_secs)
        )
    } else if busy {
        "Claiming faucet...".to_string()
    } else {
        format!(
            "Faucet {} tokens",
            format_units(summary.faucet_amount, TOKEN_DECIMALS)
        )
    };

    ui.horizontal(|ui| {
        ui.label(Icons::info(material::FAUCET, size::SMALL));
        if forms::render_enabled_button(ui, !on_cooldown && !busy, &label, None, None).clicked() {
            app.handle_faucet_click();
        }
    });
    forms::render_hint(ui, "Test tokens for the staking playground", theme);
}
