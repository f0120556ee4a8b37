//! # Transaction History Screen
//!
//! Paged table of the account's on-contract transaction log.

use crate::app::{App, AppState, HISTORY_PAGE_SIZES};
use crate::ui::theme::Theme;
use crate::ui::widgets::icons::{material, size, Icons};
use crate::ui::widgets::{forms, tables};
use crate::ui::format_timestamp;
use shared::units::{format_units, TOKEN_DECIMALS};

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        ui.label(Icons::accent(material::HISTORY, size::MEDIUM));
        ui.heading("Transaction History");
        if state.history.poll.in_flight() {
            ui.spinner();
        }
    });
    ui.add_space(10.0);

    if state.history.entries.is_empty() {
        tables::render_empty_state(
            ui,
            "No transactions found",
            Some("Deposits, withdrawals and claims will show up here"),
            &theme,
        );
    } else {
        let sort_arrow = if state.history.sort_descending {
            material::ARROW_DOWN
        } else {
            material::ARROW_UP
        };

        ui.horizontal(|ui| {
            if forms::render_button(ui, "Timestamp", Some(sort_arrow), None).clicked() {
                app.handle_history_sort_toggle();
            }
        });
        ui.add_space(4.0);

        tables::render_table(
            ui,
            "history",
            tables::TableConfig {
                num_columns: 3,
                scrollable: true,
                ..tables::TableConfig::default()
            },
            &["Type", "Amount", "Timestamp"],
            &theme,
            |ui| {
                for entry in &state.history.entries {
                    ui.label(&entry.kind);
                    ui.monospace(format_units(entry.amount, TOKEN_DECIMALS));
                    ui.label(format_timestamp(entry.timestamp));
                    ui.end_row();
                }
            },
        );
    }

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        let page = state.history.page;
        if forms::render_enabled_button(ui, page > 0, "Prev", None, None).clicked() {
            app.handle_history_page_change(page.saturating_sub(1));
        }
        ui.monospace(format!("page {}", page + 1));
        // The log length is unknown; a short page means there is no next one.
        let has_next = state.history.entries.len() == state.history.page_size;
        if forms::render_enabled_button(ui, has_next, "Next", None, None).clicked() {
            app.handle_history_page_change(page + 1);
        }

        ui.separator();
        for size_option in HISTORY_PAGE_SIZES {
            let selected = state.history.page_size == *size_option;
            if ui
                .selectable_label(selected, format!("{size_option}/page"))
                .clicked()
            {
                app.handle_history_page_size_change(*size_option);
            }
        }
    });
}
