//! # Table Components
//!
//! Grid-based tables and empty states.

use crate::ui::theme::Theme;
use egui::RichText;

/// Configuration for table styling
pub struct TableConfig {
    pub num_columns: usize,
    pub spacing: [f32; 2],
    pub striped: bool,
    pub scrollable: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            num_columns: 3,
            spacing: [16.0, 6.0],
            striped: true,
            scrollable: false,
        }
    }
}

/// Render a data table with a header row; the callback draws the rows.
pub fn render_table<F>(
    ui: &mut egui::Ui,
    id: &str,
    config: TableConfig,
    headers: &[&str],
    theme: &Theme,
    render_rows: F,
) where
    F: FnOnce(&mut egui::Ui),
{
    let grid = |ui: &mut egui::Ui| {
        egui::Grid::new(id)
            .num_columns(config.num_columns)
            .spacing(config.spacing)
            .striped(config.striped)
            .show(ui, |ui| {
                for header in headers {
                    ui.label(RichText::new(*header).color(theme.accent).strong());
                }
                ui.end_row();

                render_rows(ui);
            });
    };

    if config.scrollable {
        egui::ScrollArea::vertical().show(ui, grid);
    } else {
        grid(ui);
    }
}

/// Render an empty-state message in place of a table.
pub fn render_empty_state(
    ui: &mut egui::Ui,
    primary_text: &str,
    secondary_text: Option<&str>,
    theme: &Theme,
) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.colored_label(theme.dim, primary_text);
        if let Some(secondary) = secondary_text {
            ui.add_space(8.0);
            ui.colored_label(theme.dim, secondary);
        }
        ui.add_space(20.0);
    });
}
