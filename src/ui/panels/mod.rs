// Word of the Day - ui/panels/mod.rs

pub mod about;
pub mod add_entry;
pub mod day_search;
pub mod records;
pub mod word_search;

use crate::core::model::Table;
use crate::ui::theme;

/// Read-only grid of (date, word, submitter) rows for search results.
pub(crate) fn results_grid(ui: &mut egui::Ui, id: &str, table: &Table, positions: &[usize]) {
    egui::ScrollArea::vertical()
        .id_salt(id)
        .max_height(theme::RESULTS_MAX_HEIGHT)
        .show(ui, |ui| {
            egui::Grid::new(id)
                .striped(true)
                .num_columns(3)
                .show(ui, |ui| {
                    ui.strong(&table.columns.date);
                    ui.strong(&table.columns.word);
                    ui.strong(&table.columns.submitter);
                    ui.end_row();

                    for record in positions.iter().filter_map(|&pos| table.get(pos)) {
                        ui.label(record.date.to_string());
                        ui.label(&record.word);
                        ui.label(&record.submitter);
                        ui.end_row();
                    }
                });
        });
}
