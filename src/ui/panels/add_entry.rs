// Word of the Day - ui/panels/add_entry.rs
//
// New entry form. The record is stamped with today's date.

use crate::app::state::AppState;

/// Render the add-entry section.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(egui::RichText::new("\u{2795} Add a new word").strong())
        .default_open(true)
        .show(ui, |ui| {
            egui::Grid::new("add_entry_form")
                .num_columns(2)
                .show(ui, |ui| {
                    ui.label("Word:");
                    ui.text_edit_singleline(&mut state.new_word);
                    ui.end_row();
                    ui.label("Submitter:");
                    ui.text_edit_singleline(&mut state.new_submitter);
                    ui.end_row();
                });

            let writable = !state.store_unreadable;
            if ui.add_enabled(writable, egui::Button::new("Add")).clicked() {
                // The outcome is reported through the status bar.
                let _ = state.add_entry();
            }
        });
}
