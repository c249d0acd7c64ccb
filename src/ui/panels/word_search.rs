// Word of the Day - ui/panels/word_search.rs
//
// Accent-insensitive word search. Results refresh on every keystroke.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the word search section.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(egui::RichText::new("\u{1f50d} Search by word").strong())
        .default_open(true)
        .show(ui, |ui| {
            ui.label("Word:");
            if ui.text_edit_singleline(&mut state.word_query).changed() {
                state.run_word_search();
            }

            let Some(ref results) = state.word_results else {
                return;
            };
            let query = &state.word_query;
            if results.is_empty() {
                ui.colored_label(
                    theme::NOT_FOUND_COLOUR,
                    format!("'{query}' has not been the word of the day yet."),
                );
            } else {
                ui.colored_label(
                    theme::FOUND_COLOUR,
                    format!("'{query}' appeared {} time(s):", results.len()),
                );
                super::results_grid(ui, "word_results", &state.table, results.positions());
            }
        });
}
