// Word of the Day - ui/panels/day_search.rs
//
// Search by calendar day across all years.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the day search section.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(egui::RichText::new("\u{1f4c5} Search by day").strong())
        .default_open(true)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label("Month:");
                ui.add(egui::DragValue::new(&mut state.day_month).range(1..=12));
                ui.label("Day:");
                ui.add(egui::DragValue::new(&mut state.day_day).range(1..=31));
                if ui.button("Show").clicked() {
                    state.run_day_search();
                }
            });

            let Some(ref results) = state.day_results else {
                return;
            };
            if results.is_empty() {
                ui.colored_label(theme::NOT_FOUND_COLOUR, "No word on this day yet.");
            } else {
                ui.colored_label(
                    theme::FOUND_COLOUR,
                    format!("Words on {:02}-{:02}:", state.day_month, state.day_day),
                );
                super::results_grid(ui, "day_results", &state.table, results.positions());
            }
        });
}
