// Word of the Day - ui/panels/records.rs
//
// Paginated records table with keyword filter and checkbox deletion.
//
// Checkboxes are keyed by table position, not by row index on the page, so
// ticking a row only ever affects that record. Selection is page-scoped:
// AppState clears it when the page or filter changes.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the records panel (central area).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading("\u{1f4d6} All words");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!(
                "{}/{} words",
                state.records_view.len(),
                state.table.len()
            ));
        });
    });

    ui.horizontal(|ui| {
        ui.label("Filter:");
        let mut keyword = state.keyword.clone();
        if ui.text_edit_singleline(&mut keyword).changed() {
            state.set_keyword(keyword);
        }
        if !state.keyword.is_empty() && ui.small_button("\u{2715}").clicked() {
            state.set_keyword(String::new());
        }
    });

    ui.separator();
    render_pager(ui, state);
    ui.separator();

    let page = state.current_page();
    let positions = page.positions.to_vec();

    if positions.is_empty() {
        ui.centered_and_justified(|ui| {
            if state.table.is_empty() {
                ui.label("No words stored yet.\nAdd one from the panel on the left.");
            } else {
                ui.label("No words match the filter.");
            }
        });
        return;
    }

    // Toggles are applied after the grid so `state.table` is not borrowed
    // while the selection is mutated.
    let mut toggles: Vec<usize> = Vec::new();

    egui::ScrollArea::vertical()
        .id_salt("records_scroll")
        .auto_shrink([false; 2])
        .max_height((ui.available_height() - 40.0).max(100.0))
        .show(ui, |ui| {
            egui::Grid::new("records_grid")
                .striped(true)
                .num_columns(4)
                .min_col_width(theme::DATE_COLUMN_WIDTH)
                .show(ui, |ui| {
                    ui.label("");
                    ui.strong(&state.table.columns.date);
                    ui.strong(&state.table.columns.word);
                    ui.strong(&state.table.columns.submitter);
                    ui.end_row();

                    for &pos in &positions {
                        let Some(record) = state.table.get(pos) else {
                            continue;
                        };
                        let mut checked = state.selection.is_selected(pos);
                        if ui.checkbox(&mut checked, "").changed() {
                            toggles.push(pos);
                        }
                        let word = egui::RichText::new(&record.word);
                        let word = if checked {
                            word.background_color(theme::SELECTED_ROW_BG)
                        } else {
                            word
                        };
                        ui.label(record.date.to_string());
                        ui.add(egui::Label::new(word).truncate())
                            .on_hover_text(&record.word);
                        ui.label(&record.submitter);
                        ui.end_row();
                    }
                });
        });

    for pos in toggles {
        state.toggle_selected(pos);
    }

    ui.separator();
    ui.horizontal(|ui| {
        let n = state.selection.len();
        let can_delete = n > 0 && !state.store_unreadable;
        let label = egui::RichText::new(format!("\u{1f5d1} Delete selected ({n})"));
        if ui
            .add_enabled(can_delete, egui::Button::new(label))
            .on_disabled_hover_text("Tick rows on this page to delete them.")
            .clicked()
        {
            // The outcome is reported through the status bar.
            let _ = state.delete_selected();
        }
        if n > 0 && ui.button("Clear selection").clicked() {
            state.selection.clear();
        }
    });
}

/// Previous / next buttons and the page counter.
fn render_pager(ui: &mut egui::Ui, state: &mut AppState) {
    let page = state.current_page();
    let (number, total, first, last) = (page.number, page.total, page.is_first(), page.is_last());

    ui.horizontal(|ui| {
        if ui.add_enabled(!first, egui::Button::new("\u{25c0} Prev")).clicked() {
            state.prev_page();
        }
        ui.label(format!("Page {number} / {total}"));
        if ui.add_enabled(!last, egui::Button::new("Next \u{25b6}")).clicked() {
            state.next_page();
        }
        ui.add_space(12.0);
        ui.label("Go to:");
        let mut target = number;
        let response = ui.add(egui::DragValue::new(&mut target).range(1..=total));
        if response.changed() && target != number {
            state.set_page(target);
        }
    });
}
