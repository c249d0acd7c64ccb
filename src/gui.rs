// Word of the Day - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels and the file dialogs.

use crate::app::state::AppState;
use crate::ui;
use crate::util::constants;

/// The Word of the Day application.
pub struct WotdApp {
    pub state: AppState,
}

impl WotdApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for WotdApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Reload Store").clicked() {
                        let _ = self.state.open();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Import CSV\u{2026}").clicked() {
                        if let Some(src) = rfd::FileDialog::new()
                            .add_filter("CSV", &["csv"])
                            .pick_file()
                        {
                            let _ = self.state.import_from(&src);
                        }
                        ui.close_menu();
                    }
                    if ui.button("Export CSV\u{2026}").clicked() {
                        if let Some(dest) = rfd::FileDialog::new()
                            .add_filter("CSV", &["csv"])
                            .set_file_name(constants::DEFAULT_STORE_FILE_NAME)
                            .save_file()
                        {
                            let _ = self.state.export_to(&dest);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.state.store_unreadable {
                    ui.label(
                        egui::RichText::new(" \u{26a0} STORE UNREADABLE ")
                            .strong()
                            .color(ui::theme::ERROR_COLOUR),
                    );
                    ui.separator();
                }
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let warnings = self.state.warnings.len();
                    if warnings > 0 {
                        ui.label(format!("{warnings} warning(s)"))
                            .on_hover_text(self.state.warnings.join("\n"));
                    }
                    if self.state.debug_mode {
                        ui.label(egui::RichText::new("debug").small().weak());
                    }
                });
            });
        });

        // Left sidebar: searches and the new entry form.
        egui::SidePanel::left("sidebar")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("sidebar_scroll")
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        ui::panels::word_search::render(ui, &mut self.state);
                        ui.separator();
                        ui::panels::day_search::render(ui, &mut self.state);
                        ui.separator();
                        ui::panels::add_entry::render(ui, &mut self.state);
                    });
            });

        // Central panel: paginated records.
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::records::render(ui, &mut self.state);
        });

        ui::panels::about::render(ctx, &mut self.state);
    }

    /// Called by eframe when the application window is about to close.
    ///
    /// Saves the current session so the next launch can restore it.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.save_session();
    }
}
