// Word of the Day - ui/theme.rs
//
// Colours and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Success banner (search found something).
pub const FOUND_COLOUR: Color32 = Color32::from_rgb(34, 197, 94); // Green 500

/// Informational banner (search found nothing).
pub const NOT_FOUND_COLOUR: Color32 = Color32::from_rgb(217, 119, 6); // Amber 600

/// Error text in the status bar and the store warning banner.
pub const ERROR_COLOUR: Color32 = Color32::from_rgb(220, 38, 38); // Red 600

/// Background tint for rows ticked for deletion.
pub const SELECTED_ROW_BG: Color32 = Color32::from_rgba_premultiplied(220, 38, 38, 25);

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 340.0;
pub const RESULTS_MAX_HEIGHT: f32 = 220.0;
pub const DATE_COLUMN_WIDTH: f32 = 90.0;
