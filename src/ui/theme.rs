//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors - dark modern theme
pub const BOARD_AREA_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const BOARD_BG: Color32 = Color32::from_rgb(30, 32, 36);
pub const CELL_BG: Color32 = Color32::from_rgb(48, 51, 56);
pub const WIN_CELL_BG: Color32 = Color32::from_rgb(17, 221, 34);

// Mark colors
pub const X_MARK: Color32 = Color32::from_rgb(235, 120, 100);
pub const O_MARK: Color32 = Color32::from_rgb(100, 170, 240);
pub const MARK_ON_WIN: Color32 = Color32::from_rgb(20, 50, 24);

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_WIN: Color32 = Color32::from_rgb(80, 220, 100);
pub const STATUS_DRAW: Color32 = Color32::from_rgb(255, 180, 50);

// Functions for colors that can't be const
pub fn x_preview() -> Color32 {
    Color32::from_rgba_unmultiplied(235, 120, 100, 80)
}

pub fn o_preview() -> Color32 {
    Color32::from_rgba_unmultiplied(100, 170, 240, 80)
}

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const CELL_GAP: f32 = 10.0;
pub const CELL_ROUNDING: u8 = 6;
pub const MARK_RADIUS_RATIO: f32 = 0.28;
pub const MARK_STROKE_RATIO: f32 = 0.08;
