//! Theme constants for the Tic-Tac-Toe GUI
//!
//! The palette follows the classic two-section look: a white info panel on
//! the left and a teal board area on the right.

use egui::Color32;

// Board area
pub const BOARD_BG: Color32 = Color32::from_rgb(28, 170, 156);
pub const GRID_LINE: Color32 = Color32::from_rgb(23, 145, 135);

// Marks
pub const CIRCLE_COLOR: Color32 = Color32::from_rgb(239, 231, 200);
pub const CROSS_COLOR: Color32 = Color32::from_rgb(66, 66, 66);
pub const WIN_LINE: Color32 = Color32::from_rgb(66, 66, 66);

// Info panel
pub const PANEL_BG: Color32 = Color32::from_rgb(255, 255, 255);
pub const CARD_BG: Color32 = Color32::from_rgb(243, 244, 246);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0, 0, 0);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(70, 75, 80);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Buttons
pub const BUTTON_BG: Color32 = Color32::from_rgb(52, 152, 219);
#[allow(dead_code)]
pub const BUTTON_HOVER: Color32 = Color32::from_rgb(41, 128, 185);

// Status
pub const STATUS_WIN: Color32 = Color32::from_rgb(39, 174, 96);
pub const STATUS_DRAW: Color32 = Color32::from_rgb(180, 120, 30);

// Hover previews can't be const (alpha blending helpers)
pub fn hover_cross() -> Color32 {
    Color32::from_rgba_unmultiplied(66, 66, 66, 90)
}

pub fn hover_blocked() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 60, 60, 70)
}

// Mark geometry as fractions of the cell size, matching the original
// 200 px cells (line 15, cross 25, circle radius 66, inset 50)
pub const GRID_LINE_RATIO: f32 = 0.075;
pub const CROSS_WIDTH_RATIO: f32 = 0.125;
pub const CROSS_INSET_RATIO: f32 = 0.25;
pub const CIRCLE_RADIUS_RATIO: f32 = 1.0 / 3.0;
pub const CIRCLE_WIDTH_RATIO: f32 = 0.075;
pub const WIN_LINE_RATIO: f32 = 0.075;

/// Rules text shown in the info panel
pub const RULES: [&str; 5] = [
    "Rules:",
    "1. X is Player, O is Computer",
    "2. Players take turns marking empty squares",
    "3. First to get 3 in a row wins",
    "4. If all squares are filled with no winner, it's a draw",
];
