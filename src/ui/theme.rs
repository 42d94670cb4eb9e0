//! Theme constants for the Pentago GUI

use egui::Color32;

// Board colors - dark lacquered wood
pub const BOARD_BG: Color32 = Color32::from_rgb(150, 40, 35);
pub const QUADRANT_BG: Color32 = Color32::from_rgb(178, 52, 45);
pub const QUADRANT_GAP: Color32 = Color32::from_rgb(60, 20, 18);
pub const HOLE: Color32 = Color32::from_rgb(110, 28, 25);

// Stone colors
pub const BLACK_STONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 160, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);
pub const ROTATE_HIGHLIGHT: Color32 = Color32::from_rgb(255, 210, 90);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 100)
}

pub fn hover_quadrant() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 230, 150, 40)
}

// Panel colors - dark modern theme
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const QUADRANT_GAP_WIDTH: f32 = 8.0;
pub const STONE_RADIUS_RATIO: f32 = 0.38;
pub const HOLE_RADIUS_RATIO: f32 = 0.2;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
