//! Star colors shared by every glyph painter

use egui::Color32;

pub const STAR_FILLED: Color32 = Color32::from_rgb(0xff, 0xd7, 0x00); // gold
pub const STAR_OUTLINE: Color32 = Color32::from_rgb(0xe1, 0xe1, 0xe1);
pub const STAR_STROKE: f32 = 1.0;
