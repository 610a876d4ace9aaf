//! Palette conversions for egui.

use cmp_charts::{goal_color, Rgb};
use egui::Color32;

pub fn color32(c: Rgb) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}

/// Goal tab tint, cyclic by goal index.
pub fn goal_color32(index: usize) -> Color32 {
    color32(goal_color(index))
}
