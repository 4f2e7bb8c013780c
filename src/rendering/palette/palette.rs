//! Centralized marble color palette & helpers.
//! Single source of truth for ball visuals, particle bursts and debug output.

use bevy::prelude::*;

use crate::core::board::BallColor;

/// Display colors indexed by `BallColor::index()`. Update here only.
pub const BASE_COLORS: [Color; 5] = [
    Color::srgb(0.20, 0.45, 0.95), // blue
    Color::srgb(0.60, 0.62, 0.66), // gray
    Color::srgb(0.20, 0.80, 0.40), // green
    Color::srgb(0.92, 0.20, 0.22), // red
    Color::srgb(0.98, 0.82, 0.18), // yellow
];

pub const BACKGROUND: Color = Color::srgb(0.07, 0.07, 0.10);

#[inline]
pub fn color_for(color: BallColor) -> Color {
    BASE_COLORS[color.index() % BASE_COLORS.len()]
}
