//! Entity colors and spawn palettes.

use serde::{Deserialize, Serialize};

/// RGB color used for entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::new(255, 0, 0);
    pub const YELLOW: Color = Color::new(255, 255, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const CYAN: Color = Color::new(0, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Default palette for food pellets.
pub fn food_palette() -> Vec<Color> {
    vec![Color::RED, Color::YELLOW, Color::GREEN, Color::CYAN]
}

/// Default palette for player cells.
pub fn cell_palette() -> Vec<Color> {
    vec![Color::RED, Color::YELLOW, Color::GREEN, Color::BLACK, Color::CYAN]
}

/// Bush color (bushes are never randomized).
pub const BUSH_COLOR: Color = Color::GREEN;
