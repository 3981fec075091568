//! Fixed colors shared by every frame
//!
//! Balls don't own colors, they hold an index into `Palette::balls`.

use embedded_graphics::pixelcolor::{Rgb565, Rgb888};

/// Number of ball colors
pub const BALL_COLOR_COUNT: usize = 6;

/// Colors for screen elements (8-bit RGB, converted to the panel format)
pub mod colors {
    pub const BACKGROUND: (u8, u8, u8) = (0, 0, 0);
    pub const TITLE: (u8, u8, u8) = (150, 200, 255);
    pub const BALLS: [(u8, u8, u8); super::BALL_COLOR_COUNT] = [
        (102, 0, 153),   // Deep violet
        (147, 112, 219), // Medium purple
        (180, 150, 255), // Lavender
        (255, 0, 255),   // Magenta
        (75, 0, 130),    // Indigo
        (85, 40, 115),   // Grape
    ];
}

fn rgb((r, g, b): (u8, u8, u8)) -> Rgb565 {
    Rgb888::new(r, g, b).into()
}

/// Pens allocated once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb565,
    pub title: Rgb565,
    pub balls: [Rgb565; BALL_COLOR_COUNT],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: rgb(colors::BACKGROUND),
            title: rgb(colors::TITLE),
            balls: colors::BALLS.map(rgb),
        }
    }
}

impl Palette {
    /// Pen for a ball's color index (wraps out-of-range indices)
    pub fn ball(&self, index: usize) -> Rgb565 {
        self.balls[index % BALL_COLOR_COUNT]
    }
}
