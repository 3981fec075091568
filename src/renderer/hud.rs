//! Frame layout: help text, ball count, balls

use super::{Palette, Surface};
use crate::sim::Ball;

/// Help lines drawn at the top of every frame
pub const HELP_LINES: [&str; 2] = ["UP/DOWN: +/- 1", "A: Clear | C: +100"];

const TEXT_X: i32 = 5;
const TEXT_TOP: i32 = 5;
const TEXT_SCALE: u32 = 2;
const LINE_STEP: i32 = 15;
/// Distance of the count readout from the bottom edge
const COUNT_OFFSET: i32 = 15;

/// Clear the surface and draw the title, help and count readout
pub fn draw_hud(surface: &mut impl Surface, palette: &Palette, ball_count: usize) {
    let (_, height) = surface.bounds();

    surface.fill(palette.background);

    for (i, line) in HELP_LINES.iter().enumerate() {
        let y = TEXT_TOP + i as i32 * LINE_STEP;
        surface.draw_text(line, TEXT_X, y, TEXT_SCALE, palette.title);
    }

    let count = format!("COUNT: {}", ball_count);
    surface.draw_text(&count, TEXT_X, height as i32 - COUNT_OFFSET, TEXT_SCALE, palette.title);
}

/// Draw one ball, truncating its position to the pixel grid
pub fn draw_ball(surface: &mut impl Surface, palette: &Palette, ball: &Ball) {
    surface.fill_circle(
        ball.pos.x as i32,
        ball.pos.y as i32,
        ball.radius,
        palette.ball(ball.color),
    );
}
