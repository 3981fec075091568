//! Rendering module
//!
//! Pixel work is delegated to a `Surface`. This module only decides what
//! goes where and with which pen.

pub mod framebuffer;
pub mod hud;
pub mod palette;

pub use embedded_graphics::pixelcolor::Rgb565;
pub use framebuffer::Framebuffer;
pub use hud::{draw_ball, draw_hud};
pub use palette::{BALL_COLOR_COUNT, Palette};

/// A fixed-size drawing target with an explicit present step
pub trait Surface {
    /// Width and height in pixels
    fn bounds(&self) -> (u32, u32);
    /// Fill the whole surface with one color
    fn fill(&mut self, color: Rgb565);
    /// Filled circle centered at `(x, y)`
    fn fill_circle(&mut self, x: i32, y: i32, radius: u32, color: Rgb565);
    /// Text with its top-left corner at `(x, y)`
    fn draw_text(&mut self, text: &str, x: i32, y: i32, scale: u32, color: Rgb565);
    /// Push the finished frame to the device
    fn present(&mut self);
}
