//! Pico Balls - bouncing balls on a small embedded display
//!
//! Core modules:
//! - `sim`: Deterministic simulation (balls, wall collisions, random source)
//! - `input`: Button commands, shared debounce gate, priority resolution
//! - `renderer`: Palette, drawing surface, frame buffer
//! - `platform`: Clock and button sources for the host
//! - `controller`: Fixed-tick loop tying it all together

pub mod controller;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use controller::{Controller, FramePacing};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Display dimensions (Tufty 2040 panel)
    pub const SCREEN_WIDTH: u32 = 320;
    pub const SCREEN_HEIGHT: u32 = 240;
    /// Accepted display size range; the largest ball must fit on both axes
    pub const MIN_SCREEN_DIM: u32 = 2 * BALL_MAX_RADIUS;
    pub const MAX_SCREEN_DIM: u32 = 4096;

    /// Delay between frames
    pub const FRAME_DELAY_MS: u64 = 20;
    /// Minimum time between two accepted button commands
    pub const DEBOUNCE_MS: u64 = 200;

    /// Fraction of velocity kept after a wall bounce
    pub const DAMPING: f32 = 0.95;

    /// Ball radius bounds (inclusive)
    pub const BALL_MIN_RADIUS: u32 = 5;
    pub const BALL_MAX_RADIUS: u32 = 15;
    /// Spawn velocity bounds per axis
    pub const BALL_MAX_SPEED: f32 = 4.0;
    /// No spawned ball moves slower than this on either axis
    pub const BALL_MIN_SPEED: f32 = 1.0;

    /// Balls present on every start
    pub const INITIAL_BALLS: usize = 3;
    /// Balls added by the bulk-add button
    pub const BULK_ADD: usize = 100;
}
