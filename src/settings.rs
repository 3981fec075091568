//! Runtime settings
//!
//! Read once at startup from a JSON file named by `PICO_BALLS_SETTINGS`.
//! Anything missing falls back to the defaults in `consts`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::controller::FramePacing;
use crate::input::MultiPressPolicy;

/// Settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Display ===
    pub width: u32,
    pub height: u32,

    // === Timing ===
    /// Delay between frames (ms)
    pub frame_delay_ms: u64,
    /// Fixed sleep every frame, or sleep only for what's left of the frame
    pub pacing: FramePacing,
    /// Shared cooldown between accepted button commands (ms)
    pub debounce_ms: u64,

    // === Balls ===
    /// Balls present at startup
    pub initial_balls: usize,
    /// Balls added by the C button
    pub bulk_add: usize,
    /// Upper bound on ball count (None = unbounded)
    pub max_balls: Option<usize>,
    /// What to do when several buttons are held together
    pub multi_press: MultiPressPolicy,
    /// RNG seed (random when absent)
    pub seed: Option<u64>,

    // === Host ===
    /// Press buttons automatically (no GPIO on a desktop host)
    pub demo_input: bool,
    /// Write every presented frame (raw RGB565) to this file
    pub frame_dump: Option<PathBuf>,
    /// Frames between debug stats lines (0 = never)
    pub stats_interval: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,

            frame_delay_ms: FRAME_DELAY_MS,
            pacing: FramePacing::Fixed,
            debounce_ms: DEBOUNCE_MS,

            initial_balls: INITIAL_BALLS,
            bulk_add: BULK_ADD,
            max_balls: None,
            multi_press: MultiPressPolicy::FirstWins,
            seed: None,

            demo_input: false,
            frame_dump: None,
            stats_interval: 250,
        }
    }
}

impl Settings {
    /// Environment variable holding the settings file path
    pub const PATH_ENV: &'static str = "PICO_BALLS_SETTINGS";

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Parse settings from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from the file named by `PICO_BALLS_SETTINGS`
    pub fn load() -> Self {
        match std::env::var_os(Self::PATH_ENV) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Replace out-of-range display dimensions with the defaults
    ///
    /// Each axis must hold the largest ball (so it can't end up outside the
    /// walls) and stay within a real panel size.
    pub fn validate(&mut self) {
        let range = MIN_SCREEN_DIM..=MAX_SCREEN_DIM;
        if !range.contains(&self.width) {
            log::warn!(
                "Display width {} outside {}..={}, using {}",
                self.width,
                MIN_SCREEN_DIM,
                MAX_SCREEN_DIM,
                SCREEN_WIDTH
            );
            self.width = SCREEN_WIDTH;
        }
        if !range.contains(&self.height) {
            log::warn!(
                "Display height {} outside {}..={}, using {}",
                self.height,
                MIN_SCREEN_DIM,
                MAX_SCREEN_DIM,
                SCREEN_HEIGHT
            );
            self.height = SCREEN_HEIGHT;
        }
    }

    /// Load settings from `path`, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Can't read settings {}: {}, using defaults", path.display(), e);
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(mut settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.validate();
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}
