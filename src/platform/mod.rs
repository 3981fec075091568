//! Platform abstraction layer
//!
//! Handles device/host differences for:
//! - Time (monotonic clock, frame sleep)
//! - Button input

use std::time::{Duration, Instant};

use crate::input::Buttons;

/// Monotonic time source with a blocking sleep
pub trait Clock {
    /// Time elapsed since the clock was created
    fn now(&self) -> Duration;
    fn sleep(&mut self, duration: Duration);
}

/// Wall clock backed by `Instant` and `thread::sleep`
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Polled button states
pub trait InputSource {
    /// Instantaneous button snapshot; must not block
    fn sample(&mut self, now: Duration) -> Buttons;
}

/// No buttons attached
#[derive(Debug, Clone, Copy, Default)]
pub struct IdleButtons;

impl InputSource for IdleButtons {
    fn sample(&mut self, _now: Duration) -> Buttons {
        Buttons::default()
    }
}

/// Scripted presses for running on a host without buttons
///
/// Cycles through a fixed pattern, pressing one button briefly at the start
/// of every step. The press is shorter than the debounce window so each step
/// yields exactly one command.
#[derive(Debug, Clone)]
pub struct DemoButtons {
    step: Duration,
    hold: Duration,
    pattern: Vec<Buttons>,
}

impl Default for DemoButtons {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

impl DemoButtons {
    pub fn new(step: Duration) -> Self {
        let up = Buttons {
            add_one: true,
            ..Default::default()
        };
        let down = Buttons {
            remove_one: true,
            ..Default::default()
        };
        let clear = Buttons {
            clear_all: true,
            ..Default::default()
        };
        let many = Buttons {
            add_many: true,
            ..Default::default()
        };
        Self {
            step,
            hold: Duration::from_millis(100).min(step),
            pattern: vec![up, up, up, down, many, clear],
        }
    }

    pub fn with_pattern(mut self, pattern: Vec<Buttons>) -> Self {
        self.pattern = pattern;
        self
    }
}

impl InputSource for DemoButtons {
    fn sample(&mut self, now: Duration) -> Buttons {
        if self.pattern.is_empty() || self.step.is_zero() {
            return Buttons::default();
        }
        let step_ms = self.step.as_millis();
        let now_ms = now.as_millis();
        let into_step = now_ms % step_ms;
        if into_step >= self.hold.as_millis() {
            return Buttons::default();
        }
        let index = ((now_ms / step_ms) % self.pattern.len() as u128) as usize;
        self.pattern[index]
    }
}
