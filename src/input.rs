//! Button commands and the shared debounce gate
//!
//! Four buttons share one cooldown. When the gate is open the buttons are
//! checked in a fixed priority order and at most one command is accepted.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::BULK_ADD;
use crate::sim::{RandomSource, Simulation};

/// Snapshot of the four buttons for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Buttons {
    /// UP: add one ball
    pub add_one: bool,
    /// DOWN: remove the last ball
    pub remove_one: bool,
    /// A: remove every ball
    pub clear_all: bool,
    /// C: add a hundred balls
    pub add_many: bool,
}

impl Buttons {
    pub fn pressed_count(&self) -> usize {
        [self.add_one, self.remove_one, self.clear_all, self.add_many]
            .iter()
            .filter(|&&b| b)
            .count()
    }
}

/// A command accepted from the buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddOne,
    RemoveOne,
    ClearAll,
    /// Add `BULK_ADD` balls (or a configured count)
    AddMany(usize),
}

impl Command {
    /// Highest-priority command among the pressed buttons
    pub fn from_buttons(buttons: &Buttons, bulk_add: usize) -> Option<Self> {
        if buttons.add_one {
            Some(Command::AddOne)
        } else if buttons.remove_one {
            Some(Command::RemoveOne)
        } else if buttons.clear_all {
            Some(Command::ClearAll)
        } else if buttons.add_many {
            Some(Command::AddMany(bulk_add))
        } else {
            None
        }
    }

    pub fn apply(self, sim: &mut Simulation, rng: &mut impl RandomSource) {
        match self {
            Command::AddOne => sim.add_ball(rng),
            Command::RemoveOne => sim.remove_last(),
            Command::ClearAll => sim.clear_all(),
            Command::AddMany(count) => sim.add_n(count, rng),
        }
    }
}

/// What to do when several buttons are held in the same tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MultiPressPolicy {
    /// Highest-priority button wins, the rest are ignored
    #[default]
    FirstWins,
    /// Ignore the tick entirely while more than one button is held
    RejectChord,
}

/// Shared cooldown across all buttons
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    /// Time of the last accepted command
    last_accepted: Option<Duration>,
    pub bulk_add: usize,
    pub policy: MultiPressPolicy,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::consts::DEBOUNCE_MS))
    }
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted: None,
            bulk_add: BULK_ADD,
            policy: MultiPressPolicy::FirstWins,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Whether a command would be accepted at `now`
    pub fn is_open(&self, now: Duration) -> bool {
        match self.last_accepted {
            None => true,
            Some(last) => now.saturating_sub(last) >= self.window,
        }
    }

    /// Check the buttons at `now`; returns the accepted command, if any,
    /// and restarts the cooldown when one is accepted
    pub fn poll(&mut self, now: Duration, buttons: &Buttons) -> Option<Command> {
        if !self.is_open(now) {
            return None;
        }
        if self.policy == MultiPressPolicy::RejectChord && buttons.pressed_count() > 1 {
            return None;
        }
        let command = Command::from_buttons(buttons, self.bulk_add)?;
        self.last_accepted = Some(now);
        Some(command)
    }
}
