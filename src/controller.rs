//! Fixed-tick controller loop
//!
//! Each frame: sample the clock, gate and apply one button command, draw the
//! HUD, update and draw every ball, present, then sleep.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::input::{Command, Debouncer};
use crate::platform::{Clock, InputSource};
use crate::renderer::{Palette, Surface, draw_ball, draw_hud};
use crate::settings::Settings;
use crate::sim::{RandomSource, Simulation};

/// How the end-of-frame sleep is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FramePacing {
    /// Always sleep the full frame delay; frames stretch under load
    #[default]
    Fixed,
    /// Sleep whatever is left of the frame delay (nothing when overrun)
    Adaptive,
}

impl FramePacing {
    /// Sleep for a frame that took `elapsed` to produce
    pub fn sleep_for(self, frame_delay: Duration, elapsed: Duration) -> Duration {
        match self {
            FramePacing::Fixed => frame_delay,
            FramePacing::Adaptive => frame_delay.saturating_sub(elapsed),
        }
    }
}

/// Owns the simulation and every collaborator the loop talks to
pub struct Controller<S, I, C, R> {
    sim: Simulation,
    debouncer: Debouncer,
    palette: Palette,
    surface: S,
    input: I,
    clock: C,
    rng: R,
    frame_delay: Duration,
    pacing: FramePacing,
    /// Frames completed so far
    frames: u64,
    stats_interval: u64,
}

impl<S, I, C, R> Controller<S, I, C, R>
where
    S: Surface,
    I: InputSource,
    C: Clock,
    R: RandomSource,
{
    /// Build a controller sized to `surface`, seeded with the initial balls
    pub fn new(settings: &Settings, surface: S, input: I, clock: C, mut rng: R) -> Self {
        let (width, height) = surface.bounds();
        let mut sim = Simulation::new(width, height);
        sim.max_balls = settings.max_balls;
        sim.add_n(settings.initial_balls, &mut rng);

        let mut debouncer = Debouncer::new(settings.debounce_window());
        debouncer.bulk_add = settings.bulk_add;
        debouncer.policy = settings.multi_press;

        Self {
            sim,
            debouncer,
            palette: Palette::default(),
            surface,
            input,
            clock,
            rng,
            frame_delay: settings.frame_delay(),
            pacing: settings.pacing,
            frames: 0,
            stats_interval: settings.stats_interval,
        }
    }

    pub fn sim(&self) -> &Simulation {
        &self.sim
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Produce one frame without sleeping; returns the accepted command
    pub fn step(&mut self) -> Option<Command> {
        let now = self.clock.now();

        // Skip sampling entirely while the gate is closed
        let command = if self.debouncer.is_open(now) {
            let buttons = self.input.sample(now);
            self.debouncer.poll(now, &buttons)
        } else {
            None
        };
        if let Some(command) = command {
            command.apply(&mut self.sim, &mut self.rng);
            log::info!("{:?} -> {} balls", command, self.sim.len());
        }

        draw_hud(&mut self.surface, &self.palette, self.sim.len());

        let surface = &mut self.surface;
        let palette = &self.palette;
        self.sim.tick_each(|ball| draw_ball(&mut *surface, palette, ball));

        self.surface.present();
        self.frames += 1;

        if self.stats_interval > 0 && self.frames % self.stats_interval == 0 {
            log::debug!(
                "frame {} at {:.1}s, {} balls",
                self.frames,
                now.as_secs_f32(),
                self.sim.len()
            );
        }

        command
    }

    /// Run frames until `running` is cleared
    pub fn run(&mut self, running: &AtomicBool) {
        while running.load(Ordering::SeqCst) {
            let frame_start = self.clock.now();
            self.step();
            let elapsed = self.clock.now().saturating_sub(frame_start);
            let sleep = self.pacing.sleep_for(self.frame_delay, elapsed);
            if !sleep.is_zero() {
                self.clock.sleep(sleep);
            }
        }
        log::info!("Stopped after {} frames", self.frames);
    }
}
