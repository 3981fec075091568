//! Random source used when spawning balls
//!
//! Anything implementing `rand::Rng` works; tests can plug in a scripted
//! source to get exact ball attributes.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of the random choices made when a ball is created
pub trait RandomSource {
    /// Integer in `[low, high]` (inclusive)
    fn int_inclusive(&mut self, low: u32, high: u32) -> u32;
    /// Float in `[low, high]`
    fn float_inclusive(&mut self, low: f32, high: f32) -> f32;
    /// Index in `[0, len)`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn int_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.random_range(low..=high)
    }

    fn float_inclusive(&mut self, low: f32, high: f32) -> f32 {
        self.random_range(low..=high)
    }

    fn index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Seeded generator used by the device build
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays fixed values, cycling when exhausted
///
/// Out-of-range values are clamped so a script can never produce a ball
/// the real generator couldn't.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    pub ints: Vec<u32>,
    pub floats: Vec<f32>,
    pub indices: Vec<usize>,
    int_pos: usize,
    float_pos: usize,
    index_pos: usize,
}

impl ScriptedSource {
    pub fn new(ints: Vec<u32>, floats: Vec<f32>, indices: Vec<usize>) -> Self {
        Self {
            ints,
            floats,
            indices,
            ..Default::default()
        }
    }

    fn next<T: Copy>(values: &[T], pos: &mut usize) -> Option<T> {
        if values.is_empty() {
            return None;
        }
        let value = values[*pos % values.len()];
        *pos += 1;
        Some(value)
    }
}

impl RandomSource for ScriptedSource {
    fn int_inclusive(&mut self, low: u32, high: u32) -> u32 {
        Self::next(&self.ints, &mut self.int_pos)
            .unwrap_or(low)
            .clamp(low, high)
    }

    fn float_inclusive(&mut self, low: f32, high: f32) -> f32 {
        Self::next(&self.floats, &mut self.float_pos)
            .unwrap_or(low)
            .clamp(low, high)
    }

    fn index(&mut self, len: usize) -> usize {
        Self::next(&self.indices, &mut self.index_pos).unwrap_or(0) % len
    }
}
