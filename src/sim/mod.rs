//! Deterministic simulation module
//!
//! All ball physics lives here. This module must stay pure:
//! - One step per frame, no wall-clock time
//! - Randomness only through an injected `RandomSource`
//! - No rendering or platform dependencies

pub mod collision;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{AxisResult, resolve_axis};
pub use rng::{RandomSource, ScriptedSource, seeded};
pub use state::{Ball, Simulation};
pub use tick::update_ball;
