//! Fixed timestep simulation tick
//!
//! Wall-clock frame time is banked in an accumulator and spent in whole
//! fixed-size ticks, so the simulation advances identically at any frame rate.

use super::collision::Outcome;
use super::state::{GamePhase, GameState};
use crate::settings::Settings;

/// Advance the game state by one fixed timestep
///
/// Does nothing once the descent has ended.
pub fn tick(state: &mut GameState, dt: f32) -> Option<Outcome> {
    if state.is_over() {
        return None;
    }

    state.time_ticks += 1;

    let outcome = state.player.update(dt, &state.platforms);
    if let Some(outcome) = outcome {
        state.phase = GamePhase::from(outcome);
        log::info!(
            "{:?} at ({:.2}, {:.2}) after {} ticks",
            outcome,
            state.player.position.x,
            state.player.position.y,
            state.time_ticks
        );
    }
    outcome
}

/// Fixed timestep accumulator
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    /// Seconds per tick
    dt: f32,
    /// Cap on ticks per frame
    max_substeps: u32,
    /// Longest frame delta accepted
    max_frame_dt: f32,
    /// Banked time, always in `[0, dt)` between frames
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32, max_substeps: u32, max_frame_dt: f32) -> Self {
        Self {
            dt,
            max_substeps,
            max_frame_dt,
            accumulator: 0.0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.fixed_timestep,
            settings.max_substeps,
            settings.max_frame_dt,
        )
    }

    /// Bank a frame's time and return how many ticks to run
    ///
    /// Whole steps beyond `max_substeps` are dropped rather than carried, so a
    /// long stall cannot snowball into ever longer catch-up frames.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        let frame_dt = if frame_dt.is_finite() { frame_dt } else { 0.0 };
        self.accumulator += frame_dt.clamp(0.0, self.max_frame_dt);

        let mut steps = 0;
        while self.accumulator >= self.dt && steps < self.max_substeps {
            self.accumulator -= self.dt;
            steps += 1;
        }

        if self.accumulator >= self.dt {
            let dropped = (self.accumulator / self.dt) as u32;
            self.accumulator %= self.dt;
            log::debug!("Frame over budget: dropped {} ticks", dropped);
        }

        steps
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Time banked toward the next tick
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }
}

/// Run one frame's worth of ticks; returns the number actually run
///
/// A finished descent consumes no time and runs no ticks, and a frame stops
/// early at the tick that ends the descent.
pub fn step_frame(state: &mut GameState, timestep: &mut FixedTimestep, frame_dt: f32) -> u32 {
    if state.is_over() {
        return 0;
    }

    let steps = timestep.accumulate(frame_dt);
    let mut ran = 0;
    for _ in 0..steps {
        tick(state, timestep.dt());
        ran += 1;
        if state.is_over() {
            break;
        }
    }
    ran
}
