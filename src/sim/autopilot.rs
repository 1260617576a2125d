//! Demo pilot
//!
//! Steers over the nearest win platform, keeps clear of taller platforms on
//! the way, and caps its descent rate so it touches down gently. Once the
//! descent is decided it asks to quit.

use super::entity::Role;
use super::state::GameState;
use crate::input::{Controls, InputSource};

/// Horizontal distance counted as lined up with the target
const ALIGN_TOLERANCE: f32 = 0.05;
/// Fastest acceptable sink rate (units/s, negative is down)
const MAX_SINK_RATE: f32 = -0.5;
/// Minimum height over the tallest platform while still travelling
const CLEARANCE: f32 = 0.5;

#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot;

impl Autopilot {
    /// Pick controls for the current state
    pub fn steer(state: &GameState) -> Controls {
        if state.is_over() {
            return Controls {
                quit: true,
                ..Default::default()
            };
        }

        let player = &state.player;
        let x = player.position.x;

        let target_x = state
            .platforms
            .iter()
            .filter(|p| p.role() == Role::WinPlatform)
            .map(|p| p.position.x)
            .min_by(|a, b| (a - x).abs().total_cmp(&(b - x).abs()));

        let dx = target_x.map_or(0.0, |t| t - x);
        let aligned = dx.abs() <= ALIGN_TOLERANCE;

        let tallest = state
            .platforms
            .iter()
            .map(|p| p.position.y + p.height / 2.0)
            .fold(f32::NEG_INFINITY, f32::max);
        let altitude = player.position.y - player.height / 2.0 - tallest;

        let sinking_too_fast = player.velocity.y < MAX_SINK_RATE;
        let too_low_to_travel = !aligned && altitude < CLEARANCE;

        Controls {
            thrust: sinking_too_fast || too_low_to_travel,
            left: !aligned && dx < 0.0,
            right: !aligned && dx > 0.0,
            quit: false,
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> Controls {
        Self::steer(state)
    }
}
