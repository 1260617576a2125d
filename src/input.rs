//! Logical controls and where they come from
//!
//! A backend polls its keyboard once per frame and reports `Controls`;
//! `apply_controls` turns those into the player's movement intent.

use glam::Vec3;

use crate::sim::{Entity, GameState};

/// Key-down state for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    /// Up / W
    pub thrust: bool,
    /// Left / A
    pub left: bool,
    /// Right / D
    pub right: bool,
    /// Window closed or Q pressed
    pub quit: bool,
}

impl Controls {
    /// Intent vector, never longer than 1 so diagonals are no faster
    pub fn intent(&self) -> Vec3 {
        let x = (self.right as i32 - self.left as i32) as f32;
        let y = if self.thrust { 1.0 } else { 0.0 };
        Vec3::new(x, y, 0.0).clamp_length_max(1.0)
    }
}

/// Replace last frame's intent with this frame's controls
///
/// Nothing carries over: a released key stops acting on the very next poll.
pub fn apply_controls(player: &mut Entity, controls: Controls) {
    player.booster_active = controls.thrust;
    player.set_movement(controls.intent());
}

/// Anything that can be polled for controls once per frame
pub trait InputSource {
    /// Must not block
    fn poll(&mut self, state: &GameState) -> Controls;
}

/// Replays a fixed sequence, then holds no keys
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    frames: Vec<Controls>,
    cursor: usize,
}

impl Scripted {
    pub fn new(frames: Vec<Controls>) -> Self {
        Self { frames, cursor: 0 }
    }
}

impl InputSource for Scripted {
    fn poll(&mut self, _state: &GameState) -> Controls {
        let controls = self.frames.get(self.cursor).copied().unwrap_or_default();
        self.cursor += 1;
        controls
    }
}
