//! Sprite-sheet animation driven by thrust level

use serde::{Deserialize, Serialize};

use crate::consts::SECONDS_PER_FRAME;

/// How hard the booster is firing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThrustLevel {
    #[default]
    Idle,
    /// Booster on, ship still sinking
    Low,
    /// Booster on, ship climbing
    High,
}

impl ThrustLevel {
    /// Pick a level from booster state and vertical velocity
    pub fn from_physics(booster_active: bool, vertical_velocity: f32) -> Self {
        match (booster_active, vertical_velocity > 0.0) {
            (false, _) => ThrustLevel::Idle,
            (true, false) => ThrustLevel::Low,
            (true, true) => ThrustLevel::High,
        }
    }

    /// Frames for this level on the sheet
    pub fn row(self) -> AnimationRow {
        SHIP_ROWS[self as usize]
    }
}

/// A run of consecutive sheet cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationRow {
    /// First cell index (row-major)
    pub start: u32,
    /// Number of cells
    pub len: u32,
}

/// Indexed by `ThrustLevel as usize`
const SHIP_ROWS: [AnimationRow; 3] = [
    AnimationRow { start: 0, len: 1 },
    AnimationRow { start: 1, len: 1 },
    AnimationRow { start: 2, len: 1 },
];

/// Per-entity animation bookkeeping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub level: ThrustLevel,
    /// Offset within the current row
    pub frame: u32,
    /// Seconds spent on the current frame
    pub elapsed: f32,
    pub cols: u32,
    pub rows: u32,
}

impl Animation {
    pub fn new(cols: u32, rows: u32) -> Self {
        Self {
            level: ThrustLevel::Idle,
            frame: 0,
            elapsed: 0.0,
            cols,
            rows,
        }
    }

    /// Single-cell sheet (platforms)
    pub fn still() -> Self {
        Self::new(1, 1)
    }

    /// Switch rows; restarts the row only when the level actually changes
    pub fn set_level(&mut self, level: ThrustLevel) {
        if self.level != level {
            self.level = level;
            self.frame = 0;
            self.elapsed = 0.0;
        }
    }

    /// Advance the clock, stepping at most one frame per call
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
        if self.elapsed >= SECONDS_PER_FRAME {
            let len = self.level.row().len.max(1);
            self.frame = (self.frame + 1) % len;
            self.elapsed = 0.0;
        }
    }

    /// Sheet cell to draw right now
    pub fn cell(&self) -> u32 {
        self.level.row().start + self.frame
    }
}
