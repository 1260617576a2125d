//! Lunar Lander - descend under gravity and touch down on a safe platform
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, physics, collisions, fixed timestep)
//! - `renderer`: Draw-call contract and CPU-side quad generation
//! - `input`: Logical controls and input sources
//! - `game`: Frame driver tying input, simulation and rendering together
//! - `settings`: Data-driven tuning loaded from JSON

pub mod error;
pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{AssetError, ConfigError, LanderError};
pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (~60 Hz)
    pub const FIXED_TIMESTEP: f32 = 0.016_666_6;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest wall-clock frame delta fed to the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Lunar surface gravity (units/s²)
    pub const ACC_OF_GRAVITY: f32 = -1.62;

    /// Player defaults
    pub const PLAYER_START_Y: f32 = 3.0;
    pub const PLAYER_SPEED: f32 = 2.0;
    pub const PLAYER_SIZE: f32 = 0.8;
    pub const PLAYER_BOOSTING_POWER: f32 = 3.0;
    pub const PLAYER_DRAG: f32 = 0.8;

    /// Platform field
    pub const PLATFORM_COUNT: usize = 9;
    pub const PLATFORM_SIZE: f32 = 1.0;
    pub const PLATFORM_MIN_Y: i32 = -3;
    pub const PLATFORM_MAX_Y: i32 = 1;

    /// Ship sprite sheet: one row, one column per thrust level
    pub const SHIP_SHEET_COLS: u32 = 3;
    pub const SHIP_SHEET_ROWS: u32 = 1;
    /// Seconds each animation frame stays on screen
    pub const SECONDS_PER_FRAME: f32 = 0.25;

    /// Glyphs per row/column in the font atlas
    pub const FONTBANK_SIZE: u32 = 16;

    /// Orthographic view bounds
    pub const VIEW_HALF_WIDTH: f32 = 5.0;
    pub const VIEW_HALF_HEIGHT: f32 = 3.75;
}
