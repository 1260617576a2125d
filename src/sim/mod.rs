//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (platforms left to right)
//! - No graphics API or platform dependencies; drawing goes through `Renderer`

pub mod animation;
pub mod autopilot;
pub mod collision;
pub mod entity;
pub mod state;
pub mod tick;

pub use animation::{Animation, AnimationRow, ThrustLevel};
pub use autopilot::Autopilot;
pub use collision::{Aabb, Outcome, resolve_platform_collisions};
pub use entity::{Entity, Motion, PlayerTuning, Role};
pub use state::{GamePhase, GameState, generate_platforms};
pub use tick::{FixedTimestep, step_frame, tick};
