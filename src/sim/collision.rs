//! Axis-aligned bounding box collision between the player and platforms
//!
//! Boxes are centred on the entity position with full extents `width` and
//! `height`. Edge contact is not overlap: a lander resting exactly on a
//! platform's top face has not touched down until it sinks into it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Role};

/// Centre + half-extents box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center,
            half_extents: Vec2::new(width / 2.0, height / 2.0),
        }
    }

    /// Strict overlap on both axes
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let gap = (self.center - other.center).abs() - (self.half_extents + other.half_extents);
        gap.x < 0.0 && gap.y < 0.0
    }
}

/// Terminal result of a descent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Touched a win platform
    Landed,
    /// Touched a death platform
    Crashed,
}

/// Test the player against every platform in order
///
/// The first overlapping platform decides the outcome, so a lander straddling
/// a win and a death platform resolves by platform order.
pub fn resolve_platform_collisions(player: &Entity, platforms: &[Entity]) -> Option<Outcome> {
    let bounds = player.bounds();
    platforms
        .iter()
        .filter(|platform| bounds.overlaps(&platform.bounds()))
        .find_map(|platform| match platform.role() {
            Role::WinPlatform => Some(Outcome::Landed),
            Role::DeathPlatform => Some(Outcome::Crashed),
            Role::Player => None,
        })
}
