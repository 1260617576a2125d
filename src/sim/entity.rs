//! The lander and the platforms it descends onto
//!
//! One entity type covers both; the immutable `Role` decides whether the
//! entity integrates (the player) or stays put (platforms).

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use super::animation::{Animation, ThrustLevel};
use super::collision::{Aabb, Outcome, resolve_platform_collisions};
use crate::consts::*;
use crate::renderer::{Renderer, TextureId, sprite};
use crate::settings::Settings;

/// What an entity is, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Player,
    WinPlatform,
    DeathPlatform,
}

/// How a role moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Never integrated
    Static,
    /// Integrated every tick and checked against platforms
    Kinematic,
}

impl Role {
    pub fn motion(self) -> Motion {
        match self {
            Role::Player => Motion::Kinematic,
            Role::WinPlatform | Role::DeathPlatform => Motion::Static,
        }
    }

    pub fn is_platform(self) -> bool {
        self.motion() == Motion::Static
    }
}

/// Player physics parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerTuning {
    pub start: Vec3,
    pub gravity: f32,
    pub speed: f32,
    pub size: f32,
    pub boosting_power: f32,
    pub drag: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for PlayerTuning {
    fn from(settings: &Settings) -> Self {
        Self {
            start: settings.player_start.extend(0.0),
            gravity: settings.gravity,
            speed: settings.player_speed,
            size: settings.player_size,
            boosting_power: settings.boosting_power,
            drag: settings.drag,
        }
    }
}

/// A simulated entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    role: Role,
    /// Centre of the bounding box (z stays 0)
    pub position: Vec3,
    /// Input intent: x steers, y mirrors thrust. Magnitude at most 1.
    pub movement: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    pub speed: f32,
    /// Full box extents
    pub width: f32,
    pub height: f32,
    pub texture: TextureId,
    pub animation: Animation,
    /// Held-thrust flag, cleared on every input poll; alone drives the booster
    pub booster_active: bool,
    pub boosting_power: f32,
    /// Horizontal velocity multiplier per tick
    pub drag: f32,
}

impl Entity {
    /// Create the lander at its start position, at rest
    pub fn player(tuning: PlayerTuning, texture: TextureId) -> Self {
        Self {
            role: Role::Player,
            position: tuning.start,
            movement: Vec3::ZERO,
            velocity: Vec3::ZERO,
            acceleration: Vec3::new(0.0, tuning.gravity, 0.0),
            speed: tuning.speed,
            width: tuning.size,
            height: tuning.size,
            texture,
            animation: Animation::new(SHIP_SHEET_COLS, SHIP_SHEET_ROWS),
            booster_active: false,
            boosting_power: tuning.boosting_power,
            drag: tuning.drag,
        }
    }

    /// Create a square static platform
    pub fn platform(role: Role, position: Vec3, size: f32, texture: TextureId) -> Self {
        debug_assert!(role.is_platform(), "platform constructed with {role:?}");
        Self {
            role,
            position,
            movement: Vec3::ZERO,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            speed: 0.0,
            width: size,
            height: size,
            texture,
            animation: Animation::still(),
            booster_active: false,
            boosting_power: 0.0,
            drag: 1.0,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Store raw input intent; callers clamp its length to 1
    pub fn set_movement(&mut self, movement: Vec3) {
        self.movement = movement;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.position.truncate(), self.width, self.height)
    }

    pub fn thrust_level(&self) -> ThrustLevel {
        self.animation.level
    }

    /// Advance one fixed tick and report a touchdown, if any
    pub fn update(&mut self, dt: f32, platforms: &[Entity]) -> Option<Outcome> {
        match self.role.motion() {
            Motion::Static => None,
            Motion::Kinematic => {
                self.integrate(dt);
                self.animate(dt);
                resolve_platform_collisions(self, platforms)
            }
        }
    }

    fn integrate(&mut self, dt: f32) {
        self.velocity += self.acceleration * dt;
        self.velocity.x *= self.drag;

        if self.booster_active {
            self.velocity.y += self.boosting_power * dt;
        }

        // Steering is a direct offset, not an acceleration
        self.position.x += self.movement.x * self.speed * dt;
        self.position += self.velocity * dt;
    }

    fn animate(&mut self, dt: f32) {
        self.animation
            .set_level(ThrustLevel::from_physics(self.booster_active, self.velocity.y));
        self.animation.advance(dt);
    }

    /// Issue this entity's sprite quad
    pub fn render(&self, renderer: &mut dyn Renderer) {
        let model = Mat4::from_translation(self.position)
            * Mat4::from_scale(Vec3::new(self.width, self.height, 1.0));
        let quad = sprite::atlas_quad(self.animation.cell(), self.animation.cols, self.animation.rows);

        renderer.set_model_matrix(model);
        renderer.draw_triangles(&quad, self.texture);
    }
}
