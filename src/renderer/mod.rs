//! Rendering contract
//!
//! The simulation never talks to a graphics API directly. It builds textured
//! quads on the CPU and hands them to a `Renderer` together with a model
//! matrix; window, shader and GPU upload live behind the trait.

pub mod headless;
pub mod sprite;
pub mod text;
pub mod vertex;

use std::path::Path;

use glam::Mat4;
use serde::{Deserialize, Serialize};

use crate::error::AssetError;
use crate::settings::AssetPaths;
use crate::sim::Role;

pub use headless::{HeadlessRenderer, TextureRegistry};
pub use vertex::Vertex;

/// Opaque handle to an uploaded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextureId(pub u32);

/// Background clear color (RGBA)
pub const BACKGROUND: [f32; 4] = [0.0470, 0.0980, 0.1803, 1.0];

/// Draw-call sink for one frame
pub trait Renderer {
    /// Start a frame
    fn clear(&mut self, color: [f32; 4]);

    /// Model matrix for subsequent draws
    fn set_model_matrix(&mut self, model: Mat4);

    /// Draw a triangle list (6 vertices per quad) with a texture bound
    fn draw_triangles(&mut self, vertices: &[Vertex], texture: TextureId);

    /// Finish and show the frame
    fn present(&mut self);
}

/// Turns image files into texture handles
pub trait TextureLoader {
    fn load(&mut self, path: &Path) -> Result<TextureId, AssetError>;
}

/// Every texture the scene draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SceneTextures {
    pub ship: TextureId,
    pub win_platform: TextureId,
    pub death_platform: TextureId,
    pub font: TextureId,
}

impl SceneTextures {
    /// Load all scene textures; the first failure aborts
    pub fn load(loader: &mut dyn TextureLoader, paths: &AssetPaths) -> Result<Self, AssetError> {
        Ok(Self {
            ship: loader.load(&paths.ship)?,
            win_platform: loader.load(&paths.win_platform)?,
            death_platform: loader.load(&paths.death_platform)?,
            font: loader.load(&paths.font)?,
        })
    }

    /// Sprite for an entity role
    pub fn for_role(&self, role: Role) -> TextureId {
        match role {
            Role::Player => self.ship,
            Role::WinPlatform => self.win_platform,
            Role::DeathPlatform => self.death_platform,
        }
    }
}
