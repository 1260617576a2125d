//! Windowless backends
//!
//! `HeadlessRenderer` records what would have been drawn and
//! `TextureRegistry` hands out handles without decoding images. The native
//! binary runs on these; tests use them to inspect draw calls.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use glam::Mat4;

use super::{Renderer, TextureId, TextureLoader, Vertex};
use crate::error::AssetError;

/// Renderer that counts and remembers draw calls
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub frames: u64,
    /// Draw calls in the current frame
    pub draw_calls: usize,
    pub triangles: usize,
    pub model: Mat4,
    pub last_texture: Option<TextureId>,
    pub last_vertices: Vec<Vertex>,
    /// Textures bound this frame, in draw order
    pub textures: Vec<TextureId>,
}

impl Renderer for HeadlessRenderer {
    fn clear(&mut self, _color: [f32; 4]) {
        self.draw_calls = 0;
        self.triangles = 0;
        self.textures.clear();
    }

    fn set_model_matrix(&mut self, model: Mat4) {
        self.model = model;
    }

    fn draw_triangles(&mut self, vertices: &[Vertex], texture: TextureId) {
        self.draw_calls += 1;
        self.triangles += vertices.len() / 3;
        self.last_texture = Some(texture);
        self.last_vertices = vertices.to_vec();
        self.textures.push(texture);
    }

    fn present(&mut self) {
        self.frames += 1;
    }
}

/// Path-to-handle registry; the same path always yields the same handle
#[derive(Debug, Default)]
pub struct TextureRegistry {
    handles: HashMap<PathBuf, TextureId>,
    /// Fail on paths that do not exist on disk
    require_files: bool,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry that refuses files missing from disk
    pub fn checked() -> Self {
        Self {
            handles: HashMap::new(),
            require_files: true,
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl TextureLoader for TextureRegistry {
    fn load(&mut self, path: &Path) -> Result<TextureId, AssetError> {
        if path.as_os_str().is_empty() {
            return Err(AssetError::EmptyPath);
        }
        if let Some(&id) = self.handles.get(path) {
            return Ok(id);
        }
        if self.require_files && !path.is_file() {
            return Err(AssetError::Unloadable {
                path: path.to_path_buf(),
                reason: "file not found".to_string(),
            });
        }

        let id = TextureId(self.handles.len() as u32 + 1);
        self.handles.insert(path.to_path_buf(), id);
        log::debug!("Texture {} -> {:?}", path.display(), id);
        Ok(id)
    }
}
