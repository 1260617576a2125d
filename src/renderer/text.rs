//! Bitmap-font text from a 16×16 ASCII glyph atlas

use glam::{Mat4, Vec3};

use super::vertex::{Vertex, quad};
use super::{Renderer, TextureId};
use crate::consts::FONTBANK_SIZE;

/// Glyph quads for `text`, laid out left to right from the origin
///
/// `size` is the glyph edge length and `spacing` the extra gap between glyphs.
/// Non-ASCII characters map to `?`.
pub fn text_vertices(text: &str, size: f32, spacing: f32) -> Vec<Vertex> {
    let cell = 1.0 / FONTBANK_SIZE as f32;
    let half = size / 2.0;

    let mut vertices = Vec::with_capacity(text.len() * 6);
    for (i, ch) in text.chars().enumerate() {
        let index = if ch.is_ascii() { ch as u32 } else { '?' as u32 };
        let offset = (size + spacing) * i as f32;

        let u = (index % FONTBANK_SIZE) as f32 * cell;
        let v = (index / FONTBANK_SIZE) as f32 * cell;

        vertices.extend_from_slice(&quad(
            offset - half,
            -half,
            offset + half,
            half,
            u,
            v,
            u + cell,
            v + cell,
        ));
    }
    vertices
}

/// Draw a line of text with its first glyph centred at `position`
pub fn draw_text(
    renderer: &mut dyn Renderer,
    font: TextureId,
    text: &str,
    size: f32,
    spacing: f32,
    position: Vec3,
) {
    let vertices = text_vertices(text, size, spacing);
    renderer.set_model_matrix(Mat4::from_translation(position));
    renderer.draw_triangles(&vertices, font);
}
