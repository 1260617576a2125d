//! Sprite-sheet quads

use super::vertex::{Vertex, quad};

/// Unit quad centred on the origin showing one cell of a `cols × rows` sheet
///
/// Cells are numbered row-major from the top-left.
pub fn atlas_quad(cell: u32, cols: u32, rows: u32) -> [Vertex; 6] {
    let cols = cols.max(1);
    let rows = rows.max(1);

    let width = 1.0 / cols as f32;
    let height = 1.0 / rows as f32;
    let u = (cell % cols) as f32 * width;
    let v = (cell / cols) as f32 * height;

    quad(-0.5, -0.5, 0.5, 0.5, u, v, u + width, v + height)
}
