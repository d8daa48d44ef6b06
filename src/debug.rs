//! Debug-overlay geometry: draw-option flags and per-cell grid outlines.
//!
//! External overlay renderers decide *whether* to draw from
//! [`DebugDrawOptions`] and get *what* to draw from [`grid_outlines`]; the
//! rasterization itself stays outside this crate.

use bitflags::bitflags;
use glam::{vec2, Vec2};

use crate::geom::{MapCoord, TileSize, VertexSet};
use crate::projection::Projection;
use crate::vertex::VertexBuilder;

bitflags! {
    /// Debug drawing options for tilemap nodes and layers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DebugDrawOptions: u32 {
        /// Visualize the node's tile grid.
        const DRAW_GRID = 1 << 0;
        /// Visualize the node's bounding rect.
        const DRAW_FRAME = 1 << 1;
        /// Visualize the node's pathfinding graph.
        const DRAW_GRAPH = 1 << 2;
        /// Draw object bounding shapes.
        const DRAW_OBJECT_FRAMES = 1 << 3;
        /// Draw the layer's anchor point.
        const DRAW_ANCHOR = 1 << 4;
    }
}

/// One closed cell outline per map cell, row-major, in local point space.
///
/// The outline shape follows the projection: rectangles for orthogonal
/// maps, diamonds for isometric and staggered maps, hexagons for hexagonal
/// maps. This is the grid a `DRAW_GRID` overlay renders.
pub fn grid_outlines(
    projection: &Projection,
    columns: u32,
    rows: u32,
    tile_size: TileSize,
    builder: &VertexBuilder,
) -> Vec<VertexSet> {
    let mut out = Vec::with_capacity((columns as usize) * (rows as usize));
    let half = tile_size.half();

    for row in 0..rows as i32 {
        for col in 0..columns as i32 {
            let anchor = projection.to_screen(MapCoord::new(col, row), tile_size);
            let cell = match *projection {
                Projection::Orthogonal => {
                    // Anchor is the cell's top-left corner in y-down space;
                    // the rectangle builder subtracts height, so hand it the
                    // bottom edge.
                    builder.rectangle(
                        tile_size.width,
                        tile_size.height,
                        vec2(anchor.x, anchor.y + tile_size.height),
                    )
                }
                Projection::Isometric => {
                    // Anchor is the diamond's top corner.
                    VertexSet::outline(vec![
                        anchor,
                        vec2(anchor.x + half.x, anchor.y + half.y),
                        vec2(anchor.x, anchor.y + tile_size.height),
                        vec2(anchor.x - half.x, anchor.y + half.y),
                    ])
                }
                Projection::Hexagonal {
                    stagger,
                    side_length,
                } => {
                    let center = anchor + half;
                    let corners = builder.hexagon_corners(tile_size, side_length, stagger.axis);
                    VertexSet::outline(corners.iter().map(|&c| center + c).collect())
                }
                Projection::Staggered { stagger } => {
                    let center = anchor + half;
                    let corners = builder.hexagon_corners(tile_size, Vec2::ZERO, stagger.axis);
                    VertexSet::outline(dedup_consecutive(
                        corners.iter().map(|&c| center + c).collect(),
                    ))
                }
            };
            out.push(cell);
        }
    }
    out
}

/// Drops repeated consecutive points; the zero-side hexagon collapses two
/// of its corners pairwise.
fn dedup_consecutive(points: Vec<Vec2>) -> Vec<Vec2> {
    let mut out: Vec<Vec2> = Vec::with_capacity(points.len());
    for p in points {
        if out.last() != Some(&p) {
            out.push(p);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_compose_like_the_bitmask() {
        let opts = DebugDrawOptions::DRAW_GRID | DebugDrawOptions::DRAW_FRAME;
        assert_eq!(opts.bits(), 0b11);
        assert!(opts.contains(DebugDrawOptions::DRAW_GRID));
        assert!(!opts.contains(DebugDrawOptions::DRAW_GRAPH));
    }

    #[test]
    fn staggered_cells_are_diamonds() {
        use crate::projection::{Stagger, StaggerAxis, StaggerIndex};

        let projection = Projection::Staggered {
            stagger: Stagger::new(StaggerAxis::Y, StaggerIndex::Odd),
        };
        let builder = VertexBuilder::default();
        let cells = grid_outlines(&projection, 2, 2, TileSize::new(64.0, 32.0), &builder);
        assert_eq!(cells.len(), 4);
        for cell in &cells {
            assert_eq!(cell.points.len(), 4);
            assert!(cell.closed);
        }
    }
}
