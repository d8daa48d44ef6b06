//! Map projections: the coordinate transforms between cell space and the
//! map's local point space for the four Tiled layouts.
//!
//! All transforms are pure and total. Degenerate tile sizes produce
//! degenerate output (NaN/zero); avoiding them is the caller's job.

use std::str::FromStr;

use glam::{vec2, Vec2};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Error;
use crate::geom::{MapCoord, TileSize};

/// Tilemap orientation as declared in map metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Square-tile grid.
    Orthogonal,
    /// Diamond (2:1 shear) grid.
    Isometric,
    /// Hexagonal grid with a fixed side length.
    Hexagonal,
    /// Staggered isometric: a hexagonal layout with zero side length.
    Staggered,
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "orthogonal" => Ok(Orientation::Orthogonal),
            "isometric" => Ok(Orientation::Isometric),
            "hexagonal" => Ok(Orientation::Hexagonal),
            "staggered" => Ok(Orientation::Staggered),
            other => Err(Error::UnsupportedOrientation(other.to_owned())),
        }
    }
}

/// Which axis the alternating half-tile offset runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaggerAxis {
    /// Offset alternates per column (flat-top hexagons).
    X,
    /// Offset alternates per row (pointy-top hexagons).
    Y,
}

impl FromStr for StaggerAxis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "x" => Ok(StaggerAxis::X),
            "y" => Ok(StaggerAxis::Y),
            other => Err(Error::UnsupportedStaggerAxis(other.to_owned())),
        }
    }
}

/// Whether odd or even columns/rows receive the half-tile offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaggerIndex {
    /// Odd columns/rows are pushed. Tiled's default.
    #[default]
    Odd,
    /// Even columns/rows are pushed.
    Even,
}

impl FromStr for StaggerIndex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "odd" => Ok(StaggerIndex::Odd),
            "even" => Ok(StaggerIndex::Even),
            other => Err(Error::UnsupportedStaggerIndex(other.to_owned())),
        }
    }
}

/// Stagger axis and index together, the full parity rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stagger {
    /// Axis the alternating offset runs along.
    pub axis: StaggerAxis,
    /// Which parity gets pushed.
    pub index: StaggerIndex,
}

impl Stagger {
    /// Creates a stagger rule.
    pub fn new(axis: StaggerAxis, index: StaggerIndex) -> Self {
        Stagger { axis, index }
    }

    #[inline]
    pub(crate) fn is_x(self) -> bool {
        self.axis == StaggerAxis::X
    }

    /// Whether column/row `i` receives the half-tile push.
    ///
    /// `i & 1` is the parity test; it holds for negative coordinates too
    /// (two's complement keeps bit 0 as the parity bit).
    #[inline]
    pub fn pushes(self, i: i32) -> bool {
        match self.index {
            StaggerIndex::Odd => i & 1 != 0,
            StaggerIndex::Even => i & 1 == 0,
        }
    }
}

/// A map layout: converts between cell coordinates and local point space.
///
/// Built once from map metadata and borrowed read-only by every tile and
/// object that queries geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// `screen = (col * w, row * h)`.
    Orthogonal,
    /// Diamond grid: `x = (col - row) * w/2`, `y = (col + row) * h/2`.
    Isometric,
    /// Hexagonal grid. `side_length` holds the hex side on the stagger axis
    /// component and zero on the other.
    Hexagonal {
        /// Parity rule for the alternating offset.
        stagger: Stagger,
        /// Side length split per axis (one component is always zero).
        side_length: Vec2,
    },
    /// Staggered isometric, a degenerate hexagon with zero side length.
    Staggered {
        /// Parity rule for the alternating offset.
        stagger: Stagger,
    },
}

impl Projection {
    /// Builds a projection from map metadata.
    ///
    /// The scalar `hex_side_length` (Tiled's `hexsidelength`) lands on the
    /// stagger-axis component; it is ignored for non-hexagonal orientations.
    pub fn from_metadata(orientation: Orientation, stagger: Stagger, hex_side_length: f32) -> Self {
        debug!(?orientation, ?stagger, hex_side_length, "building projection");
        match orientation {
            Orientation::Orthogonal => Projection::Orthogonal,
            Orientation::Isometric => Projection::Isometric,
            Orientation::Hexagonal => {
                let side_length = match stagger.axis {
                    StaggerAxis::X => vec2(hex_side_length, 0.0),
                    StaggerAxis::Y => vec2(0.0, hex_side_length),
                };
                Projection::Hexagonal {
                    stagger,
                    side_length,
                }
            }
            Orientation::Staggered => Projection::Staggered { stagger },
        }
    }

    /// The orientation tag this projection was built from.
    pub fn orientation(&self) -> Orientation {
        match self {
            Projection::Orthogonal => Orientation::Orthogonal,
            Projection::Isometric => Orientation::Isometric,
            Projection::Hexagonal { .. } => Orientation::Hexagonal,
            Projection::Staggered { .. } => Orientation::Staggered,
        }
    }

    /// Converts a cell coordinate to its anchor point in local space.
    ///
    /// For orthogonal maps this is the cell's corner; for isometric maps the
    /// diamond's top corner; for hexagonal/staggered maps the top-left of
    /// the cell's bounding box.
    pub fn to_screen(&self, coord: MapCoord, tile_size: TileSize) -> Vec2 {
        match *self {
            Projection::Orthogonal => vec2(
                coord.x as f32 * tile_size.width,
                coord.y as f32 * tile_size.height,
            ),
            Projection::Isometric => {
                let half = tile_size.half();
                vec2(
                    (coord.x - coord.y) as f32 * half.x,
                    (coord.x + coord.y) as f32 * half.y,
                )
            }
            Projection::Hexagonal {
                stagger,
                side_length,
            } => hex_to_screen(coord, tile_size, stagger, side_length),
            Projection::Staggered { stagger } => {
                hex_to_screen(coord, tile_size, stagger, Vec2::ZERO)
            }
        }
    }

    /// Converts a point in local space to the cell coordinate containing it.
    pub fn to_coord(&self, point: Vec2, tile_size: TileSize) -> MapCoord {
        match *self {
            Projection::Orthogonal => MapCoord::new(
                (point.x / tile_size.width).floor() as i32,
                (point.y / tile_size.height).floor() as i32,
            ),
            Projection::Isometric => {
                let half = tile_size.half();
                let tx = point.x / half.x;
                let ty = point.y / half.y;
                // Per-axis floor; the original renderer rounded one axis
                // with the other axis' value, which misplaced every cell
                // along a diagonal band.
                MapCoord::new(
                    ((tx + ty) * 0.5).floor() as i32,
                    ((ty - tx) * 0.5).floor() as i32,
                )
            }
            Projection::Hexagonal {
                stagger,
                side_length,
            } => hex_to_coord(point, tile_size, stagger, side_length),
            Projection::Staggered { stagger } => hex_to_coord(point, tile_size, stagger, Vec2::ZERO),
        }
    }
}

pub(crate) fn side_offset(tile_size: TileSize, side_length: Vec2) -> Vec2 {
    vec2(
        (tile_size.width - side_length.x) * 0.5,
        (tile_size.height - side_length.y) * 0.5,
    )
}

fn hex_to_screen(coord: MapCoord, tile_size: TileSize, stagger: Stagger, side: Vec2) -> Vec2 {
    let offset = side_offset(tile_size, side);
    let column_width = offset.x + side.x;
    let row_height = offset.y + side.y;

    if stagger.is_x() {
        let mut y = coord.y as f32 * (tile_size.height + side.y);
        if stagger.pushes(coord.x) {
            y += row_height;
        }
        vec2(coord.x as f32 * column_width, y)
    } else {
        let mut x = coord.x as f32 * (tile_size.width + side.x);
        if stagger.pushes(coord.y) {
            x += column_width;
        }
        vec2(x, coord.y as f32 * row_height)
    }
}

/// The hexagonal inverse: shift onto a doubled reference grid, then pick the
/// nearest of four candidate cell centers. With zero side length the same
/// walk resolves the staggered-isometric diamond grid.
fn hex_to_coord(point: Vec2, tile_size: TileSize, stagger: Stagger, side: Vec2) -> MapCoord {
    let offset = side_offset(tile_size, side);
    let column_width = offset.x + side.x;
    let row_height = offset.y + side.y;

    let mut p = point;
    if stagger.is_x() {
        p.x -= match stagger.index {
            StaggerIndex::Even => tile_size.width,
            StaggerIndex::Odd => offset.x,
        };
    } else {
        p.y -= match stagger.index {
            StaggerIndex::Even => tile_size.height,
            StaggerIndex::Odd => offset.y,
        };
    }

    // Grid-aligned reference tile; cells are doubled along the stagger axis.
    let grid = vec2(tile_size.width + side.x, tile_size.height + side.y);
    let mut ref_x = (p.x / grid.x).floor();
    let mut ref_y = (p.y / grid.y).floor();
    let rel = vec2(p.x - ref_x * grid.x, p.y - ref_y * grid.y);

    if stagger.is_x() {
        ref_x *= 2.0;
        if stagger.index == StaggerIndex::Even {
            ref_x += 1.0;
        }
    } else {
        ref_y *= 2.0;
        if stagger.index == StaggerIndex::Even {
            ref_y += 1.0;
        }
    }

    let (centers, offsets): ([Vec2; 4], [(i32, i32); 4]) = if stagger.is_x() {
        let left = side.x * 0.5;
        let center_x = left + column_width;
        let center_y = tile_size.height * 0.5;
        (
            [
                vec2(left, center_y),
                vec2(center_x, center_y - row_height),
                vec2(center_x, center_y + row_height),
                vec2(center_x + column_width, center_y),
            ],
            [(0, 0), (1, -1), (1, 0), (2, 0)],
        )
    } else {
        let top = side.y * 0.5;
        let center_x = tile_size.width * 0.5;
        let center_y = top + row_height;
        (
            [
                vec2(center_x, top),
                vec2(center_x - column_width, center_y),
                vec2(center_x + column_width, center_y),
                vec2(center_x, center_y + row_height),
            ],
            [(0, 0), (-1, 1), (0, 1), (0, 2)],
        )
    };

    let mut nearest = 0;
    let mut min_dist = f32::MAX;
    for (i, c) in centers.iter().enumerate() {
        let d = c.distance_squared(rel);
        if d < min_dist {
            min_dist = d;
            nearest = i;
        }
    }

    MapCoord::new(
        ref_x as i32 + offsets[nearest].0,
        ref_y as i32 + offsets[nearest].1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_stagger_pushes_odd_parity_only() {
        let stagger = Stagger::new(StaggerAxis::X, StaggerIndex::Odd);
        assert!(stagger.pushes(1));
        assert!(stagger.pushes(-1));
        assert!(!stagger.pushes(0));
        assert!(!stagger.pushes(-2));
    }

    #[test]
    fn even_stagger_inverts_the_parity() {
        let stagger = Stagger::new(StaggerAxis::Y, StaggerIndex::Even);
        assert!(stagger.pushes(0));
        assert!(stagger.pushes(-2));
        assert!(!stagger.pushes(1));
    }

    #[test]
    fn staggered_is_a_zero_side_hexagon() {
        let stagger = Stagger::new(StaggerAxis::Y, StaggerIndex::Odd);
        let staggered = Projection::Staggered { stagger };
        let hex = Projection::Hexagonal {
            stagger,
            side_length: Vec2::ZERO,
        };
        let size = TileSize::new(64.0, 32.0);
        for y in -3..3 {
            for x in -3..3 {
                let c = MapCoord::new(x, y);
                assert_eq!(staggered.to_screen(c, size), hex.to_screen(c, size));
            }
        }
    }
}
