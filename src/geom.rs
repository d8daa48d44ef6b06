//! Primitive value types shared by the projection and vertex builders.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Tile dimensions in map points.
///
/// Zero sizes are placeholder values (upstream map data occasionally carries
/// zero-sized objects) and produce degenerate geometry rather than errors.
/// Negative sizes represent intentionally inverted axes; every transform in
/// this crate is linear in the tile size, so they mirror cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileSize {
    /// Tile width in points.
    #[serde(rename = "tilewidth")]
    pub width: f32,
    /// Tile height in points.
    #[serde(rename = "tileheight")]
    pub height: f32,
}

impl TileSize {
    /// Placeholder size for uninitialized tiles.
    pub const ZERO: TileSize = TileSize {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a tile size.
    pub fn new(width: f32, height: f32) -> Self {
        TileSize { width, height }
    }

    /// Half extents, the step used by every staggered layout.
    #[inline]
    pub fn half(self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

impl From<TileSize> for Vec2 {
    fn from(size: TileSize) -> Vec2 {
        Vec2::new(size.width, size.height)
    }
}

/// Cell coordinate: `x` is the column, `y` the row.
///
/// Carries no bounds of its own; validity against a map's extent is the
/// caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapCoord {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl MapCoord {
    /// Creates a coordinate from column/row.
    pub fn new(x: i32, y: i32) -> Self {
        MapCoord { x, y }
    }
}

/// An ordered run of points describing a shape outline or polyline.
///
/// `breaks` holds the indices where the pen lifts: no edge is drawn from
/// `points[i - 1]` to `points[i]` for any `i` in `breaks`. `controls` carries
/// two cubic Bézier control points per edge when the set came out of the
/// curve builder, and is empty otherwise.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VertexSet {
    /// Outline points in draw order.
    pub points: Vec<Vec2>,
    /// Whether an implicit edge connects the last point back to the first.
    pub closed: bool,
    /// Indices where a new sub-path begins.
    pub breaks: Vec<usize>,
    /// Cubic control point pairs, two per edge, when curved.
    pub controls: Vec<Vec2>,
}

impl VertexSet {
    /// The empty set; external renderers treat this as "nothing to draw".
    pub fn empty() -> Self {
        VertexSet::default()
    }

    /// An open polyline over `points`.
    pub fn open(points: Vec<Vec2>) -> Self {
        VertexSet {
            points,
            ..VertexSet::default()
        }
    }

    /// A closed outline over `points`.
    pub fn outline(points: Vec<Vec2>) -> Self {
        VertexSet {
            points,
            closed: true,
            ..VertexSet::default()
        }
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates the connected sub-paths, splitting at each pen lift.
    pub fn sub_paths(&self) -> impl Iterator<Item = &[Vec2]> + '_ {
        let mut ranges = Vec::with_capacity(self.breaks.len() + 1);
        let mut start = 0usize;
        for &b in &self.breaks {
            ranges.push(start..b);
            start = b;
        }
        ranges.push(start..self.points.len());
        ranges
            .into_iter()
            .map(move |r| &self.points[r])
            .filter(|s| !s.is_empty())
    }
}
