//! Shape vertex generation for tiles and vector objects.
//!
//! Everything here is pure: given sizes and points in, ordered points (and
//! for curved shapes, cubic control points) come out. The external renderer
//! rasterizes; this module never draws.

use glam::{vec2, Vec2};
use tracing::warn;

use crate::geom::{TileSize, VertexSet};
use crate::projection::{side_offset, StaggerAxis};

/// Tension divisor for the Catmull-Rom-to-Bézier conversion.
const CURVE_TENSION: f32 = 3.0;

/// Explicit render configuration.
///
/// Replaces the ambient globals object of older tilemap engines: every
/// builder carries its own copy, so geometry stays reentrant and testable
/// without process-wide setup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Smoothing factor used when approximating ellipses, in `[0, 1]`.
    pub ellipse_curvature: f32,
    /// Fallback pen-lift distance for gap-aware polylines.
    pub gap_threshold: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            ellipse_curvature: 0.75,
            gap_threshold: 8.0,
        }
    }
}

/// Builds ordered point lists for tile and object shapes.
#[derive(Debug, Clone, Copy, Default)]
pub struct VertexBuilder {
    config: RenderConfig,
}

impl VertexBuilder {
    /// Creates a builder with the given configuration.
    pub fn new(config: RenderConfig) -> Self {
        VertexBuilder { config }
    }

    /// The builder's configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Four corners of an axis-aligned rectangle anchored at `origin`.
    ///
    /// The height is subtracted, not added: the order is
    /// `origin → (x+w, y) → (x+w, y-h) → (x, y-h)`. Every shape in this
    /// engine assumes that winding; flipping the sign inverts them all.
    pub fn rectangle(&self, width: f32, height: f32, origin: Vec2) -> VertexSet {
        VertexSet::outline(vec![
            origin,
            vec2(origin.x + width, origin.y),
            vec2(origin.x + width, origin.y - height),
            vec2(origin.x, origin.y - height),
        ])
    }

    /// A regular N-gon sampled as `sides + 1` points, the last repeating the
    /// first to close the loop.
    ///
    /// Point `i` sits at angle `(360/sides) * i - rotation_deg` degrees,
    /// scaled by the per-axis `radius`. `sides < 3` is a caller contract
    /// violation: asserts in debug builds, returns the empty set in release.
    pub fn regular_polygon(
        &self,
        sides: u32,
        radius: Vec2,
        rotation_deg: f32,
        origin: Vec2,
    ) -> VertexSet {
        debug_assert!(sides >= 3, "a polygon needs at least 3 sides");
        if sides < 3 {
            warn!(sides, "regular_polygon called with fewer than 3 sides");
            return VertexSet::empty();
        }
        let step = 360.0 / sides as f32;
        let points = (0..=sides)
            .map(|i| {
                let angle = (step * i as f32 - rotation_deg).to_radians();
                vec2(
                    origin.x + radius.x * angle.cos(),
                    origin.y + radius.y * angle.sin(),
                )
            })
            .collect();
        VertexSet::outline(points)
    }

    /// The six corner offsets of a hexagonal cell, centered on the origin,
    /// y growing downward.
    ///
    /// Stagger-x cells are flat-top, stagger-y cells pointy-top. The
    /// variable edge runs `tile dimension - 2 * side offset` along the
    /// stagger axis; with zero side length the corners collapse pairwise
    /// into the staggered-isometric diamond.
    pub fn hexagon_corners(
        &self,
        tile_size: TileSize,
        side_length: Vec2,
        stagger_axis: StaggerAxis,
    ) -> [Vec2; 6] {
        let offset = side_offset(tile_size, side_length);
        let half_w = tile_size.width * 0.5;
        let half_h = tile_size.height * 0.5;
        match stagger_axis {
            StaggerAxis::X => {
                let v = (tile_size.width - 2.0 * offset.x) * 0.5;
                [
                    vec2(-v, -half_h),
                    vec2(v, -half_h),
                    vec2(half_w, 0.0),
                    vec2(v, half_h),
                    vec2(-v, half_h),
                    vec2(-half_w, 0.0),
                ]
            }
            StaggerAxis::Y => {
                let v = (tile_size.height - 2.0 * offset.y) * 0.5;
                [
                    vec2(0.0, -half_h),
                    vec2(half_w, -v),
                    vec2(half_w, v),
                    vec2(0.0, half_h),
                    vec2(-half_w, v),
                    vec2(-half_w, -v),
                ]
            }
        }
    }

    /// Smooths a closed point loop into a cubic path.
    ///
    /// Returns the anchor points of the path (the input loop, re-closed by
    /// repeating the first point) and two Bézier control points per edge,
    /// derived from Catmull-Rom tangent estimates scaled by `curvature`.
    /// Zero curvature leaves the controls on the chord (straight edges);
    /// `curvature` outside `[0, 1]` is a caller contract violation and is
    /// clamped in release builds. Fewer than two points yields empty output.
    pub fn closed_curve(&self, points: &[Vec2], curvature: f32) -> (Vec<Vec2>, Vec<Vec2>) {
        debug_assert!(
            (0.0..=1.0).contains(&curvature),
            "curvature must be in 0..=1"
        );
        if points.len() < 2 {
            warn!(count = points.len(), "closed_curve needs at least 2 points");
            return (Vec::new(), Vec::new());
        }
        let k = curvature.clamp(0.0, 1.0);
        let n = points.len();
        let mut anchors = Vec::with_capacity(n + 1);
        let mut controls = Vec::with_capacity(n * 2);
        anchors.push(points[0]);

        for i in 0..n {
            let prev = points[(i + n - 1) % n];
            let cur = points[i];
            let next = points[(i + 1) % n];
            let after = points[(i + 2) % n];

            // Catmull-Rom tangents at both ends of the edge cur -> next.
            let m1 = (next - cur) * k + (cur - prev) * k;
            let m2 = (after - next) * k + (next - cur) * k;
            controls.push(cur + m1 / CURVE_TENSION);
            controls.push(next - m2 / CURVE_TENSION);
            anchors.push(next);
        }

        (anchors, controls)
    }

    /// Approximates an ellipse inscribed in a `width × height` rectangle
    /// anchored at `origin`.
    ///
    /// The rectangle's corners are midpoint-interpolated into the four
    /// on-axis extremes, then smoothed with the configured curvature.
    pub fn ellipse(&self, width: f32, height: f32, origin: Vec2) -> VertexSet {
        let rect = self.rectangle(width, height, origin);
        let corners = &rect.points;
        let n = corners.len();
        let mids: Vec<Vec2> = (0..n)
            .map(|i| corners[i].lerp(corners[(i + 1) % n], 0.5))
            .collect();
        let (anchors, controls) = self.closed_curve(&mids, self.config.ellipse_curvature);
        VertexSet {
            points: anchors,
            closed: true,
            breaks: Vec::new(),
            controls,
        }
    }

    /// A polyline whose pen lifts whenever consecutive points are farther
    /// apart than `threshold`.
    ///
    /// Used for navigation-path visualization, where a teleporting
    /// connection must not render as one long straight edge. A
    /// non-positive `threshold` falls back to the configured default. An
    /// empty point list is a caller contract violation.
    pub fn gap_aware_polyline(&self, points: &[Vec2], threshold: f32) -> VertexSet {
        debug_assert!(!points.is_empty(), "polyline needs at least one point");
        if points.is_empty() {
            warn!("gap_aware_polyline called with no points");
            return VertexSet::empty();
        }
        let threshold = if threshold > 0.0 {
            threshold
        } else {
            self.config.gap_threshold
        };
        let mut breaks = Vec::new();
        for i in 1..points.len() {
            if points[i - 1].distance(points[i]) > threshold {
                breaks.push(i);
            }
        }
        VertexSet {
            points: points.to_vec(),
            closed: false,
            breaks,
            controls: Vec::new(),
        }
    }
}
