#![warn(missing_docs)]

//! Projection math, shape vertices & tile animation timing for Tiled-style
//! maps.
//!
//! This crate is the pure-computation core of a tilemap renderer: it
//! converts between cell coordinates and local point space for the four
//! Tiled layouts ([`Projection`]), packs/unpacks mirror flags in 32-bit
//! global tile ids ([`TileId`]), generates shape outlines and curves
//! ([`VertexBuilder`]), and selects animation frames from elapsed time
//! ([`AnimationState`]). Parsing map documents, loading textures and
//! issuing draw calls are left to the host engine.

mod animation;
mod debug;
mod error;
mod geom;
mod gid;
mod projection;
mod vertex;

pub use animation::{cycle_duration, AnimationFrame, AnimationState};
pub use debug::{grid_outlines, DebugDrawOptions};
pub use error::Error;
pub use geom::{MapCoord, TileSize, VertexSet};
pub use gid::{TileFlags, TileId, FLIP_D, FLIP_H, FLIP_V, LOCAL_ID_MASK};
pub use projection::{Orientation, Projection, Stagger, StaggerAxis, StaggerIndex};
pub use vertex::{RenderConfig, VertexBuilder};
