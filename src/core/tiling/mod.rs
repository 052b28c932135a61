//! Tile split/process/blend pipeline: geometry primitives, blend-weight
//! masks, the splitter, the blender, and the drivers that wire them to an
//! opaque per-tile transform.
pub mod blend;
pub mod blender;
pub mod geometry;
pub mod pipeline;
pub mod splitter;

pub use blend::{EdgeFlags, create_blend_mask, half_sin_blend, linear_blend, sin_blend};
pub use blender::TileBlender;
pub use geometry::{Padding, Region, Tile, TileOverlap};
pub use pipeline::{IdentityTransform, TileTransform, upscale_tiles, upscale_tiles_parallel};
pub use splitter::TileSplitter;
