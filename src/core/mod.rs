//! Core building blocks: tiling parameters and the split/blend pipeline.
//! These are the primitives consumed by the high-level `api` module.
pub mod params;
pub mod tiling;
