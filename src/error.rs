//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image codec, and array shape errors, and provides
//! semantic variants for tiling configuration and contract violations at the
//! split/merge boundary.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("Invalid tiling: overlap {overlap} must be smaller than tile size {tile_size}")]
    InvalidTiling { tile_size: u32, overlap: u32 },

    #[error("Scale must be greater than 0")]
    ZeroScale,

    #[error("Scale mismatch: transform produces {transform}x, blender expects {blender}x")]
    ScaleMismatch { transform: u32, blender: u32 },

    #[error("Empty input image: {width}x{height}")]
    EmptyInput { width: u32, height: u32 },

    #[error(
        "Tile at ({tile_x}, {tile_y}) has pixel buffer {actual:?}, expected {expected:?} (h, w, channels)"
    )]
    TileShapeMismatch {
        tile_x: i64,
        tile_y: i64,
        expected: (usize, usize, usize),
        actual: (usize, usize, usize),
    },

    #[error(
        "Tile at ({tile_x}, {tile_y}) covers {region:?} outside the output canvas {canvas:?} (h, w)"
    )]
    TileOutOfBounds {
        tile_x: i64,
        tile_y: i64,
        region: (usize, usize),
        canvas: (usize, usize),
    },

    #[error("Transform failed on tile at ({tile_x}, {tile_y}): {message}")]
    Transform {
        tile_x: i64,
        tile_y: i64,
        message: String,
    },

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}
