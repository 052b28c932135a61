#![doc = r#"
TILEFUSE — a seamless tile split/process/blend pipeline for image upscaling.

This crate decomposes images that exceed a practical model input size into
overlapping tiles, lets an opaque per-tile transform process each tile
independently (at an integer scale factor), and reassembles the processed
tiles into one full-resolution image with no visible seams. The reconstruction
uses weighted accumulation: every tile contributes through a per-pixel blend
mask, and normalizing by the accumulated weight turns overlap bands into
smooth transitions instead of hard cuts.

The transform itself is out of scope on purpose: anything that maps a
`w x h` pixel buffer to `w*s x h*s` works — model inference, a resampler, or
the built-in [`IdentityTransform`]. The crate powers the TILEFUSE CLI (which
ships a Lanczos3 resize transform) and can be embedded in your own pipeline.

Quick start: upscale an image file
----------------------------------
```rust,no_run
use std::path::Path;
use tilefuse::{upscale_image_to_path, IdentityTransform, TilingParams};

fn main() -> tilefuse::Result<()> {
    let params = TilingParams {
        tile_size: 512,
        overlap: 16,
        scale: 1,
        ..TilingParams::default()
    };

    upscale_image_to_path(
        Path::new("/data/input.png"),
        Path::new("/out/output.png"),
        &params,
        &IdentityTransform,
    )
}
```

Process in-memory with your own transform
-----------------------------------------
```rust
use ndarray::{Array3, ArrayView3};
use tilefuse::{upscale_image, TileTransform, TilingParams};

/// Nearest-neighbor doubling; swap in your model inference here.
struct Doubler;

impl TileTransform for Doubler {
    fn scale(&self) -> u32 {
        2
    }

    fn apply(&self, tile: ArrayView3<'_, u8>) -> tilefuse::Result<Array3<u8>> {
        let (h, w, c) = tile.dim();
        Ok(Array3::from_shape_fn((h * 2, w * 2, c), |(r, col, ch)| {
            tile[[r / 2, col / 2, ch]]
        }))
    }
}

fn main() -> tilefuse::Result<()> {
    let image = Array3::<u8>::zeros((600, 800, 3));
    let params = TilingParams {
        scale: 2,
        ..TilingParams::default()
    };

    let result = upscale_image(image.view(), &params, &Doubler)?;
    assert_eq!((result.width, result.height), (1600, 1200));
    Ok(())
}
```

Low-level building blocks
-------------------------
The pipeline stages are public for callers that need finer control, e.g.
running tiles through an external process pool before merging:

```rust
use ndarray::Array3;
use tilefuse::{BlendCurve, TileBlender, TileSplitter};

fn main() -> tilefuse::Result<()> {
    let image = Array3::<u8>::zeros((1080, 1920, 3));

    let splitter = TileSplitter::new(512, 16)?;
    let tiles = splitter.split(image.view())?;
    // ... hand `tiles` to workers, replacing each tile's `image` in place ...

    let blender = TileBlender::new(16, 1, BlendCurve::HalfSin)?;
    let merged = blender.merge(&tiles, 1920, 1080)?;
    assert_eq!(merged.dim(), (1080, 1920, 3));
    Ok(())
}
```

Error handling
--------------
All public functions return `tilefuse::Result<T>`; match on `tilefuse::Error`
to handle specific cases. Contract violations by the per-tile transform (a
wrong scale factor, altered spatial dimensions) surface as
`Error::TileShapeMismatch` with the offending tile's coordinates and both
shapes — never silently coerced.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core::tiling`] — geometry primitives, blend masks, splitter, blender,
  and the pipeline drivers.
- [`types`] — shared enums (e.g. [`BlendCurve`]).
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::TilingParams;
pub use error::{Error, Result};
pub use types::BlendCurve;

// Tiling pipeline
pub use crate::core::tiling::{
    EdgeFlags, IdentityTransform, Padding, Region, Tile, TileBlender, TileOverlap, TileSplitter,
    TileTransform, create_blend_mask, half_sin_blend, linear_blend, sin_blend, upscale_tiles,
    upscale_tiles_parallel,
};

// High-level API re-exports
pub use api::{
    UpscaledImage, array_to_image, image_to_array, upscale_image, upscale_image_to_path,
};
