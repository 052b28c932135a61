//! High-level, ergonomic library API: upscale whole images in memory or from
//! path to path. Prefer these entrypoints over wiring the splitter, blender,
//! and drivers by hand when integrating TILEFUSE.
use std::path::Path;

use image::RgbImage;
use ndarray::{Array3, ArrayView3};
use tracing::info;

use crate::core::params::TilingParams;
use crate::core::tiling::blender::TileBlender;
use crate::core::tiling::pipeline::{TileTransform, upscale_tiles_parallel};
use crate::core::tiling::splitter::TileSplitter;
use crate::error::{Error, Result};

/// Result of in-memory upscaling.
#[derive(Debug, Clone)]
pub struct UpscaledImage {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    /// Pixels in `(height, width, channel)` layout, 3 channels.
    pub pixels: Array3<u8>,
}

/// Upscales an in-memory image through the split/process/merge pipeline.
///
/// Validates `params`, splits the image, fans tile processing out across the
/// rayon pool, and merges the processed tiles seamlessly. `transform` must
/// report the same scale factor as `params.scale`.
pub fn upscale_image<T: TileTransform + ?Sized>(
    image: ArrayView3<'_, u8>,
    params: &TilingParams,
    transform: &T,
) -> Result<UpscaledImage> {
    let splitter = TileSplitter::new(params.tile_size, params.overlap)?;
    let blender = TileBlender::new(params.overlap, params.scale, params.blend)?;

    let (rows, cols, _) = image.dim();
    info!(
        "upscaling {}x{} image at {}x (tile {}, overlap {}, {} blend)",
        cols, rows, params.scale, params.tile_size, params.overlap, params.blend
    );

    let pixels = upscale_tiles_parallel(&splitter, &blender, transform, image)?;
    let (height, width, _) = pixels.dim();

    Ok(UpscaledImage {
        width: width as u32,
        height: height as u32,
        scale: params.scale,
        pixels,
    })
}

/// Decodes `input`, upscales it, and encodes the result to `output`. The
/// output format is inferred from the file extension.
pub fn upscale_image_to_path<T: TileTransform + ?Sized>(
    input: &Path,
    output: &Path,
    params: &TilingParams,
    transform: &T,
) -> Result<()> {
    let decoded = image::open(input)?.to_rgb8();
    let array = image_to_array(&decoded)?;

    let result = upscale_image(array.view(), params, transform)?;

    let encoded = array_to_image(&result.pixels)?;
    encoded.save(output)?;
    info!(
        "wrote {}x{} image to {:?}",
        result.width, result.height, output
    );
    Ok(())
}

/// Converts a decoded RGB image into `(height, width, 3)` array layout.
pub fn image_to_array(img: &RgbImage) -> Result<Array3<u8>> {
    let (width, height) = img.dimensions();
    Ok(Array3::from_shape_vec(
        (height as usize, width as usize, 3),
        img.as_raw().clone(),
    )?)
}

/// Converts a `(height, width, 3)` array back into an encodable RGB image.
pub fn array_to_image(arr: &Array3<u8>) -> Result<RgbImage> {
    let (height, width, channels) = arr.dim();
    if channels != 3 {
        return Err(Error::External(format!(
            "expected 3-channel pixel array, got {} channels",
            channels
        )));
    }
    let data: Vec<u8> = arr.as_standard_layout().iter().copied().collect();
    RgbImage::from_raw(width as u32, height as u32, data)
        .ok_or_else(|| Error::External("pixel buffer does not match image dimensions".into()))
}
