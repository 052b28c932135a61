//! Built-in per-tile transform: Lanczos3 resizing via `fast_image_resize`.
//!
//! The pipeline core treats the transform as opaque; this one stands in for
//! model inference so the binary is usable without any ML backend.
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use ndarray::{Array3, ArrayView3};

use tilefuse::{Error, Result, TileTransform};

/// Upscales each tile by an integer factor with Lanczos3 convolution.
#[derive(Debug, Clone, Copy)]
pub struct ResizeTransform {
    scale: u32,
}

impl ResizeTransform {
    pub fn new(scale: u32) -> Result<Self> {
        if scale == 0 {
            return Err(Error::ZeroScale);
        }
        Ok(ResizeTransform { scale })
    }
}

impl TileTransform for ResizeTransform {
    fn scale(&self) -> u32 {
        self.scale
    }

    fn apply(&self, tile: ArrayView3<'_, u8>) -> Result<Array3<u8>> {
        let (h, w, _channels) = tile.dim();
        let out_w = w as u32 * self.scale;
        let out_h = h as u32 * self.scale;

        let src_bytes: Vec<u8> = tile.as_standard_layout().iter().copied().collect();
        let src_image = Image::from_vec_u8(w as u32, h as u32, src_bytes, PixelType::U8x3)
            .map_err(Error::external)?;
        let mut dst_image = Image::new(out_w, out_h, PixelType::U8x3);

        let resize_options =
            ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
        let mut resizer = Resizer::new();
        resizer
            .resize(&src_image, &mut dst_image, &resize_options)
            .map_err(Error::external)?;

        Ok(Array3::from_shape_vec(
            (out_h as usize, out_w as usize, 3),
            dst_image.into_vec(),
        )?)
    }
}
