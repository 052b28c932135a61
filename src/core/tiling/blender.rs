//! Reassembles processed tiles into one seamless output image by weighted
//! accumulation.
//!
//! Every tile contributes `pixel * mask` into a floating-point canvas while a
//! parallel accumulator tracks the total weight per pixel. Dividing the two
//! yields a proper weighted average: interior pixels are covered by exactly
//! one tile at weight 1 and pass through unchanged, while overlap bands get a
//! smooth transition instead of a hard cut. Weights are not required to sum
//! to 1 (crossing bands multiply), which is why the normalization divides by
//! the accumulated weight rather than assuming complementary masks.
use ndarray::{Array2, Array3, s};
use tracing::debug;

use crate::core::tiling::blend::{EdgeFlags, create_blend_mask};
use crate::core::tiling::geometry::Tile;
use crate::error::{Error, Result};
use crate::types::BlendCurve;

/// Guards the normalization against pixels no tile ever wrote. Full coverage
/// makes that impossible for splitter-produced tiles, but a malformed tile
/// list must not divide by zero.
const MIN_WEIGHT: f32 = 1e-6;

/// Merges upscaled tiles with seamless blending.
///
/// `overlap` is the same value used at split time, in pre-scale pixels;
/// `scale` is the integer factor applied by the external per-tile transform.
#[derive(Debug, Clone, Copy)]
pub struct TileBlender {
    overlap: u32,
    scale: u32,
    curve: BlendCurve,
}

impl TileBlender {
    pub fn new(overlap: u32, scale: u32, curve: BlendCurve) -> Result<Self> {
        if scale == 0 {
            return Err(Error::ZeroScale);
        }
        Ok(TileBlender {
            overlap,
            scale,
            curve,
        })
    }

    pub fn overlap(&self) -> u32 {
        self.overlap
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn curve(&self) -> BlendCurve {
        self.curve
    }

    /// Merges `tiles` into the final `(original_height * scale,
    /// original_width * scale, 3)` image. Accumulation is commutative, so
    /// tile order does not matter.
    ///
    /// Each tile's processed buffer must be exactly its padded region at
    /// `scale`x resolution; anything else is a contract violation by the
    /// external transform and is reported as [`Error::TileShapeMismatch`]
    /// with the offending tile's coordinates, never silently coerced.
    pub fn merge(
        &self,
        tiles: &[Tile],
        original_width: u32,
        original_height: u32,
    ) -> Result<Array3<u8>> {
        if original_width == 0 || original_height == 0 {
            return Err(Error::EmptyInput {
                width: original_width,
                height: original_height,
            });
        }

        let scale = self.scale as usize;
        let out_w = original_width as usize * scale;
        let out_h = original_height as usize * scale;
        let overlap_scaled = self.overlap * self.scale;

        let mut output = Array3::<f32>::zeros((out_h, out_w, 3));
        let mut weights = Array2::<f32>::zeros((out_h, out_w));

        for tile in tiles {
            let region_w = tile.region.width as usize * scale;
            let region_h = tile.region.height as usize * scale;

            let expected = (
                (tile.region.height + tile.padding.vertical()) as usize * scale,
                (tile.region.width + tile.padding.horizontal()) as usize * scale,
                3,
            );
            let actual = tile.image.dim();
            if actual != expected {
                return Err(Error::TileShapeMismatch {
                    tile_x: tile.x,
                    tile_y: tile.y,
                    expected,
                    actual,
                });
            }

            if tile.x < 0
                || tile.y < 0
                || tile.x as usize * scale + region_w > out_w
                || tile.y as usize * scale + region_h > out_h
            {
                return Err(Error::TileOutOfBounds {
                    tile_x: tile.x,
                    tile_y: tile.y,
                    region: (region_h, region_w),
                    canvas: (out_h, out_w),
                });
            }

            let x = tile.x as usize * scale;
            let y = tile.y as usize * scale;

            // Boundary test on original (unscaled) geometry, identical to
            // the split-time classification, so it is scale-independent.
            let edges = EdgeFlags {
                top: tile.y == 0,
                left: tile.x == 0,
                right: tile.x + tile.region.width as i64 >= original_width as i64,
                bottom: tile.y + tile.region.height as i64 >= original_height as i64,
            };

            let mask = create_blend_mask(region_w, region_h, overlap_scaled, self.curve, edges);

            // Crop the padding back off using the recorded per-side amounts.
            // Padding is not symmetric: an interior-edge tile is padded only
            // toward the interior, so the offset must come from that side's
            // actual padding, not half the size difference.
            let top = tile.padding.top as usize * scale;
            let left = tile.padding.left as usize * scale;
            let cropped = tile
                .image
                .slice(s![top..top + region_h, left..left + region_w, ..]);

            for r in 0..region_h {
                for c in 0..region_w {
                    let w = mask[[r, c]];
                    for ch in 0..3 {
                        output[[y + r, x + c, ch]] += cropped[[r, c, ch]] as f32 * w;
                    }
                    weights[[y + r, x + c]] += w;
                }
            }
        }

        let mut merged = Array3::<u8>::zeros((out_h, out_w, 3));
        for r in 0..out_h {
            for c in 0..out_w {
                let w = weights[[r, c]].max(MIN_WEIGHT);
                for ch in 0..3 {
                    merged[[r, c, ch]] = (output[[r, c, ch]] / w).round().clamp(0.0, 255.0) as u8;
                }
            }
        }

        debug!(
            "merged {} tiles into {}x{} canvas (overlap {}, scale {})",
            tiles.len(),
            out_w,
            out_h,
            self.overlap,
            self.scale
        );

        Ok(merged)
    }
}
