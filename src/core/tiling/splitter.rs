//! Splits large images into overlapping tiles sized for a bounded per-tile
//! transform.
use ndarray::ArrayView3;
use tracing::debug;

use crate::core::tiling::geometry::{Region, Tile};
use crate::error::{Error, Result};

/// Splits images into comparably-sized overlapping tiles.
///
/// `max_tile_size` is a soft cap on tile edge length; the actual tile size is
/// redistributed evenly across the image so the last row/column is never a
/// degenerate sliver. `overlap` is the requested overlap between adjacent
/// tiles in pixels.
#[derive(Debug, Clone, Copy)]
pub struct TileSplitter {
    max_tile_size: u32,
    overlap: u32,
}

impl TileSplitter {
    /// Fails fast when `overlap >= max_tile_size`: the grid step would be
    /// zero or negative and the walk would never advance.
    pub fn new(max_tile_size: u32, overlap: u32) -> Result<Self> {
        if overlap >= max_tile_size {
            return Err(Error::InvalidTiling {
                tile_size: max_tile_size,
                overlap,
            });
        }
        Ok(TileSplitter {
            max_tile_size,
            overlap,
        })
    }

    pub fn max_tile_size(&self) -> u32 {
        self.max_tile_size
    }

    pub fn overlap(&self) -> u32 {
        self.overlap
    }

    /// Minimum tile count per axis, then the dimension distributed evenly:
    /// `count = ceil(dim / max_tile_size)`, `optimal = ceil(dim / count)`.
    ///
    /// A naive fixed tile size leaves a tiny leftover tile on the last
    /// row/column; even distribution keeps all tiles comparably sized, which
    /// improves blend-mask quality.
    pub fn optimal_tile_size(&self, width: u32, height: u32) -> (u32, u32) {
        let tile_count_x = width.div_ceil(self.max_tile_size);
        let tile_count_y = height.div_ceil(self.max_tile_size);
        (width.div_ceil(tile_count_x), height.div_ceil(tile_count_y))
    }

    /// Splits `image` (in `(height, width, channel)` layout) into an ordered,
    /// row-major list of tiles.
    ///
    /// The grid walks from the origin with step `tile_size - overlap`;
    /// candidate regions are clipped to the image bounds, and each tile's
    /// pixel buffer is read from its region expanded by the available room on
    /// each side capped at `overlap`. At true image edges the available room
    /// is zero, so no padding is added there.
    pub fn split(&self, image: ArrayView3<'_, u8>) -> Result<Vec<Tile>> {
        let (rows, cols, _channels) = image.dim();
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyInput {
                width: cols as u32,
                height: rows as u32,
            });
        }

        let width = cols as u32;
        let height = rows as u32;
        let (tile_w, tile_h) = self.optimal_tile_size(width, height);

        // Even distribution can shrink the tile below the requested overlap
        // on small images; never let the walk stall.
        let step_x = (tile_w.saturating_sub(self.overlap)).max(1) as i64;
        let step_y = (tile_h.saturating_sub(self.overlap)).max(1) as i64;

        let img_region = Region::new(0, 0, width, height);
        let mut tiles = Vec::new();

        let mut y = 0i64;
        while y < height as i64 {
            let mut x = 0i64;
            while x < width as i64 {
                let region = Region::new(x, y, tile_w, tile_h).intersect(&img_region);
                let padding = img_region.child_padding(&region).min(self.overlap);
                let read_region = region.add_padding(&padding);

                tiles.push(Tile {
                    image: read_region.read_from(image),
                    region,
                    x: region.x,
                    y: region.y,
                    padding,
                });

                x += step_x;
            }
            y += step_y;
        }

        debug!(
            "split {}x{} into {} tiles of {}x{} (overlap {})",
            width,
            height,
            tiles.len(),
            tile_w,
            tile_h,
            self.overlap
        );

        Ok(tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tiling::geometry::Padding;
    use ndarray::{Array2, Array3};

    fn gradient_image(height: usize, width: usize) -> Array3<u8> {
        Array3::from_shape_fn((height, width, 3), |(r, c, ch)| {
            ((r * 7 + c * 3 + ch * 11) % 256) as u8
        })
    }

    #[test]
    fn rejects_overlap_not_smaller_than_tile_size() {
        assert!(matches!(
            TileSplitter::new(64, 64),
            Err(Error::InvalidTiling {
                tile_size: 64,
                overlap: 64
            })
        ));
        assert!(TileSplitter::new(64, 63).is_ok());
        assert!(matches!(
            TileSplitter::new(0, 0),
            Err(Error::InvalidTiling { .. })
        ));
    }

    #[test]
    fn rejects_empty_image() {
        let splitter = TileSplitter::new(64, 16).unwrap();
        let img = Array3::<u8>::zeros((0, 10, 3));
        assert!(matches!(
            splitter.split(img.view()),
            Err(Error::EmptyInput {
                width: 10,
                height: 0
            })
        ));
    }

    #[test]
    fn optimal_size_distributes_evenly() {
        let splitter = TileSplitter::new(64, 16).unwrap();
        assert_eq!(splitter.optimal_tile_size(100, 100), (50, 50));
        assert_eq!(splitter.optimal_tile_size(64, 64), (64, 64));
        assert_eq!(splitter.optimal_tile_size(65, 130), (33, 44));
    }

    #[test]
    fn single_tile_when_image_fits() {
        let splitter = TileSplitter::new(512, 16).unwrap();
        let img = gradient_image(80, 120);
        let tiles = splitter.split(img.view()).unwrap();
        assert_eq!(tiles.len(), 1);
        let tile = &tiles[0];
        assert_eq!(tile.region, Region::new(0, 0, 120, 80));
        assert!(tile.padding.is_zero());
        assert_eq!(tile.image.dim(), (80, 120, 3));
        assert_eq!(tile.image, img);
    }

    #[test]
    fn tiles_touching_image_edges_have_no_padding_there() {
        let splitter = TileSplitter::new(64, 16).unwrap();
        let img = gradient_image(100, 100);
        for tile in splitter.split(img.view()).unwrap() {
            if tile.region.x == 0 {
                assert_eq!(tile.padding.left, 0);
            }
            if tile.region.y == 0 {
                assert_eq!(tile.padding.top, 0);
            }
            if tile.region.right() == 100 {
                assert_eq!(tile.padding.right, 0);
            }
            if tile.region.bottom() == 100 {
                assert_eq!(tile.padding.bottom, 0);
            }
        }
    }

    #[test]
    fn hundred_square_with_tile_64_overlap_16() {
        // Even distribution gives 50x50 logical tiles stepped by 34 on each
        // axis, padded by up to 16px toward interior edges.
        let splitter = TileSplitter::new(64, 16).unwrap();
        let img = gradient_image(100, 100);
        let tiles = splitter.split(img.view()).unwrap();
        assert_eq!(tiles.len(), 9);

        let xs: Vec<i64> = tiles.iter().take(3).map(|t| t.region.x).collect();
        assert_eq!(xs, vec![0, 34, 68]);
        assert_eq!(tiles[0].region, Region::new(0, 0, 50, 50));
        assert_eq!(tiles[1].region, Region::new(34, 0, 50, 50));
        assert_eq!(tiles[2].region, Region::new(68, 0, 32, 50));

        // Middle tile gets full padding left/right, none top.
        assert_eq!(
            tiles[1].padding,
            Padding {
                top: 0,
                bottom: 16,
                left: 16,
                right: 16
            }
        );
        // Right-edge tile is padded only toward the interior.
        assert_eq!(
            tiles[2].padding,
            Padding {
                top: 0,
                bottom: 16,
                left: 16,
                right: 0
            }
        );
    }

    #[test]
    fn padded_buffer_matches_region_plus_padding() {
        let splitter = TileSplitter::new(64, 16).unwrap();
        let img = gradient_image(100, 150);
        for tile in splitter.split(img.view()).unwrap() {
            let expected_h = (tile.region.height + tile.padding.vertical()) as usize;
            let expected_w = (tile.region.width + tile.padding.horizontal()) as usize;
            assert_eq!(tile.image.dim(), (expected_h, expected_w, 3));

            // Padded buffer contents must match the source pixels.
            let read = tile.region.add_padding(&tile.padding);
            assert_eq!(tile.image, read.read_from(img.view()));
        }
    }

    #[test]
    fn regions_cover_every_pixel() {
        let splitter = TileSplitter::new(64, 16).unwrap();
        for (h, w) in [(100usize, 100usize), (65, 130), (200, 77), (64, 64), (1, 1)] {
            let img = gradient_image(h, w);
            let tiles = splitter.split(img.view()).unwrap();

            let mut cover = Array2::<u32>::zeros((h, w));
            for tile in &tiles {
                let r = &tile.region;
                for row in r.y..r.bottom() {
                    for col in r.x..r.right() {
                        cover[[row as usize, col as usize]] += 1;
                    }
                }
                assert_eq!((tile.x, tile.y), (r.x, r.y));
            }
            assert!(
                cover.iter().all(|&c| c >= 1),
                "gap in coverage for {}x{}",
                w,
                h
            );
            // Grid walk overlaps at most two tiles per axis.
            assert!(cover.iter().all(|&c| c <= 4));
        }
    }
}
