//! End-to-end tests for the split/process/blend pipeline through the public
//! library API.

use ndarray::{Array3, ArrayView3};

use tilefuse::{
    BlendCurve, IdentityTransform, TileBlender, TileSplitter, TileTransform, TilingParams,
    upscale_image, upscale_image_to_path,
};

fn gradient_image(height: usize, width: usize) -> Array3<u8> {
    Array3::from_shape_fn((height, width, 3), |(r, c, ch)| {
        ((r * 3 + c * 5 + ch * 41) % 256) as u8
    })
}

fn max_abs_diff(a: &Array3<u8>, b: &Array3<u8>) -> u8 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| x.abs_diff(y))
        .max()
        .unwrap_or(0)
}

/// Nearest-neighbor doubling standing in for model inference.
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

#[test]
fn doubling_a_large_image_matches_doubling_without_tiling() {
    let img = gradient_image(200, 160);
    let params = TilingParams {
        tile_size: 64,
        overlap: 16,
        scale: 2,
        ..TilingParams::default()
    };

    let result = upscale_image(img.view(), &params, &Doubler).unwrap();
    assert_eq!((result.width, result.height, result.scale), (320, 400, 2));

    let expected = Doubler.apply(img.view()).unwrap();
    assert!(max_abs_diff(&result.pixels, &expected) <= 1);
}

#[test]
fn identity_round_trip_across_sizes_and_curves() {
    for (h, w) in [(100usize, 100usize), (65, 200), (1, 77), (48, 33)] {
        for blend in [BlendCurve::Linear, BlendCurve::HalfSin] {
            let img = gradient_image(h, w);
            let params = TilingParams {
                tile_size: 48,
                overlap: 12,
                scale: 1,
                blend,
            };
            let result = upscale_image(img.view(), &params, &IdentityTransform).unwrap();
            assert!(
                max_abs_diff(&result.pixels, &img) <= 1,
                "{}x{} with {} blend drifted",
                w,
                h,
                blend
            );
        }
    }
}

#[test]
fn every_output_pixel_receives_tile_coverage() {
    // A constant image exposes any under-weighted pixel immediately: the
    // merged value can only come out as 200 if the accumulated weight at
    // that pixel is meaningful.
    let img = Array3::from_elem((150, 90, 3), 200u8);
    let splitter = TileSplitter::new(64, 16).unwrap();
    let blender = TileBlender::new(16, 1, BlendCurve::HalfSin).unwrap();

    let tiles = splitter.split(img.view()).unwrap();
    let merged = blender.merge(&tiles, 90, 150).unwrap();
    assert!(merged.iter().all(|&v| v == 200));
}

#[test]
fn split_then_merge_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("input.png");
    let output_path = dir.path().join("output.png");

    let img = gradient_image(120, 180);
    let encoded = tilefuse::array_to_image(&img).unwrap();
    encoded.save(&input_path).unwrap();

    let params = TilingParams {
        tile_size: 64,
        overlap: 16,
        scale: 1,
        ..TilingParams::default()
    };
    upscale_image_to_path(&input_path, &output_path, &params, &IdentityTransform).unwrap();

    let back = image::open(&output_path).unwrap().to_rgb8();
    let back_arr = tilefuse::image_to_array(&back).unwrap();
    assert_eq!(back_arr.dim(), img.dim());
    assert!(max_abs_diff(&back_arr, &img) <= 1);
}

#[test]
fn tile_size_larger_than_image_yields_single_tile_pipeline() {
    let img = gradient_image(40, 60);
    let params = TilingParams {
        tile_size: 512,
        overlap: 16,
        scale: 2,
        ..TilingParams::default()
    };
    let result = upscale_image(img.view(), &params, &Doubler).unwrap();
    let expected = Doubler.apply(img.view()).unwrap();
    // One tile, no padding, no blending: output must be exact.
    assert_eq!(result.pixels, expected);
}
