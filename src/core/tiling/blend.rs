//! Blend weight curves and the 2D mask builder used to feather tile seams.
//!
//! A weight curve maps `(distance from the seam, overlap band width)` to a
//! contribution weight in `[0, 1]`. Masks start at full contribution and ramp
//! each overlap band down toward the seam; where two bands cross (corners)
//! the weights multiply.
use ndarray::Array2;

use crate::types::BlendCurve;

/// Linear gradient: weight rises from 0.0 at the seam to 1.0 at the inner
/// edge of the overlap band. `overlap == 0` means no band, full weight.
pub fn linear_blend(distance: u32, overlap: u32) -> f32 {
    if overlap == 0 {
        return 1.0;
    }
    distance as f32 / (overlap - 1) as f32
}

/// S-curve kernel: `(sin(x * pi - pi/2) + 1) / 2` for `x` in `[0, 1]`.
pub fn sin_blend(x: f32) -> f32 {
    ((x * std::f32::consts::PI - std::f32::consts::FRAC_PI_2).sin() + 1.0) / 2.0
}

/// Half-sine gradient: the normalized distance is compressed to flatten the
/// curve at both ends, which reduces visible blend bands compared to
/// [`linear_blend`]. `overlap == 0` means no band, full weight.
pub fn half_sin_blend(distance: u32, overlap: u32) -> f32 {
    if overlap == 0 {
        return 1.0;
    }
    let normalized = distance as f32 / (overlap - 1) as f32;
    let compressed = (normalized * 2.0 - 0.5).clamp(0.0, 1.0);
    sin_blend(compressed)
}

impl BlendCurve {
    /// Contribution weight at `distance` pixels from the seam of an
    /// `overlap`-pixel band.
    pub fn weight(self, distance: u32, overlap: u32) -> f32 {
        match self {
            BlendCurve::Linear => linear_blend(distance, overlap),
            BlendCurve::HalfSin => half_sin_blend(distance, overlap),
        }
    }
}

/// Which sides of a tile lie on a true image boundary. Boundary sides have
/// no neighboring tile to blend against and keep full weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeFlags {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl EdgeFlags {
    pub const NONE: EdgeFlags = EdgeFlags {
        top: false,
        bottom: false,
        left: false,
        right: false,
    };

    pub const ALL: EdgeFlags = EdgeFlags {
        top: true,
        bottom: true,
        left: true,
        right: true,
    };
}

/// Builds a `(height, width)` weight mask for one tile.
///
/// Every side that is not a true image boundary gets an `overlap`-pixel-deep
/// band ramped by `curve`, multiplied into the existing weights so crossing
/// bands compose. Bottom/right bands index from the far edge inward, so the
/// weight always rises toward the tile interior. With `overlap <= 1` no
/// blending is possible and the mask is all ones.
pub fn create_blend_mask(
    width: usize,
    height: usize,
    overlap: u32,
    curve: BlendCurve,
    edges: EdgeFlags,
) -> Array2<f32> {
    let mut mask = Array2::<f32>::ones((height, width));

    if overlap <= 1 {
        return mask;
    }

    // Bands never reach past the opposite side of the mask.
    let depth_x = (overlap as usize).min(width);
    let depth_y = (overlap as usize).min(height);

    if !edges.top {
        for i in 0..depth_y {
            let w = curve.weight(i as u32, overlap);
            mask.row_mut(i).mapv_inplace(|v| v * w);
        }
    }

    if !edges.bottom {
        for i in 0..depth_y {
            let w = curve.weight(i as u32, overlap);
            mask.row_mut(height - 1 - i).mapv_inplace(|v| v * w);
        }
    }

    if !edges.left {
        for i in 0..depth_x {
            let w = curve.weight(i as u32, overlap);
            mask.column_mut(i).mapv_inplace(|v| v * w);
        }
    }

    if !edges.right {
        for i in 0..depth_x {
            let w = curve.weight(i as u32, overlap);
            mask.column_mut(width - 1 - i).mapv_inplace(|v| v * w);
        }
    }

    mask
}
