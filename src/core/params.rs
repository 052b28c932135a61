use serde::{Deserialize, Serialize};

use crate::types::BlendCurve;

/// Tiling parameters suitable for config files and presets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct TilingParams {
    /// Soft cap on tile edge length in pixels.
    pub tile_size: u32,
    /// Requested overlap between adjacent tiles, in pre-scale pixels.
    pub overlap: u32,
    /// Integer upscale factor the per-tile transform applies.
    pub scale: u32,
    /// Weight curve used in overlap bands.
    pub blend: BlendCurve,
}

impl Default for TilingParams {
    fn default() -> Self {
        Self {
            tile_size: 512,
            overlap: 16,
            scale: 1,
            blend: BlendCurve::HalfSin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip() {
        let params = TilingParams {
            tile_size: 256,
            overlap: 24,
            scale: 4,
            blend: BlendCurve::Linear,
        };
        let json = serde_json::to_string(&params).unwrap();
        let back: TilingParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back.tile_size, 256);
        assert_eq!(back.overlap, 24);
        assert_eq!(back.scale, 4);
        assert_eq!(back.blend, BlendCurve::Linear);
    }

    #[test]
    fn partial_preset_falls_back_to_defaults() {
        let back: TilingParams = serde_json::from_str(r#"{"scale": 2}"#).unwrap();
        assert_eq!(back.scale, 2);
        assert_eq!(back.tile_size, 512);
        assert_eq!(back.overlap, 16);
        assert_eq!(back.blend, BlendCurve::HalfSin);
    }
}
