//! Shared types and enums used across TILEFUSE.
//! Includes the `BlendCurve` selection shared by the blender, the CLI, and
//! serialized parameter presets.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Weight curve used to ramp a tile's contribution across an overlap band.
///
/// `Linear` rises linearly from the seam toward full confidence. `HalfSin`
/// produces a flatter-at-the-ends S-curve that reduces visible blend bands.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendCurve {
    Linear,
    HalfSin,
}

impl Default for BlendCurve {
    fn default() -> Self {
        BlendCurve::HalfSin
    }
}

impl std::fmt::Display for BlendCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BlendCurve::Linear => "linear",
            BlendCurve::HalfSin => "half-sin",
        };
        write!(f, "{}", s)
    }
}
