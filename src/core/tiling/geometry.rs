//! Geometric value types for the tiling pipeline: `Region`, `Padding`,
//! `TileOverlap`, and `Tile`.
//!
//! Offsets are signed because padded regions may legally start left of or
//! above the origin; extents are unsigned so `width >= 0, height >= 0` holds
//! by construction.
use ndarray::{Array3, ArrayView3, s};

/// Axis-aligned rectangle in pixel coordinates of some reference frame
/// (the original image unless stated otherwise).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Region {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i64 {
        self.x + self.width as i64
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i64 {
        self.y + self.height as i64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether `child` lies fully inside this region.
    pub fn contains(&self, child: &Region) -> bool {
        child.x >= self.x
            && child.y >= self.y
            && child.right() <= self.right()
            && child.bottom() <= self.bottom()
    }

    /// Largest rectangle contained in both regions. Clamps to an empty
    /// region (`width = height = 0`) when the two are disjoint. Used to keep
    /// tiles inside image bounds.
    pub fn intersect(&self, other: &Region) -> Region {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        Region::new(
            x1,
            y1,
            (x2 - x1).max(0) as u32,
            (y2 - y1).max(0) as u32,
        )
    }

    /// Expands each side by the corresponding padding amount. May yield
    /// negative offsets; callers must keep the result within a larger canvas
    /// before reading pixels.
    pub fn add_padding(&self, padding: &Padding) -> Region {
        Region::new(
            self.x - padding.left as i64,
            self.y - padding.top as i64,
            self.width + padding.left + padding.right,
            self.height + padding.top + padding.bottom,
        )
    }

    /// Distance from each side of `child` to the corresponding side of
    /// `self`, i.e. how much room is left before this region's edge.
    /// `child` must lie fully inside `self`.
    pub fn child_padding(&self, child: &Region) -> Padding {
        debug_assert!(self.contains(child));
        Padding {
            top: (child.y - self.y) as u32,
            bottom: (self.bottom() - child.bottom()) as u32,
            left: (child.x - self.x) as u32,
            right: (self.right() - child.right()) as u32,
        }
    }

    /// Crops this rectangle out of an image buffer in `(height, width,
    /// channel)` layout. The caller guarantees the region lies within the
    /// buffer's bounds.
    pub fn read_from(&self, img: ArrayView3<'_, u8>) -> Array3<u8> {
        let x = self.x as usize;
        let y = self.y as usize;
        img.slice(s![
            y..y + self.height as usize,
            x..x + self.width as usize,
            ..
        ])
        .to_owned()
    }
}

/// Padding amounts for each side of a region, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Padding {
    pub const ZERO: Padding = Padding {
        top: 0,
        bottom: 0,
        left: 0,
        right: 0,
    };

    /// Clamps all four sides to at most `max_padding`.
    pub fn min(&self, max_padding: u32) -> Padding {
        Padding {
            top: self.top.min(max_padding),
            bottom: self.bottom.min(max_padding),
            left: self.left.min(max_padding),
            right: self.right.min(max_padding),
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Padding::ZERO
    }

    /// Sum of left and right padding.
    pub fn horizontal(&self) -> u32 {
        self.left + self.right
    }

    /// Sum of top and bottom padding.
    pub fn vertical(&self) -> u32 {
        self.top + self.bottom
    }
}

/// Overlap on a single axis: `start` is the leading edge (left for X, top
/// for Y), `end` the trailing edge. Documents overlap semantics; the split
/// and merge algorithms work from per-tile `Padding` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileOverlap {
    pub start: u32,
    pub end: u32,
}

impl TileOverlap {
    pub fn total(&self) -> u32 {
        self.start + self.end
    }
}

/// A rectangular sub-image tracked through split -> process -> merge.
///
/// `region` is the tile's unpadded logical coverage in original-image
/// coordinates (what this tile is authoritative for); `image` is the padded
/// pixel data actually carried (`region` expanded by `padding`, clipped to
/// the image). `x`/`y` duplicate `region.x`/`region.y` for convenience.
///
/// The external transform replaces `image` with a buffer at `scale`x
/// resolution; `region`, `x`, `y`, and `padding` keep their original-image
/// meaning and are reinterpreted at output resolution by the blender.
#[derive(Debug, Clone)]
pub struct Tile {
    pub image: Array3<u8>,
    pub region: Region,
    pub x: i64,
    pub y: i64,
    pub padding: Padding,
}
