//! # Block Geometry
//!
//! Pure coordinate helpers shared by key generation and cipher derivation.
//!
//! ## Mapping
//!
//! A source pixel at `(x, y)` owns exactly one `Pw x Ph` block in each share.
//! The block is addressed through its centre point:
//!
//! ```text
//! center = (x * Pw + floor(Pw / 2), y * Ph + floor(Ph / 2))
//! ```
//!
//! and its pixels are the zero-centred offsets `-floor(P / 2) ..= ceil(P / 2) - 1`
//! (per axis) translated by that centre. For `x` this spans exactly
//! `x * Pw .. x * Pw + Pw`, so neighbouring blocks never overlap.
//!
//! Both share generators go through [`block_positions`], which is what keeps the
//! block placed in the key and the block inverted in the cipher identical.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VcError};

/// Per-pixel expansion factor. Both dimensions are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u32, u32)", into = "(u32, u32)")]
pub struct PadSize {
    width: u32,
    height: u32,
}

impl PadSize {
    /// Create a pad size, rejecting a zero dimension.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(VcError::InvalidPadSize { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels in one block.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of FILLED pixels every key block receives.
    pub fn filled_per_block(&self) -> usize {
        self.area() / 2
    }
}

impl Default for PadSize {
    fn default() -> Self {
        Self {
            width: 3,
            height: 3,
        }
    }
}

impl TryFrom<(u32, u32)> for PadSize {
    type Error = VcError;

    fn try_from((width, height): (u32, u32)) -> Result<Self> {
        Self::new(width, height)
    }
}

impl From<PadSize> for (u32, u32) {
    fn from(pad: PadSize) -> Self {
        (pad.width, pad.height)
    }
}

impl std::fmt::Display for PadSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl std::str::FromStr for PadSize {
    type Err = VcError;

    /// Parse `WxH` (e.g. `3x3`) or a single number for a square pad.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || VcError::InvalidPadSize {
            width: 0,
            height: 0,
        };
        let parse = |part: &str| part.trim().parse::<u32>().map_err(|_| invalid());

        match s.split_once(|c| c == 'x' || c == 'X') {
            Some((w, h)) => Self::new(parse(w)?, parse(h)?),
            None => {
                let side = parse(s)?;
                Self::new(side, side)
            }
        }
    }
}

/// Share dimensions for a source of `source_size` expanded by `pad`.
pub fn expanded_size(source_size: (u32, u32), pad: PadSize) -> Result<(u32, u32)> {
    let (width, height) = source_size;
    let overflow = || VcError::DimensionOverflow {
        width,
        height,
        pad_width: pad.width,
        pad_height: pad.height,
    };

    let expanded_width = width.checked_mul(pad.width).ok_or_else(overflow)?;
    let expanded_height = height.checked_mul(pad.height).ok_or_else(overflow)?;
    Ok((expanded_width, expanded_height))
}

/// Every position of a `size` grid, x outer and y inner.
pub fn source_positions(size: (u32, u32)) -> impl Iterator<Item = (u32, u32)> + Clone {
    let (max_x, max_y) = size;
    (0..max_x).flat_map(move |x| (0..max_y).map(move |y| (x, y)))
}

/// Centre of the block owned by `source_pos`, in share pixel space.
pub fn block_center(source_pos: (u32, u32), pad: PadSize) -> (u32, u32) {
    let (x, y) = source_pos;
    (
        x * pad.width + pad.width / 2,
        y * pad.height + pad.height / 2,
    )
}

/// All offsets of a `pad`-sized block centred on the origin.
///
/// Odd sizes are symmetric (`3 -> -1, 0, 1`); even sizes lean towards the
/// negative side (`4 -> -2, -1, 0, 1`). The iterator is `Clone`, so it can be
/// replayed without recomputing anything.
pub fn zero_centered_offsets(pad: PadSize) -> impl Iterator<Item = (i64, i64)> + Clone {
    let x_range = centered_range(pad.width);
    let y_range = centered_range(pad.height);
    x_range.flat_map(move |x| y_range.clone().map(move |y| (x, y)))
}

/// Absolute positions of the block centred on `center`.
pub fn block_positions(center: (u32, u32), pad: PadSize) -> impl Iterator<Item = (u32, u32)> + Clone {
    let (cx, cy) = (i64::from(center.0), i64::from(center.1));

    // A centre from `block_center` is at least floor(P / 2) on each axis, which
    // is the largest negative offset, so the conversion never fails there.
    zero_centered_offsets(pad).filter_map(move |(dx, dy)| {
        let x = u32::try_from(cx + dx).ok()?;
        let y = u32::try_from(cy + dy).ok()?;
        Some((x, y))
    })
}

fn centered_range(size: u32) -> std::ops::Range<i64> {
    let size = i64::from(size);
    let low = size / 2;
    let high = (size + 1) / 2;
    -low..high
}
