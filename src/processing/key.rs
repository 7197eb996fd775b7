//! # Key Share Generation
//!
//! Builds the key share: every source pixel becomes a block in which exactly
//! half of the pixels (rounded down) are FILLED, chosen uniformly at random
//! without replacement. Because every block has the same fill ratio regardless
//! of the source, the key on its own carries no information about the image.
//!
//! The random source is always passed in by the caller. Seed it (for example
//! with [`rand::rngs::StdRng::seed_from_u64`](rand::SeedableRng::seed_from_u64))
//! to get reproducible shares.

use image::{GrayAlphaImage, LumaA};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Result;
use crate::processing::geometry::{
    block_center, block_positions, expanded_size, source_positions, PadSize,
};

/// White and fully transparent, so a blank pixel disappears when shares are stacked.
pub const BLANK: LumaA<u8> = LumaA([0xFF, 0x00]);

/// Black and fully opaque.
pub const FILLED: LumaA<u8> = LumaA([0x00, 0xFF]);

/// Key share: luminance + alpha, `source * pad` pixels.
pub type KeyImage = GrayAlphaImage;

/// Generate the key share for a source of `source_size` pixels.
///
/// # Arguments
/// - `source_size`: `(width, height)` of the source image
/// - `pad`: per-pixel expansion factor
/// - `rng`: random source used to pick the FILLED pixels of each block
///
/// # Returns
/// - `Ok(KeyImage)`: an image of `(width * Pw, height * Ph)` pixels
/// - `Err(VcError::DimensionOverflow)`: the share would not fit in `u32` dimensions
///
/// # Example
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use simple_vc::processing::{generate_key, PadSize};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let key = generate_key((4, 4), PadSize::default(), &mut rng).unwrap();
/// assert_eq!(key.dimensions(), (12, 12));
/// ```
pub fn generate_key<R: Rng + ?Sized>(
    source_size: (u32, u32),
    pad: PadSize,
    rng: &mut R,
) -> Result<KeyImage> {
    let (width, height) = expanded_size(source_size, pad)?;
    let mut key = KeyImage::from_pixel(width, height, BLANK);

    let filled = pad.filled_per_block();
    debug!(
        "Generating {}x{} key share ({} of {} pixels filled per block)",
        width,
        height,
        filled,
        pad.area()
    );

    for source_pos in source_positions(source_size) {
        let center = block_center(source_pos, pad);
        let positions: Vec<_> = block_positions(center, pad).collect();

        for &(x, y) in random_half_of(&positions, rng) {
            key.put_pixel(x, y, FILLED);
        }
    }

    Ok(key)
}

/// Uniformly sample `floor(len / 2)` distinct entries of `values`.
fn random_half_of<'a, T, R: Rng + ?Sized>(
    values: &'a [T],
    rng: &mut R,
) -> impl Iterator<Item = &'a T> {
    values.choose_multiple(rng, values.len() / 2)
}
