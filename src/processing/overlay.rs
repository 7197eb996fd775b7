//! # Share Overlay
//!
//! Simulates printing both shares on transparencies and stacking them. Each
//! share is composited source-over onto an opaque white background using
//! integer arithmetic, so BLANK pixels leave the background untouched and
//! FILLED pixels paint it black.
//!
//! [`reveal`] then reduces the stacked image back to source resolution.

use image::{GrayAlphaImage, GrayImage, Luma, LumaA};

use crate::error::{Result, VcError};
use crate::processing::geometry::{
    block_center, block_positions, expanded_size, source_positions, PadSize,
};

const WHITE: u8 = 0xFF;

/// Stack `cipher` on top of `key` over a white background.
pub fn overlay(key: &GrayAlphaImage, cipher: &GrayAlphaImage) -> Result<GrayImage> {
    if key.dimensions() != cipher.dimensions() {
        return Err(VcError::ShapeMismatch {
            expected: key.dimensions(),
            actual: cipher.dimensions(),
        });
    }

    let (width, height) = key.dimensions();
    Ok(GrayImage::from_fn(width, height, |x, y| {
        let under = composite_over(WHITE, *key.get_pixel(x, y));
        Luma([composite_over(under, *cipher.get_pixel(x, y))])
    }))
}

/// Recover the source image from a stacked overlay.
///
/// A block where every pixel is black was a set source pixel and comes back as
/// `0xFF`; any other block comes back as `0x00`.
///
/// # Errors
/// - `VcError::ShapeMismatch`: the overlay dimensions are not a multiple of `pad`
pub fn reveal(overlaid: &GrayImage, pad: PadSize) -> Result<GrayImage> {
    let (width, height) = overlaid.dimensions();
    let source_size = (width / pad.width(), height / pad.height());
    let expected = expanded_size(source_size, pad)?;
    if expected != overlaid.dimensions() {
        return Err(VcError::ShapeMismatch {
            expected,
            actual: overlaid.dimensions(),
        });
    }

    let mut revealed = GrayImage::new(source_size.0, source_size.1);
    for source_pos in source_positions(source_size) {
        let dark = block_positions(block_center(source_pos, pad), pad)
            .all(|(x, y)| overlaid.get_pixel(x, y)[0] == 0x00);
        let value = if dark { 0xFF } else { 0x00 };
        revealed.put_pixel(source_pos.0, source_pos.1, Luma([value]));
    }

    Ok(revealed)
}

fn composite_over(background: u8, pixel: LumaA<u8>) -> u8 {
    let LumaA([luma, alpha]) = pixel;
    let (luma, alpha, background) = (u32::from(luma), u32::from(alpha), u32::from(background));
    ((luma * alpha + background * (0xFF - alpha)) / 0xFF) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::cipher::derive_cipher;
    use crate::processing::key::{generate_key, BLANK, FILLED};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_composite_over() {
        assert_eq!(composite_over(WHITE, BLANK), WHITE);
        assert_eq!(composite_over(WHITE, FILLED), 0x00);
        assert_eq!(composite_over(0x00, BLANK), 0x00);
        assert_eq!(composite_over(0x00, LumaA([0xFF, 0xFF])), 0xFF);
    }

    #[test]
    fn test_overlay_shape_mismatch() {
        let a = GrayAlphaImage::new(2, 2);
        let b = GrayAlphaImage::new(2, 3);
        assert!(matches!(overlay(&a, &b), Err(VcError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_set_block_overlays_to_black() {
        let pad = PadSize::new(2, 2).unwrap();
        let source = GrayImage::from_pixel(1, 1, Luma([0xFF]));
        let key = generate_key((1, 1), pad, &mut StdRng::seed_from_u64(2)).unwrap();
        let cipher = derive_cipher(&key, &source, pad).unwrap();

        let stacked = overlay(&key, &cipher).unwrap();
        assert!(stacked.pixels().all(|p| p[0] == 0x00));
    }

    #[test]
    fn test_unset_block_overlays_half_filled() {
        let pad = PadSize::new(2, 2).unwrap();
        let source = GrayImage::from_pixel(1, 1, Luma([0x00]));
        let key = generate_key((1, 1), pad, &mut StdRng::seed_from_u64(2)).unwrap();
        let cipher = derive_cipher(&key, &source, pad).unwrap();

        let stacked = overlay(&key, &cipher).unwrap();
        assert_eq!(stacked.pixels().filter(|p| p[0] == 0x00).count(), 2);
        assert_eq!(stacked.pixels().filter(|p| p[0] == WHITE).count(), 2);
    }

    #[test]
    fn test_reveal_recovers_source() {
        for (w, h) in [(1, 1), (2, 2), (3, 3), (4, 1)] {
            let pad = PadSize::new(w, h).unwrap();
            let source = GrayImage::from_fn(5, 4, |x, y| Luma([if x * y % 3 == 0 { 0xFF } else { 0 }]));
            let key = generate_key(source.dimensions(), pad, &mut StdRng::seed_from_u64(4)).unwrap();
            let cipher = derive_cipher(&key, &source, pad).unwrap();

            let revealed = reveal(&overlay(&key, &cipher).unwrap(), pad).unwrap();
            assert_eq!(revealed, source, "pad {}", pad);
        }
    }

    #[test]
    fn test_reveal_rejects_partial_blocks() {
        let pad = PadSize::default();
        let overlaid = GrayImage::new(7, 6);
        assert!(matches!(reveal(&overlaid, pad), Err(VcError::ShapeMismatch { .. })));
    }
}
