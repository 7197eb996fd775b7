//! # Cipher Share Derivation
//!
//! The cipher share starts as a copy of the key share. Every block whose source
//! pixel is set is then inverted on both channels, so a FILLED sub-pixel becomes
//! BLANK and vice versa. Unset blocks stay identical to the key.
//!
//! Stacked on the key, a set block therefore becomes completely dark while an
//! unset block keeps the key's half-filled pattern.

use image::{ColorType, DynamicImage, GrayImage, LumaA};
use log::debug;

use crate::error::{Result, VcError};
use crate::processing::geometry::{
    block_center, block_positions, expanded_size, source_positions, PadSize,
};
use crate::processing::key::KeyImage;

/// Cipher share: same layout as [`KeyImage`].
pub type CipherImage = KeyImage;

/// Derive the cipher share from a key share and the binary source image.
///
/// The key is cloned; the caller's image is never modified.
///
/// # Errors
/// - `VcError::ShapeMismatch`: `key` is not `source` scaled by `pad`
pub fn derive_cipher(key: &KeyImage, source: &GrayImage, pad: PadSize) -> Result<CipherImage> {
    let expected = expanded_size(source.dimensions(), pad)?;
    if key.dimensions() != expected {
        return Err(VcError::ShapeMismatch {
            expected,
            actual: key.dimensions(),
        });
    }

    let mut cipher = key.clone();
    let mut inverted_blocks = 0usize;

    for source_pos in set_pixels(source) {
        let center = block_center(source_pos, pad);
        for (x, y) in block_positions(center, pad) {
            let pixel = cipher.get_pixel_mut(x, y);
            *pixel = invert(*pixel);
        }
        inverted_blocks += 1;
    }

    debug!(
        "Derived cipher share: {} of {} blocks inverted",
        inverted_blocks,
        source.width() as usize * source.height() as usize
    );

    Ok(cipher)
}

/// Same as [`derive_cipher`], for images whose colour type is only known at runtime.
///
/// # Errors
/// - `VcError::ModeMismatch`: `source` is not 8-bit luminance, or `key` is not
///   8-bit luminance + alpha
/// - `VcError::ShapeMismatch`: as for [`derive_cipher`]
pub fn derive_cipher_dynamic(
    key: &DynamicImage,
    source: &DynamicImage,
    pad: PadSize,
) -> Result<CipherImage> {
    let source = match source {
        DynamicImage::ImageLuma8(image) => image,
        other => return Err(mode_mismatch("source", ColorType::L8, other.color())),
    };
    let key = match key {
        DynamicImage::ImageLumaA8(image) => image,
        other => return Err(mode_mismatch("key", ColorType::La8, other.color())),
    };

    derive_cipher(key, source, pad)
}

/// A source pixel is set when it is anything but pure black.
pub fn is_pixel_set(value: u8) -> bool {
    value > 0x00
}

/// Invert both channels of a share pixel.
pub fn invert(pixel: LumaA<u8>) -> LumaA<u8> {
    let LumaA([luma, alpha]) = pixel;
    LumaA([0xFF - luma, 0xFF - alpha])
}

fn set_pixels(source: &GrayImage) -> impl Iterator<Item = (u32, u32)> + '_ {
    source_positions(source.dimensions()).filter(|&(x, y)| is_pixel_set(source.get_pixel(x, y)[0]))
}

fn mode_mismatch(role: &'static str, expected: ColorType, actual: ColorType) -> VcError {
    VcError::ModeMismatch {
        role,
        expected: color_name(expected),
        actual: format!("{:?}", actual),
    }
}

fn color_name(color: ColorType) -> &'static str {
    match color {
        ColorType::L8 => "L8 (luminance)",
        ColorType::La8 => "La8 (luminance + alpha)",
        _ => "unsupported",
    }
}
