//! # Share Generator
//!
//! Ties the in-memory share processing to the filesystem: load the source,
//! binarise it to luminance, generate the key, derive the cipher and write both
//! shares.
//!
//! Both shares are fully derived before anything is written, so a geometry
//! failure leaves no output behind. A failure writing the cipher can still
//! leave the key file on disk.

use image::{GrayImage, ImageFormat};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

use crate::common::config::VcConfig;
use crate::error::{Result, VcError};
use crate::generator::report::ShareReport;
use crate::processing::cipher::is_pixel_set;
use crate::processing::{derive_cipher, generate_key, CipherImage, KeyImage, PadSize};

/// Configured share generator used by the `vcrypt` binary.
///
/// Holds the validated pad size, output format and optional RNG seed. With a
/// seed every call produces the same shares for the same input.
#[derive(Debug, Clone)]
pub struct ShareGenerator {
    pad: PadSize,
    format: ImageFormat,
    seed: Option<u64>,
}

impl ShareGenerator {
    /// Build a generator from a loaded configuration.
    ///
    /// # Errors
    /// - `VcError::InvalidPadSize`: a zero pad dimension
    /// - `VcError::UnsupportedFormat`: unknown output format name
    pub fn new(config: &VcConfig) -> Result<Self> {
        Ok(Self {
            pad: config.pad.pad_size()?,
            format: config.output.image_format()?,
            seed: config.random.seed,
        })
    }

    pub fn pad(&self) -> PadSize {
        self.pad
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Generate both shares for an already loaded source image.
    pub fn generate(&self, source: &GrayImage) -> Result<(KeyImage, CipherImage)> {
        generate_shares(source, self.pad, &mut self.rng())
    }

    /// Split `input` into a key and a cipher written to `key_path` and `cipher_path`.
    pub fn split(&self, input: &Path, key_path: &Path, cipher_path: &Path) -> Result<ShareReport> {
        split_with_rng(input, self.format, key_path, cipher_path, self.pad, &mut self.rng())
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Create a key/cipher pair which, stacked, reproduce the input image.
///
/// The input should be black and white; it is converted to 8-bit luminance and
/// every non-black pixel counts as set. Both outputs are `pad` times the input
/// dimensions and are encoded as `format`. Pass [`PadSize::default()`] for the
/// usual 3x3 expansion.
///
/// # Arguments
/// - `input`: Path of the source image (any format the `image` crate decodes)
/// - `format`: Container format for both outputs
/// - `key_path`: Where to write the key share
/// - `cipher_path`: Where to write the cipher share
/// - `pad`: Per-pixel expansion factor
///
/// # Returns
/// - `Ok(ShareReport)`: Summary of the generated shares
/// - `Err(VcError::Decode)`: The input could not be opened or decoded
/// - `Err(VcError::Encode)`: One of the outputs could not be written
///
/// # Example
/// ```ignore
/// let report = create_key_and_cipher(
///     Path::new("input.png"),
///     ImageFormat::Png,
///     Path::new("key.png"),
///     Path::new("cipher.png"),
///     PadSize::default(),
/// )?;
/// ```
pub fn create_key_and_cipher(
    input: &Path,
    format: ImageFormat,
    key_path: &Path,
    cipher_path: &Path,
    pad: PadSize,
) -> Result<ShareReport> {
    split_with_rng(input, format, key_path, cipher_path, pad, &mut StdRng::from_entropy())
}

/// Generate the key from `rng`, then derive the cipher from it.
pub fn generate_shares<R: Rng + ?Sized>(
    source: &GrayImage,
    pad: PadSize,
    rng: &mut R,
) -> Result<(KeyImage, CipherImage)> {
    let key = generate_key(source.dimensions(), pad, rng)?;
    let cipher = derive_cipher(&key, source, pad)?;
    Ok((key, cipher))
}

/// Open `path` and convert it to 8-bit luminance.
pub fn load_source(path: &Path) -> Result<GrayImage> {
    let image = image::open(path).map_err(|source| VcError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(image.to_luma8())
}

/// Open a previously written share as luminance + alpha.
pub fn load_share(path: &Path) -> Result<KeyImage> {
    let image = image::open(path).map_err(|source| VcError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(image.to_luma_alpha8())
}

/// Write a share to `path` as `format`.
pub fn save_share(share: &KeyImage, path: &Path, format: ImageFormat) -> Result<()> {
    share
        .save_with_format(path, format)
        .map_err(|source| VcError::Encode {
            path: path.to_path_buf(),
            source,
        })
}

fn split_with_rng<R: Rng + ?Sized>(
    input: &Path,
    format: ImageFormat,
    key_path: &Path,
    cipher_path: &Path,
    pad: PadSize,
    rng: &mut R,
) -> Result<ShareReport> {
    let source = load_source(input)?;
    info!(
        "📷 Splitting {} ({}x{}) with pad {}",
        input.display(),
        source.width(),
        source.height(),
        pad
    );

    let (key, cipher) = generate_shares(&source, pad, rng)?;
    let set_blocks = source.pixels().filter(|p| is_pixel_set(p[0])).count();
    let report = ShareReport::new(source.dimensions(), pad, &key, set_blocks);

    save_share(&key, key_path, format)?;
    debug!("Key share written to {}", key_path.display());
    save_share(&cipher, cipher_path, format)?;
    debug!("Cipher share written to {}", cipher_path.display());

    info!(
        "✅ Wrote {}x{} shares to {} and {}",
        report.share_width,
        report.share_height,
        key_path.display(),
        cipher_path.display()
    );

    Ok(report)
}
