//! # Configuration
//!
//! TOML configuration for share generation. Every section is optional; missing
//! values fall back to a 3x3 pad, PNG output and an entropy-seeded RNG.
//!
//! ```toml
//! [pad]
//! width = 3
//! height = 3
//!
//! [output]
//! format = "png"
//!
//! [random]
//! seed = 42
//! ```

use image::ImageFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, VcError};
use crate::processing::PadSize;

/// Load a TOML configuration file and deserialize it into the specified type.
///
/// # Arguments
/// - `path`: Path to the TOML configuration file
///
/// # Returns
/// - `Ok(T)`: Successfully loaded and parsed configuration
/// - `Err`: File I/O or parsing error
///
/// # Example
/// ```ignore
/// let config: VcConfig = load_config("config/default.toml")?;
/// ```
pub fn load_config<T, P>(path: P) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Top-level configuration for the share generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VcConfig {
    pub pad: PadConfig,
    pub output: OutputConfig,
    pub random: RandomConfig,
}

/// Per-pixel expansion factor, as written in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for PadConfig {
    fn default() -> Self {
        let pad = PadSize::default();
        Self {
            width: pad.width(),
            height: pad.height(),
        }
    }
}

impl PadConfig {
    /// Validated pad size.
    pub fn pad_size(&self) -> Result<PadSize> {
        PadSize::new(self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Container format name or extension (e.g. "png", "bmp", "tiff")
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "png".to_string(),
        }
    }
}

impl OutputConfig {
    pub fn image_format(&self) -> Result<ImageFormat> {
        parse_format(&self.format)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Fixed RNG seed; `None` draws from OS entropy
    pub seed: Option<u64>,
}

/// Resolve a format name such as `png` or `TIFF` to an [`ImageFormat`].
///
/// Whether the encoder accepts a luminance + alpha image is only known when
/// writing; a format that cannot surfaces as `VcError::Encode` at save time.
pub fn parse_format(name: &str) -> Result<ImageFormat> {
    ImageFormat::from_extension(name.trim().to_ascii_lowercase())
        .ok_or_else(|| VcError::UnsupportedFormat(name.to_string()))
}
