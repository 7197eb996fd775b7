//! # Error Types
//!
//! Every fallible operation in the crate returns [`Result`], whose error side is
//! [`VcError`]. Geometry and mode violations are detected before any pixel is
//! touched; codec failures are wrapped together with the offending path.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VcError {
    #[error("shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("mode mismatch: {role} image must be {expected}, got {actual}")]
    ModeMismatch {
        role: &'static str,
        expected: &'static str,
        actual: String,
    },

    #[error("invalid pad size {width}x{height}: both dimensions must be at least 1")]
    InvalidPadSize { width: u32, height: u32 },

    #[error("share dimensions overflow: {width}x{height} scaled by {pad_width}x{pad_height}")]
    DimensionOverflow {
        width: u32,
        height: u32,
        pad_width: u32,
        pad_height: u32,
    },

    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VcError>;
