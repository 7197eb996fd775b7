//! # simple-vc
//!
//! Two-share visual cryptography. A black-and-white image is split into a
//! *key* and a *cipher*: each on its own is uniform noise, and stacking them
//! reproduces the image.
//!
//! ## Modules
//!
//! - [`processing`]: in-memory key generation, cipher derivation and overlay
//! - [`generator`]: file-level share generation and run reports
//! - [`common`]: TOML configuration
//! - [`error`]: the crate error type
//!
//! ## Example
//!
//! ```
//! use image::{GrayImage, Luma};
//! use rand::{rngs::StdRng, SeedableRng};
//! use simple_vc::processing::{derive_cipher, generate_key, overlay, reveal, PadSize};
//!
//! let source = GrayImage::from_fn(8, 8, |x, y| Luma([if x == y { 0xFF } else { 0x00 }]));
//! let pad = PadSize::default();
//!
//! let key = generate_key(source.dimensions(), pad, &mut StdRng::seed_from_u64(1)).unwrap();
//! let cipher = derive_cipher(&key, &source, pad).unwrap();
//!
//! let stacked = overlay(&key, &cipher).unwrap();
//! assert_eq!(reveal(&stacked, pad).unwrap(), source);
//! ```

pub mod common;
pub mod error;
pub mod generator;
pub mod processing;

pub use error::{Result, VcError};
pub use generator::{create_key_and_cipher, ShareGenerator, ShareReport};
pub use processing::PadSize;
