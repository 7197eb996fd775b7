//! # Share Processing
//!
//! The visual-cryptography core, operating on in-memory images only.
//!
//! ## Modules
//!
//! - [`geometry`]: pad size and the source-pixel to block mapping
//! - [`key`]: random half-filled key share generation
//! - [`cipher`]: cipher share derivation by block inversion
//! - [`overlay`]: stacking both shares and recovering the source

pub mod cipher;
pub mod geometry;
pub mod key;
pub mod overlay;

// Re-export main functions for convenience
pub use cipher::{derive_cipher, derive_cipher_dynamic, CipherImage};
pub use geometry::PadSize;
pub use key::{generate_key, KeyImage, BLANK, FILLED};
pub use overlay::{overlay, reveal};
