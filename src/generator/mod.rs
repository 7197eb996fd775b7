//! # Share Generation Service
//!
//! File-level entry points built on top of [`processing`](crate::processing):
//!
//! ## Shares ([`shares`])
//! Loads the source image, produces the key and cipher shares and writes them.
//!
//! ## Report ([`report`])
//! Per-run statistics, exportable as JSON.

pub mod shares;
pub mod report;

// Re-export for convenience
pub use shares::{create_key_and_cipher, generate_shares, load_share, load_source, save_share, ShareGenerator};
pub use report::ShareReport;
