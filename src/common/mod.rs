//! # Common Components
//!
//! Shared utilities used by the library and the `vcrypt` binary.
//!
//! ## Modules
//!
//! - [`config`]: Configuration parsing utilities

pub mod config;

pub use config::{load_config, VcConfig};
