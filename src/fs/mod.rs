//! Filesystem module.
//!
//! Provides:
//! - Filename sanitization and track naming
//! - Output directory layout

pub mod naming;
pub mod paths;

pub use naming::{sanitize, track_filename, track_stem};
pub use paths::{ensure_dir, get_output_dir};
