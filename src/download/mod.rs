//! Download module.
//!
//! This module provides:
//! - Metadata resolution for tracks, albums and playlists
//! - Idempotent single-track persistence
//! - Sequential batch orchestration

pub mod orchestrator;
pub mod persist;
pub mod resolve;

pub use orchestrator::Orchestrator;
pub use persist::{persist, PersistOutcome};
pub use resolve::Resolver;
