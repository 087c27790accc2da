//! Remote service module.
//!
//! This module provides:
//! - Collaborator traits for metadata and audio delivery
//! - HTTP client implementing both
//! - API response types

pub mod client;
pub mod source;
pub mod types;

pub use client::YankApi;
pub use source::{MetadataSource, PayloadSource};
pub use types::*;
