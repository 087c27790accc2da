//! Configuration module for the yank downloader.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Retry policy settings
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{ApiConfig, Config, OptionsConfig, RetryConfig, CONFIG_FILE_NAME};
pub use validation::validate_config;
