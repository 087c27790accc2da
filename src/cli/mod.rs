//! Command-line surface: arguments and interactive prompts.

pub mod args;
pub mod prompt;

pub use args::Args;
pub use prompt::{ask_selection, ask_url};
