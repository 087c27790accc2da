//! yank - download tracks, albums and playlists from shareable links.
//!
//! A link is classified as a track, album or playlist, resolved into an
//! ordered track list through a metadata service, and each selected track is
//! fetched from a delivery endpoint and saved as `"{title} - {artists}.mp3"`.
//!
//! # Features
//!
//! - Album and paginated playlist resolution
//! - Bounded retry with a fixed delay for transient network failures
//! - Filesystem-safe file and folder names
//! - Idempotent downloads: existing files are skipped without a request
//! - Progress events decoupled from the console
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use yank::{Config, NoopReporter, Pipeline, YankApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let api = YankApi::new(&config.api)?;
//!     let pipeline = Pipeline::new(&api, &api, &config.retry);
//!
//!     let mut reporter = NoopReporter;
//!     pipeline
//!         .run(
//!             "https://open.spotify.com/album/4LH4d3cOWNNsVw41Gqt2kv",
//!             "1 3",
//!             Path::new("."),
//!             &mut reporter,
//!         )
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;
pub mod pipeline;
pub mod retry;

// Re-exports for convenience
pub use api::{MetadataSource, PayloadSource, YankApi};
pub use config::{Config, RetryConfig};
pub use download::{persist, Orchestrator, PersistOutcome, Resolver};
pub use error::{Error, Result};
pub use fs::sanitize;
pub use media::{filter_selection, CollectionResult, LinkKind, ParsedLink, TrackDescriptor};
pub use output::{ItemOutcome, NoopReporter, ProgressReporter};
pub use pipeline::{Pipeline, ResolvedLink};
pub use retry::{with_retry, IsRetryable};
