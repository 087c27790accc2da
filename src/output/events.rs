//! Progress events emitted by the pipeline.

use std::path::PathBuf;

use crate::media::{CollectionResult, LinkKind, TrackDescriptor};

/// Result of downloading one selected track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// The payload was fetched and written to this path.
    Written(PathBuf),
    /// A file with the target name already existed.
    Skipped(PathBuf),
    /// Retries ran out or the file could not be written.
    Failed(String),
}

impl ItemOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, ItemOutcome::Failed(_))
    }
}

/// Receiver of pipeline progress.
///
/// All methods default to no-ops so implementors only override what they
/// display.
pub trait ProgressReporter {
    /// Metadata for a link has been resolved.
    fn on_resolved(&mut self, _kind: LinkKind, _collection: &CollectionResult) {}

    /// A download is about to start. `position` is 1-based within the batch.
    fn on_item_start(&mut self, _position: usize, _total: usize, _track: &TrackDescriptor) {}

    /// A download finished.
    fn on_item_outcome(&mut self, _track: &TrackDescriptor, _outcome: &ItemOutcome) {}
}

/// Reporter that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {}

/// Reporter that records every event, for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    /// Kind, title, artists and track count of each resolved link.
    pub resolved: Vec<(LinkKind, String, String, usize)>,
    pub started: Vec<String>,
    pub outcomes: Vec<(String, ItemOutcome)>,
}

impl ProgressReporter for RecordingReporter {
    fn on_resolved(&mut self, kind: LinkKind, collection: &CollectionResult) {
        self.resolved.push((
            kind,
            collection.title.clone(),
            collection.artists.clone(),
            collection.len(),
        ));
    }

    fn on_item_start(&mut self, _position: usize, _total: usize, track: &TrackDescriptor) {
        self.started.push(track.id().to_string());
    }

    fn on_item_outcome(&mut self, track: &TrackDescriptor, outcome: &ItemOutcome) {
        self.outcomes.push((track.id().to_string(), outcome.clone()));
    }
}
