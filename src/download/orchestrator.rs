//! Sequential batch download of selected tracks.

use std::path::Path;

use crate::api::PayloadSource;
use crate::config::RetryConfig;
use crate::download::persist::{persist, PersistOutcome};
use crate::error::Result;
use crate::fs::ensure_dir;
use crate::media::TrackDescriptor;
use crate::output::{ItemOutcome, ProgressReporter};
use crate::retry::retry;

/// Drives the persistence guard over a list of tracks, one at a time.
pub struct Orchestrator<'a, P: PayloadSource + ?Sized> {
    payloads: &'a P,
    retry: &'a RetryConfig,
}

impl<'a, P: PayloadSource + ?Sized> Orchestrator<'a, P> {
    pub fn new(payloads: &'a P, retry: &'a RetryConfig) -> Self {
        Self { payloads, retry }
    }

    /// Download `tracks` in order into `output_dir`.
    ///
    /// The directory is created first; failing to create it is the only error
    /// returned. A track that fails is reported and the batch moves on.
    pub async fn run(
        &self,
        tracks: &[TrackDescriptor],
        output_dir: &Path,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<()> {
        ensure_dir(output_dir).await?;

        tracing::info!(
            "Downloading {} track(s) into {}",
            tracks.len(),
            output_dir.display()
        );

        let total = tracks.len();
        for (index, track) in tracks.iter().enumerate() {
            reporter.on_item_start(index + 1, total, track);

            let outcome = match self.download_one(track, output_dir).await {
                Ok(PersistOutcome::Written(path)) => ItemOutcome::Written(path),
                Ok(PersistOutcome::Skipped(path)) => ItemOutcome::Skipped(path),
                Err(e) => {
                    tracing::warn!("Failed to download {}: {}", track.display_name(), e);
                    ItemOutcome::Failed(e.to_string())
                }
            };

            reporter.on_item_outcome(track, &outcome);
        }

        Ok(())
    }

    async fn download_one(
        &self,
        track: &TrackDescriptor,
        output_dir: &Path,
    ) -> Result<PersistOutcome> {
        retry(self.retry, || persist(self.payloads, track, output_dir)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::output::RecordingReporter;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Delivery fake: each ID fails a fixed number of times before succeeding.
    #[derive(Default)]
    struct FlakyPayloads {
        failures: Mutex<HashMap<String, u32>>,
        calls: Mutex<Vec<String>>,
    }

    impl FlakyPayloads {
        fn failing(id: &str, times: u32) -> Self {
            let fake = Self::default();
            fake.failures.lock().unwrap().insert(id.to_string(), times);
            fake
        }
    }

    #[async_trait]
    impl PayloadSource for FlakyPayloads {
        async fn fetch_payload(&self, track_id: &str) -> Result<Vec<u8>> {
            self.calls.lock().unwrap().push(track_id.to_string());
            let mut failures = self.failures.lock().unwrap();
            if let Some(n) = failures.get_mut(track_id) {
                if *n > 0 {
                    *n -= 1;
                    return Err(Error::HttpStatus {
                        status: 503,
                        url: format!("http://fake/track/{}", track_id),
                    });
                }
            }
            Ok(track_id.as_bytes().to_vec())
        }
    }

    fn tracks(ids: &[&str]) -> Vec<TrackDescriptor> {
        ids.iter()
            .map(|id| TrackDescriptor::new(&format!("Song {}", id), "Artist", "Album", id).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_failure_does_not_abort_batch() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("Album");
        let payloads = FlakyPayloads::failing("b", 10);
        let policy = RetryConfig::immediate(3);
        let mut reporter = RecordingReporter::default();

        Orchestrator::new(&payloads, &policy)
            .run(&tracks(&["a", "b", "c"]), &out, &mut reporter)
            .await
            .unwrap();

        assert_eq!(reporter.started, vec!["a", "b", "c"]);
        assert!(matches!(reporter.outcomes[0].1, ItemOutcome::Written(_)));
        assert!(reporter.outcomes[1].1.is_failed());
        assert!(matches!(reporter.outcomes[2].1, ItemOutcome::Written(_)));
        assert_eq!(
            *payloads.calls.lock().unwrap(),
            vec!["a", "b", "b", "b", "c"]
        );
        assert!(out.join("Song a - Artist.mp3").exists());
        assert!(!out.join("Song b - Artist.mp3").exists());
    }

    #[tokio::test]
    async fn test_transient_failure_recovers() {
        let tmp = tempfile::tempdir().unwrap();
        let payloads = FlakyPayloads::failing("a", 2);
        let policy = RetryConfig::immediate(3);
        let mut reporter = RecordingReporter::default();

        Orchestrator::new(&payloads, &policy)
            .run(&tracks(&["a"]), tmp.path(), &mut reporter)
            .await
            .unwrap();

        assert!(matches!(reporter.outcomes[0].1, ItemOutcome::Written(_)));
        assert_eq!(payloads.calls.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_rerun_skips_everything() {
        let tmp = tempfile::tempdir().unwrap();
        let payloads = FlakyPayloads::default();
        let policy = RetryConfig::immediate(3);
        let batch = tracks(&["a", "b"]);

        let mut first = RecordingReporter::default();
        let orchestrator = Orchestrator::new(&payloads, &policy);
        orchestrator.run(&batch, tmp.path(), &mut first).await.unwrap();

        let mut second = RecordingReporter::default();
        orchestrator.run(&batch, tmp.path(), &mut second).await.unwrap();

        assert!(second
            .outcomes
            .iter()
            .all(|(_, outcome)| matches!(outcome, ItemOutcome::Skipped(_))));
        assert_eq!(payloads.calls.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_selection_downloads_once_then_skips() {
        let tmp = tempfile::tempdir().unwrap();
        let payloads = FlakyPayloads::default();
        let policy = RetryConfig::immediate(3);
        let mut batch = tracks(&["a"]);
        batch.push(batch[0].clone());
        let mut reporter = RecordingReporter::default();

        Orchestrator::new(&payloads, &policy)
            .run(&batch, tmp.path(), &mut reporter)
            .await
            .unwrap();

        assert!(matches!(reporter.outcomes[0].1, ItemOutcome::Written(_)));
        assert!(matches!(reporter.outcomes[1].1, ItemOutcome::Skipped(_)));
    }
}
