//! The classify → resolve → select → download pipeline.

use std::path::{Path, PathBuf};

use crate::api::{MetadataSource, PayloadSource};
use crate::config::RetryConfig;
use crate::download::{Orchestrator, Resolver};
use crate::error::Result;
use crate::fs::get_output_dir;
use crate::media::{filter_selection, CollectionResult, ParsedLink, TrackDescriptor};
use crate::output::ProgressReporter;

/// A link after classification and resolution.
#[derive(Debug, Clone)]
pub struct ResolvedLink {
    pub link: ParsedLink,
    pub collection: CollectionResult,
}

impl ResolvedLink {
    /// Apply a raw 1-based selection. Single tracks ignore the selection.
    pub fn select(&self, raw_selection: &str) -> Vec<TrackDescriptor> {
        if self.link.kind.is_collection() {
            filter_selection(&self.collection.tracks, raw_selection)
        } else {
            self.collection.tracks.clone()
        }
    }

    /// Directory the selected tracks are written to.
    pub fn output_dir(&self, base_dir: &Path) -> PathBuf {
        get_output_dir(base_dir, self.link.kind, &self.collection)
    }
}

/// Wires the pipeline stages to a metadata service and a delivery endpoint.
pub struct Pipeline<'a, M: MetadataSource + ?Sized, P: PayloadSource + ?Sized> {
    metadata: &'a M,
    payloads: &'a P,
    retry: &'a RetryConfig,
}

impl<'a, M, P> Pipeline<'a, M, P>
where
    M: MetadataSource + ?Sized,
    P: PayloadSource + ?Sized,
{
    pub fn new(metadata: &'a M, payloads: &'a P, retry: &'a RetryConfig) -> Self {
        Self {
            metadata,
            payloads,
            retry,
        }
    }

    /// Classify and resolve a link.
    pub async fn resolve(
        &self,
        link: &str,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<ResolvedLink> {
        let link = ParsedLink::parse(link);
        tracing::info!("Resolving {} {}", link.kind, link.id);

        let collection = Resolver::new(self.metadata, self.retry)
            .resolve(&link)
            .await?;
        reporter.on_resolved(link.kind, &collection);

        Ok(ResolvedLink { link, collection })
    }

    /// Download the selected tracks of a resolved link under `base_dir`.
    pub async fn download(
        &self,
        resolved: &ResolvedLink,
        raw_selection: &str,
        base_dir: &Path,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<()> {
        let selected = resolved.select(raw_selection);
        let output_dir = resolved.output_dir(base_dir);

        Orchestrator::new(self.payloads, self.retry)
            .run(&selected, &output_dir, reporter)
            .await
    }

    /// Resolve, select and download in one go.
    ///
    /// A resolution failure returns before any directory is created or any
    /// download is attempted.
    pub async fn run(
        &self,
        link: &str,
        raw_selection: &str,
        base_dir: &Path,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<ResolvedLink> {
        let resolved = self.resolve(link, reporter).await?;
        self.download(&resolved, raw_selection, base_dir, reporter)
            .await?;
        Ok(resolved)
    }
}
