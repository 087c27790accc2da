//! Idempotent single-track persistence.

use std::path::{Path, PathBuf};

use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

use crate::api::PayloadSource;
use crate::error::Result;
use crate::media::TrackDescriptor;

/// What [`persist`] did with a track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    /// The payload was downloaded and written here.
    Written(PathBuf),
    /// A file with the target name was already present; nothing was fetched.
    Skipped(PathBuf),
}

/// Download a track into `output_dir` unless its file already exists.
///
/// The payload goes to a hidden temporary sibling first and is renamed into
/// place once fully written, so an interrupted run never leaves a truncated
/// file under the final name. The temporary name has a fixed length and does
/// not embed the track name, so any target name the filesystem accepts also
/// leaves room for it.
pub async fn persist<P: PayloadSource + ?Sized>(
    payloads: &P,
    track: &TrackDescriptor,
    output_dir: &Path,
) -> Result<PersistOutcome> {
    let filename = track.filename();
    let output_path = output_dir.join(&filename);

    if fs::try_exists(&output_path).await? {
        tracing::debug!("Skipping existing file: {}", output_path.display());
        return Ok(PersistOutcome::Skipped(output_path));
    }

    let payload = payloads.fetch_payload(track.id()).await?;

    let temp_path = output_dir.join(format!(".{}.part", uuid::Uuid::new_v4().simple()));
    if let Err(e) = write_payload(&temp_path, &payload).await {
        let _ = fs::remove_file(&temp_path).await;
        return Err(e);
    }

    if let Err(e) = fs::rename(&temp_path, &output_path).await {
        let _ = fs::remove_file(&temp_path).await;
        return Err(e.into());
    }

    tracing::debug!(
        "Wrote {} bytes to {}",
        payload.len(),
        output_path.display()
    );

    Ok(PersistOutcome::Written(output_path))
}

async fn write_payload(path: &Path, payload: &[u8]) -> Result<()> {
    let mut file = File::create(path).await?;
    file.write_all(payload).await?;
    file.flush().await?;
    file.sync_all().await?;
    Ok(())
}
