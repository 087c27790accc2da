//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fs::naming::sanitize;
use crate::media::{CollectionResult, LinkKind};

/// Folder name used when a collection title sanitizes to nothing usable.
pub const UNTITLED_COLLECTION: &str = "Untitled";

/// Get the output directory for a resolved link.
///
/// Single tracks land directly in the base directory; albums and playlists get
/// a folder named after the sanitized collection title.
pub fn get_output_dir(base_dir: &Path, kind: LinkKind, collection: &CollectionResult) -> PathBuf {
    match kind {
        LinkKind::Track => base_dir.to_path_buf(),
        LinkKind::Album | LinkKind::Playlist => base_dir.join(collection_dir_name(&collection.title)),
    }
}

/// Sanitized folder name for a collection. Empty, `.` and `..` would resolve
/// to the base directory or its parent.
fn collection_dir_name(title: &str) -> String {
    let name = sanitize(title);
    match name.as_str() {
        "" | "." | ".." => UNTITLED_COLLECTION.to_string(),
        _ => name,
    }
}

/// Ensure a directory exists, creating it if necessary.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path).await?;
    Ok(())
}
