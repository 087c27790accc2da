//! Metadata resolution for tracks, albums and playlists.

use crate::api::{MetadataSource, TrackListEntry};
use crate::config::RetryConfig;
use crate::error::{Error, Result};
use crate::media::{CollectionResult, LinkKind, ParsedLink, TrackDescriptor, UNKNOWN_ALBUM};
use crate::retry::retry;

/// Resolves links into ordered track lists.
///
/// Every remote call is retried according to the policy. Once a call runs out
/// of attempts the whole resolution fails and nothing fetched so far is
/// returned.
pub struct Resolver<'a, M: MetadataSource + ?Sized> {
    source: &'a M,
    retry: &'a RetryConfig,
}

impl<'a, M: MetadataSource + ?Sized> Resolver<'a, M> {
    pub fn new(source: &'a M, retry: &'a RetryConfig) -> Self {
        Self { source, retry }
    }

    /// Resolve a classified link.
    ///
    /// Errors are wrapped in [`Error::Resolution`] carrying the link kind.
    pub async fn resolve(&self, link: &ParsedLink) -> Result<CollectionResult> {
        let result = match link.kind {
            LinkKind::Track => self.resolve_track(&link.id).await,
            LinkKind::Album => self.resolve_album(&link.id).await,
            LinkKind::Playlist => self.resolve_playlist(&link.id).await,
        };

        result.map_err(|e| Error::resolution(link.kind, e))
    }

    /// Resolve a single track into a one-element collection.
    pub async fn resolve_track(&self, track_id: &str) -> Result<CollectionResult> {
        tracing::debug!("Resolving track {}", track_id);

        let response = retry(self.retry, || self.source.track(track_id)).await?;

        if !response.success {
            return Err(Error::TrackUnavailable(track_id.to_string()));
        }

        let metadata = response.metadata.ok_or_else(|| {
            Error::MalformedResponse(format!("track {} has no metadata", track_id))
        })?;

        let track = TrackDescriptor::new(
            &metadata.title,
            &metadata.artists,
            metadata.album.as_deref().unwrap_or(UNKNOWN_ALBUM),
            &metadata.id,
        )?;

        Ok(CollectionResult {
            title: track.title().to_string(),
            artists: track.artists().to_string(),
            tracks: vec![track],
        })
    }

    /// Resolve an album: metadata, then the full track list in one call.
    pub async fn resolve_album(&self, album_id: &str) -> Result<CollectionResult> {
        let metadata = retry(self.retry, || self.source.album_metadata(album_id)).await?;
        tracing::info!("Album: {} by {}", metadata.title, metadata.artists);

        let track_list = retry(self.retry, || self.source.album_tracks(album_id)).await?;

        let tracks = track_list
            .track_list
            .iter()
            .map(|entry| TrackDescriptor::new(&entry.title, &entry.artists, &metadata.title, &entry.id))
            .collect::<Result<Vec<_>>>()?;

        tracing::info!("Found {} tracks in album", tracks.len());

        Ok(CollectionResult {
            title: metadata.title,
            artists: metadata.artists,
            tracks,
        })
    }

    /// Resolve a playlist, following the offset cursor until it is falsy.
    pub async fn resolve_playlist(&self, playlist_id: &str) -> Result<CollectionResult> {
        let metadata = retry(self.retry, || self.source.playlist_metadata(playlist_id)).await?;
        tracing::info!("Playlist: {} by {}", metadata.title, metadata.artists);

        let mut entries: Vec<TrackListEntry> = Vec::new();
        let mut offset = 0u64;

        loop {
            let page = retry(self.retry, || self.source.playlist_page(playlist_id, offset)).await?;
            tracing::debug!(
                "Playlist page at offset {}: {} tracks",
                offset,
                page.track_list.len()
            );

            let next = page.next_offset();
            entries.extend(page.track_list);

            match next {
                Some(next) if next > offset => offset = next,
                Some(next) => {
                    return Err(Error::MalformedResponse(format!(
                        "playlist {} cursor did not advance: {} after {}",
                        playlist_id, next, offset
                    )));
                }
                None => break,
            }
        }

        let tracks = entries
            .iter()
            .map(|entry| {
                TrackDescriptor::new(
                    &entry.title,
                    &entry.artists,
                    entry.album.as_deref().unwrap_or(UNKNOWN_ALBUM),
                    &entry.id,
                )
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::info!("Found {} tracks in playlist", tracks.len());

        Ok(CollectionResult {
            title: metadata.title,
            artists: metadata.artists,
            tracks,
        })
    }
}
