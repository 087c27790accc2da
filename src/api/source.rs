//! Remote collaborator traits.
//!
//! The resolver and the persistence guard only talk to these traits, so the
//! pipeline can run against [`YankApi`](crate::api::YankApi) or an in-memory
//! fake.

use async_trait::async_trait;

use crate::api::types::{AlbumTrackList, CollectionMetadata, PlaylistPage, TrackResponse};
use crate::error::Result;

/// Read-only metadata service.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// `GET /download/{track_id}`.
    async fn track(&self, track_id: &str) -> Result<TrackResponse>;

    /// `GET /metadata/album/{album_id}`.
    async fn album_metadata(&self, album_id: &str) -> Result<CollectionMetadata>;

    /// `GET /tracklist/album/{album_id}`.
    async fn album_tracks(&self, album_id: &str) -> Result<AlbumTrackList>;

    /// `GET /metadata/playlist/{playlist_id}`.
    async fn playlist_metadata(&self, playlist_id: &str) -> Result<CollectionMetadata>;

    /// `GET /tracklist/playlist/{playlist_id}?offset={offset}`.
    async fn playlist_page(&self, playlist_id: &str, offset: u64) -> Result<PlaylistPage>;
}

/// Audio delivery endpoint.
#[async_trait]
pub trait PayloadSource: Send + Sync {
    /// `GET /track/{track_id}`, returning the whole body.
    async fn fetch_payload(&self, track_id: &str) -> Result<Vec<u8>>;
}
