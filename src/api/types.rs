//! API response type definitions.

use serde::Deserialize;
use serde_json::Value;

/// Response of `GET /download/{trackId}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackResponse {
    pub success: bool,
    pub metadata: Option<TrackMetadata>,
}

/// Metadata of a single track.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackMetadata {
    pub id: String,
    pub title: String,
    pub artists: String,
    #[serde(default)]
    pub album: Option<String>,
}

/// Response of `GET /metadata/{album|playlist}/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionMetadata {
    pub title: String,
    pub artists: String,
}

/// Track entry inside a track list page.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackListEntry {
    pub id: String,
    pub title: String,
    pub artists: String,
    #[serde(default)]
    pub album: Option<String>,
}

/// Response of `GET /tracklist/album/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumTrackList {
    pub track_list: Vec<TrackListEntry>,
}

/// Response of `GET /tracklist/playlist/{id}?offset={n}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistPage {
    pub track_list: Vec<TrackListEntry>,
    #[serde(default)]
    pub next_offset: Value,
}

impl PlaylistPage {
    /// Offset of the next page, or `None` when the cursor is falsy.
    ///
    /// `0`, `null`, `false`, an empty string or a missing field all end
    /// pagination. Numeric strings are accepted.
    pub fn next_offset(&self) -> Option<u64> {
        match &self.next_offset {
            Value::Number(n) => n.as_u64().filter(|&n| n > 0),
            Value::String(s) => s.trim().parse::<u64>().ok().filter(|&n| n > 0),
            _ => None,
        }
    }
}
