//! Resolved track metadata.

use crate::error::{Error, Result};
use crate::fs::naming::{sanitize, track_filename};

/// Album name used when the service does not report one.
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// A downloadable track.
///
/// Text fields are sanitized on construction and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackDescriptor {
    title: String,
    artists: String,
    album: String,
    id: String,
}

impl TrackDescriptor {
    /// Build a descriptor, sanitizing the text fields.
    ///
    /// The ID is opaque but must not be empty since it addresses the delivery
    /// endpoint.
    pub fn new(title: &str, artists: &str, album: &str, id: &str) -> Result<Self> {
        if id.trim().is_empty() {
            return Err(Error::MalformedResponse(format!(
                "track '{}' has an empty id",
                title
            )));
        }

        Ok(Self {
            title: sanitize(title),
            artists: sanitize(artists),
            album: sanitize(album),
            id: id.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artists(&self) -> &str {
        &self.artists
    }

    /// Name of the album the track belongs to.
    pub fn album(&self) -> &str {
        &self.album
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name: `"{title} - {artists}"`.
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.title, self.artists)
    }

    /// Filename this track is persisted under.
    pub fn filename(&self) -> String {
        track_filename(&self.title, &self.artists)
    }
}

/// Ordered tracks of a resolved link plus the collection title and owner.
///
/// For single tracks the title and artists are the track's own and the title
/// is not used for directory naming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionResult {
    pub title: String,
    /// Album artists or playlist owner, as reported by the service.
    pub artists: String,
    pub tracks: Vec<TrackDescriptor>,
}

impl CollectionResult {
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_is_sanitized() {
        let track = TrackDescriptor::new("What's  Up?", "4 Non/Blondes", "Bigger: Better", "id42")
            .unwrap();
        assert_eq!(track.title(), "Whats Up");
        assert_eq!(track.artists(), "4 NonBlondes");
        assert_eq!(track.album(), "Bigger Better");
        assert_eq!(track.id(), "id42");
        assert_eq!(track.display_name(), "Whats Up - 4 NonBlondes");
        assert_eq!(track.filename(), "Whats Up - 4 NonBlondes.mp3");
    }

    #[test]
    fn test_descriptor_rejects_empty_id() {
        let err = TrackDescriptor::new("Song", "Artist", UNKNOWN_ALBUM, "  ").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_descriptor_equality() {
        let a = TrackDescriptor::new("Song", "Artist", "Album", "1").unwrap();
        let b = TrackDescriptor::new("Song ", " Artist", "Album", "1").unwrap();
        let c = TrackDescriptor::new("Song", "Artist", "Album", "2").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
