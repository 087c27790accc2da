//! Shareable link classification.

use std::fmt;

/// Kind of resource a shareable link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkKind {
    /// A single track (the fallback for anything unrecognised).
    #[default]
    Track,
    /// A flat collection fetched in one call.
    Album,
    /// A paginated collection.
    Playlist,
}

impl LinkKind {
    /// Classify a link by substring, checking `album` before `playlist`.
    pub fn classify(link: &str) -> Self {
        if link.contains("album") {
            LinkKind::Album
        } else if link.contains("playlist") {
            LinkKind::Playlist
        } else {
            LinkKind::Track
        }
    }

    /// Whether the link resolves to more than one selectable track.
    pub fn is_collection(&self) -> bool {
        !matches!(self, LinkKind::Track)
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkKind::Track => write!(f, "track"),
            LinkKind::Album => write!(f, "album"),
            LinkKind::Playlist => write!(f, "playlist"),
        }
    }
}

/// Extract the resource ID: the last path segment with any query removed.
///
/// The ID is not validated; a malformed one only shows up as a failed lookup.
pub fn extract_id(link: &str) -> &str {
    let last_segment = link.rsplit('/').next().unwrap_or(link);
    last_segment.split('?').next().unwrap_or(last_segment)
}

/// A classified link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLink {
    pub kind: LinkKind,
    pub id: String,
}

impl ParsedLink {
    /// Classify a link and extract its resource ID.
    pub fn parse(link: &str) -> Self {
        let link = link.trim();
        Self {
            kind: LinkKind::classify(link),
            id: extract_id(link).to_string(),
        }
    }
}
