//! Media module for link classification, track descriptors and selection.

pub mod item;
pub mod link;
pub mod selection;

pub use item::{CollectionResult, TrackDescriptor, UNKNOWN_ALBUM};
pub use link::{extract_id, LinkKind, ParsedLink};
pub use selection::{filter_selection, parse_selection};
