//! Filename generation and sanitization.

use std::sync::LazyLock;

use regex::Regex;

/// Characters that are never allowed in a generated path component.
const FORBIDDEN_CHARS: &str = r#"<>:"/\|?*'"#;

/// Extension used for every persisted track.
pub const TRACK_EXTENSION: &str = "mp3";

static FORBIDDEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("[{}]", regex::escape(FORBIDDEN_CHARS)))
        .expect("forbidden-character pattern is valid")
});

/// Normalize arbitrary text into a filesystem-safe name.
///
/// Every forbidden character is removed, whitespace runs are collapsed into a
/// single space and the result is trimmed. Applying it twice yields the same
/// string as applying it once.
pub fn sanitize(text: &str) -> String {
    let stripped = FORBIDDEN_PATTERN.replace_all(text, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// File stem for a track: `"{title} - {artists}"`, sanitized as a whole.
pub fn track_stem(title: &str, artists: &str) -> String {
    sanitize(&format!("{} - {}", title, artists))
}

/// Full filename for a track, including the extension.
pub fn track_filename(title: &str, artists: &str) -> String {
    format!("{}.{}", track_stem(title, artists), TRACK_EXTENSION)
}
