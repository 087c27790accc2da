//! Console output utilities.

use console::style;

use crate::media::{CollectionResult, LinkKind};

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
                   _
                  | |
 _   _ _____ ____ | |  _
| | | (____ |  _ \| |_/ )
| |_| / ___ | | | |  _ (
 \__  \_____|_| |_|_| \_)
(____/
"#;
    println!("{}", style(banner).blue());
    println!("{}", style("Track, album and playlist downloader").blue().bold());
    println!("{}", style("═".repeat(47)).dim());
    println!();
}

/// Heading naming a collection and its owner, e.g. `Album: Abbey Road by The Beatles`.
pub fn owner_line(kind: LinkKind, collection: &CollectionResult) -> String {
    let label = match kind {
        LinkKind::Album => "Album",
        LinkKind::Playlist => "Playlist",
        LinkKind::Track => "Track",
    };
    format!("{}: {} by {}", label, collection.title, collection.artists)
}

/// Print the numbered track list of a resolved collection.
pub fn print_track_list(kind: LinkKind, collection: &CollectionResult) {
    println!();
    print_info(&owner_line(kind, collection));
    println!(
        "{}",
        style(format!("Tracks in {} \"{}\":", kind, collection.title)).bold()
    );
    for (i, track) in collection.tracks.iter().enumerate() {
        println!("  {:>3}. {}", i + 1, track.display_name());
    }
    println!();
}
