//! Console progress reporting.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::media::{CollectionResult, LinkKind, TrackDescriptor};
use crate::output::console::print_track_list;
use crate::output::events::{ItemOutcome, ProgressReporter};
use crate::output::stats::DownloadStats;

/// Create a spinner for long-running operations.
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(template) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(template);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}

/// Reporter that prints progress to the terminal and keeps counters.
pub struct ConsoleReporter {
    show_skipped: bool,
    spinner: Option<ProgressBar>,
    stats: DownloadStats,
}

impl ConsoleReporter {
    pub fn new(show_skipped: bool) -> Self {
        Self {
            show_skipped,
            spinner: None,
            stats: DownloadStats::default(),
        }
    }

    pub fn stats(&self) -> &DownloadStats {
        &self.stats
    }
}

impl ProgressReporter for ConsoleReporter {
    fn on_resolved(&mut self, kind: LinkKind, collection: &CollectionResult) {
        if kind.is_collection() {
            print_track_list(kind, collection);
        }
    }

    fn on_item_start(&mut self, position: usize, total: usize, track: &TrackDescriptor) {
        let message = format!("[{}/{}] Downloading: {}", position, total, track.display_name());
        self.spinner = Some(create_spinner(&message));
    }

    fn on_item_outcome(&mut self, track: &TrackDescriptor, outcome: &ItemOutcome) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
        self.stats.record(outcome);

        let name = track.display_name();
        match outcome {
            ItemOutcome::Written(_) => {
                println!("{} {}", style("Downloaded").green().bold(), name);
            }
            ItemOutcome::Skipped(_) if self.show_skipped => {
                println!("{} {} (already exists)", style("Skipped").yellow().bold(), name);
            }
            ItemOutcome::Skipped(_) => {}
            ItemOutcome::Failed(reason) => {
                println!("{} {}: {}", style("Failed").red().bold(), name, reason);
            }
        }
    }
}
