//! Statistics reporting.

use console::style;

use crate::output::events::ItemOutcome;

/// Per-run download counters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DownloadStats {
    pub written: u64,
    pub skipped: u64,
    pub failed: u64,
}

impl DownloadStats {
    /// Count one item outcome.
    pub fn record(&mut self, outcome: &ItemOutcome) {
        match outcome {
            ItemOutcome::Written(_) => self.written += 1,
            ItemOutcome::Skipped(_) => self.skipped += 1,
            ItemOutcome::Failed(_) => self.failed += 1,
        }
    }

    /// Total number of items processed.
    pub fn total(&self) -> u64 {
        self.written + self.skipped + self.failed
    }
}

/// Print the end-of-run summary.
pub fn print_summary(stats: &DownloadStats) {
    println!();
    println!("{}", style("═".repeat(47)).dim());
    println!("{}", style("Download completed!").blue().bold());
    println!("  Downloaded: {}", style(stats.written).green());
    println!("  Skipped:    {} (already present)", style(stats.skipped).yellow());
    if stats.failed > 0 {
        println!("  Failed:     {}", style(stats.failed).red());
    }
    println!("  Total:      {}", stats.total());
    println!("{}", style("═".repeat(47)).dim());
}
