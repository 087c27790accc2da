//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Track, album and playlist downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "yank",
    version,
    about = "Download tracks, albums and playlists from shareable links",
    long_about = "Resolves a track, album or playlist link into its track list and saves each \
                  track as an MP3.\n\n\
                  Tracks that already exist in the output directory are skipped."
)]
pub struct Args {
    /// Track, album or playlist URL. Prompted for when omitted.
    #[arg(short, long)]
    pub url: Option<String>,

    /// Space-separated, 1-based track numbers to download from a collection.
    /// Prompted for when omitted.
    #[arg(short, long, conflicts_with = "all")]
    pub select: Option<String>,

    /// Download every track of a collection without prompting.
    #[arg(long)]
    pub all: bool,

    /// Base directory for downloads.
    #[arg(short = 'd', long = "directory")]
    pub download_directory: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, env = "YANK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Attempts per remote call before giving up.
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Fail immediately when the service answers 404 instead of retrying.
    #[arg(long)]
    pub no_retry_not_found: bool,

    /// Hide tracks skipped because they already exist.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Selection given on the command line, if any. `--all` maps to blank.
    pub fn preset_selection(&self) -> Option<String> {
        if self.all {
            Some(String::new())
        } else {
            self.select.clone()
        }
    }

    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(dir) = &self.download_directory {
            config.options.download_directory = Some(dir.clone());
        }

        if let Some(max_attempts) = self.max_attempts {
            config.retry.max_attempts = max_attempts;
        }

        // Boolean flags (only override if set to non-default)
        if self.no_retry_not_found {
            config.retry.retry_not_found = false;
        }

        if self.quiet {
            config.options.show_skipped = false;
        }
    }
}
