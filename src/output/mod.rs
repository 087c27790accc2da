//! Output module for progress events and console output.
//!
//! Provides:
//! - The progress event interface used by the pipeline
//! - Colored console output and spinners
//! - Statistics reporting

pub mod console;
pub mod events;
pub mod progress;
pub mod stats;

pub use self::console::{
    print_banner, print_error, print_info, print_success, print_track_list, print_warning,
};
pub use events::{ItemOutcome, NoopReporter, ProgressReporter, RecordingReporter};
pub use progress::{create_spinner, ConsoleReporter};
pub use stats::{print_summary, DownloadStats};
