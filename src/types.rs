/*!
 * Core types and data structures for srcdump
 */

use std::path::PathBuf;
use std::time::Duration;

/// Lifecycle of a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// Scanner built, nothing touched yet
    #[default]
    NotStarted,
    /// Output open, tree being walked
    Scanning,
    /// Output flushed and closed
    Completed,
    /// Run aborted by a fatal error
    Failed,
}

impl RunState {
    /// Whether the run has reached a terminal state
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// A matched file whose content could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFailure {
    /// Path relative to the scan root
    pub path: PathBuf,
    /// Error message written inline into the output
    pub message: String,
}

/// Counters collected while scanning
#[derive(Debug, Clone, Default)]
pub struct ScanStatistics {
    /// Number of matched files, readable or not
    pub files_processed: usize,
    /// Number of matched files whose content was written
    pub files_read: usize,
    /// Bytes of file content copied into the output
    pub content_bytes: u64,
    /// Matched files that could not be read
    pub read_failures: Vec<ReadFailure>,
}

/// Result of a completed run
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Number of matched files
    pub files_processed: usize,
    /// Absolute path of the output artifact
    pub output_file: PathBuf,
    /// Detailed counters
    pub statistics: ScanStatistics,
    /// Wall time of the run
    pub duration: Duration,
}
