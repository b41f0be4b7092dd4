//! Run model
//!
//! Per-file outcomes, the run summary they accumulate into, and the error types
//! shared by the rewriter and the orchestrator.

use serde::Serialize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that stop a run before any file is touched
#[derive(Debug, Error)]
pub enum CleanError {
    #[error("root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),
}

/// Per-file failures. These are logged and the file is skipped.
#[derive(Debug, Error)]
pub enum StripError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8: {}", .path.display(), .source)]
    Decode {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What happened to a single file
#[derive(Debug)]
pub enum FileOutcome {
    /// No emoji found, nothing written
    Clean,
    /// Emoji removed and the file rewritten
    Rewritten { removed: usize },
    /// Read, decode or write failed; the file counts as unmodified
    Failed(StripError),
}

impl FileOutcome {
    /// Number of code points removed (0 unless rewritten)
    #[allow(dead_code)]
    pub fn removed(&self) -> usize {
        match self {
            FileOutcome::Rewritten { removed } => *removed,
            _ => 0,
        }
    }
}

/// A file that was rewritten
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanedFile {
    /// Path relative to root, using '/' as separator
    pub path: String,
    pub removed: usize,
}

/// A file that could not be processed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedFile {
    pub path: String,
    pub message: String,
}

/// Counters for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub files_modified: usize,
    pub files_failed: usize,
    pub emojis_removed: usize,
    pub cleaned: Vec<CleanedFile>,
    pub failed: Vec<FailedFile>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for one scanned file
    pub fn record(&mut self, relative: &str, outcome: &FileOutcome) {
        self.files_scanned += 1;

        match outcome {
            FileOutcome::Clean => {}
            FileOutcome::Rewritten { removed } => {
                self.files_modified += 1;
                self.emojis_removed += removed;
                self.cleaned.push(CleanedFile {
                    path: relative.to_string(),
                    removed: *removed,
                });
            }
            FileOutcome::Failed(err) => {
                self.files_failed += 1;
                self.failed.push(FailedFile {
                    path: relative.to_string(),
                    message: err.to_string(),
                });
            }
        }
    }
}
