//! Content rewriter
//!
//! Reads a whole file as UTF-8, removes emoji code points and writes the result back
//! to the same path. Files without matches are never written.

use std::path::Path;

use crate::backends::fs::FileStore;
use crate::core::emoji::EmojiRanges;
use crate::core::model::{FileOutcome, StripError};

/// Strip emoji from one file, returning the number of code points removed.
pub fn rewrite_file(
    store: &dyn FileStore,
    path: &Path,
    ranges: &EmojiRanges,
) -> Result<usize, StripError> {
    let bytes = store.read(path).map_err(|source| StripError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8(bytes).map_err(|e| StripError::Decode {
        path: path.to_path_buf(),
        source: e.utf8_error(),
    })?;

    let stripped = ranges.strip(&text);
    if stripped.removed == 0 {
        return Ok(0);
    }

    store
        .write(path, stripped.text.as_bytes())
        .map_err(|source| StripError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(stripped.removed)
}

/// Clean one file. Failures are logged and reported as [`FileOutcome::Failed`];
/// they never propagate.
pub fn clean_file(store: &dyn FileStore, path: &Path, ranges: &EmojiRanges) -> FileOutcome {
    match rewrite_file(store, path, ranges) {
        Ok(0) => {
            tracing::debug!(path = %path.display(), "no emoji found");
            FileOutcome::Clean
        }
        Ok(removed) => {
            tracing::info!(path = %path.display(), removed, "rewrote file");
            FileOutcome::Rewritten { removed }
        }
        Err(err) => {
            tracing::warn!("skipping file: {}", err);
            FileOutcome::Failed(err)
        }
    }
}
