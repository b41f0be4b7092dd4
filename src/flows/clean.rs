//! Clean flow
//!
//! Lists every file under the root, keeps the ones the path filter accepts, and runs
//! the rewriter on each in sorted order while accumulating a run summary.

use anyhow::Result;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::backends::fs::{DiskStore, FileStore};
use crate::backends::rewrite::clean_file;
use crate::core::emoji::EmojiRanges;
use crate::core::filter::FilterRules;
use crate::core::model::{CleanError, FileOutcome, RunSummary};
use crate::core::paths::make_relative;
use crate::core::render::{RenderConfig, Renderer};

/// Immutable configuration for one run
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    pub rules: FilterRules,
    pub ranges: EmojiRanges,
}

/// A file selected for cleaning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub path: PathBuf,
    /// Relative to root, '/' separated
    pub relative: String,
}

/// Files under `root` that pass the filter, sorted by relative path
pub fn collect_targets(store: &dyn FileStore, root: &Path, rules: &FilterRules) -> Vec<Target> {
    let mut targets: Vec<Target> = store
        .list_files(root, rules)
        .into_iter()
        .filter_map(|path| {
            let relative = make_relative(&path, root)?;
            if rules.should_process(Path::new(&relative)) {
                Some(Target { path, relative })
            } else {
                tracing::debug!(path = %relative, "skipped by filter");
                None
            }
        })
        .collect();

    targets.sort_by(|a, b| a.relative.cmp(&b.relative));
    targets
}

/// Clean every eligible file under `root`.
///
/// Fails only if `root` is not an existing directory; per-file failures are counted
/// in the summary.
pub fn clean_tree<W: Write>(
    store: &dyn FileStore,
    root: &Path,
    options: &CleanOptions,
    renderer: &mut Renderer<W>,
) -> Result<RunSummary> {
    if !store.is_dir(root) {
        return Err(CleanError::RootNotFound(root.to_path_buf()).into());
    }

    let targets = collect_targets(store, root, &options.rules);
    tracing::info!(root = %root.display(), targets = targets.len(), "starting scan");
    renderer.begin(root, targets.len())?;

    let mut summary = RunSummary::new();
    for target in &targets {
        let outcome = clean_file(store, &target.path, &options.ranges);
        if let FileOutcome::Rewritten { removed } = outcome {
            renderer.cleaned(&target.relative, removed)?;
        }
        summary.record(&target.relative, &outcome);
    }

    renderer.finish(root, &summary)?;
    Ok(summary)
}

/// Run the clean command against the real filesystem, printing to stdout
pub fn run_clean(root: &Path, options: &CleanOptions, config: RenderConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut renderer = Renderer::new(config, stdout.lock());
    clean_tree(&DiskStore, root, options, &mut renderer)?;
    Ok(())
}
