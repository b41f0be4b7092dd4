//! File store backend
//!
//! Abstracts the file listing and whole-file reads/writes the cleaner needs, so the
//! orchestrator can run against the real disk or an in-memory tree.

use ignore::WalkBuilder;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::filter::FilterRules;

/// Listing and whole-file I/O
pub trait FileStore {
    /// Whether `path` is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// All regular files under `root`, recursively.
    ///
    /// Implementations may skip directories `rules` excludes; callers still apply
    /// the full filter to every returned path.
    fn list_files(&self, root: &Path, rules: &FilterRules) -> Vec<PathBuf>;

    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// The real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskStore;

impl FileStore for DiskStore {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_files(&self, root: &Path, rules: &FilterRules) -> Vec<PathBuf> {
        let prune = rules.clone();

        // No ignore files, no hidden-file filtering: every path is visited unless
        // its directory is excluded
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                entry.depth() == 0
                    || !is_dir
                    || !entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| prune.excludes_dir(name))
            });

        let mut files = Vec::new();

        for entry in builder.build() {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    tracing::warn!("walk error: {}", err);
                    continue;
                }
            };

            if entry.file_type().is_some_and(|t| t.is_file()) {
                files.push(entry.into_path());
            }
        }

        files
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }
}

/// In-memory store for tests: a virtual file listing plus write accounting
#[cfg(test)]
pub mod memory {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::{BTreeMap, BTreeSet};

    #[derive(Debug, Default)]
    pub struct MemoryStore {
        root: PathBuf,
        files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
        unreadable: BTreeSet<PathBuf>,
        readonly: BTreeSet<PathBuf>,
        writes: Cell<usize>,
    }

    impl MemoryStore {
        pub fn new(root: impl Into<PathBuf>) -> Self {
            Self {
                root: root.into(),
                ..Default::default()
            }
        }

        /// Add a file at `relative` under the root
        pub fn with_file(self, relative: &str, contents: impl AsRef<[u8]>) -> Self {
            self.files
                .borrow_mut()
                .insert(self.root.join(relative), contents.as_ref().to_vec());
            self
        }

        /// Listed, but every read fails
        pub fn with_unreadable(mut self, relative: &str) -> Self {
            let path = self.root.join(relative);
            self.files.borrow_mut().insert(path.clone(), Vec::new());
            self.unreadable.insert(path);
            self
        }

        /// Readable, but every write fails
        pub fn with_readonly(mut self, relative: &str, contents: impl AsRef<[u8]>) -> Self {
            let path = self.root.join(relative);
            self.files
                .borrow_mut()
                .insert(path.clone(), contents.as_ref().to_vec());
            self.readonly.insert(path);
            self
        }

        pub fn contents(&self, relative: &str) -> Vec<u8> {
            self.files.borrow()[&self.root.join(relative)].clone()
        }

        pub fn text(&self, relative: &str) -> String {
            String::from_utf8(self.contents(relative)).unwrap()
        }

        /// Number of successful writes so far
        pub fn writes(&self) -> usize {
            self.writes.get()
        }
    }

    impl FileStore for MemoryStore {
        fn is_dir(&self, path: &Path) -> bool {
            path == self.root
        }

        fn list_files(&self, root: &Path, _rules: &FilterRules) -> Vec<PathBuf> {
            self.files
                .borrow()
                .keys()
                .filter(|p| p.starts_with(root))
                .cloned()
                .collect()
        }

        fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
            if self.unreadable.contains(path) {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "permission denied",
                ));
            }
            self.files
                .borrow()
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
        }

        fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
            if self.readonly.contains(path) {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "read-only file",
                ));
            }
            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), contents.to_vec());
            self.writes.set(self.writes.get() + 1);
            Ok(())
        }
    }
}
