//! Path filter
//!
//! Decides which files under the run root are eligible for cleaning: the extension
//! must be on the allow-list and no directory segment may be on the exclusion list.

use std::collections::BTreeSet;
use std::path::{Component, Path};

/// File extensions processed by default (compared case-insensitively)
pub const DEFAULT_EXTENSIONS: &[&str] = &["jsx", "js", "md", "sh", "ts", "tsx"];

/// Directory names skipped by default (compared case-sensitively)
pub const DEFAULT_EXCLUDED_DIRS: &[&str] =
    &["node_modules", ".git", ".next", "dist", "build", ".env"];

/// Immutable filter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRules {
    /// Lowercase, without the leading dot
    extensions: BTreeSet<String>,
    excluded_dirs: BTreeSet<String>,
}

impl Default for FilterRules {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS, DEFAULT_EXCLUDED_DIRS)
    }
}

impl FilterRules {
    /// Create rules from an extension allow-list and a directory exclusion list.
    ///
    /// Extensions may be given with or without a leading dot.
    pub fn new<E, D>(extensions: E, excluded_dirs: D) -> Self
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
        D: IntoIterator,
        D::Item: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();

        let excluded_dirs = excluded_dirs
            .into_iter()
            .map(|dir| dir.as_ref().trim().to_string())
            .filter(|dir| !dir.is_empty())
            .collect();

        Self {
            extensions,
            excluded_dirs,
        }
    }

    /// Start from the defaults and replace whichever list was given on the command line
    pub fn with_overrides(extensions: &[String], excluded_dirs: &[String]) -> Self {
        let defaults = Self::default();
        Self {
            extensions: if extensions.is_empty() {
                defaults.extensions
            } else {
                Self::new(extensions, std::iter::empty::<&str>()).extensions
            },
            excluded_dirs: if excluded_dirs.is_empty() {
                defaults.excluded_dirs
            } else {
                Self::new(std::iter::empty::<&str>(), excluded_dirs).excluded_dirs
            },
        }
    }

    /// Whether a directory with this exact name is excluded
    pub fn excludes_dir(&self, name: &str) -> bool {
        self.excluded_dirs.contains(name)
    }

    /// Whether the file's extension is on the allow-list
    pub fn accepts_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions.contains(&ext.to_lowercase()))
            .unwrap_or(false)
    }

    /// Decide whether a file should be processed.
    ///
    /// `relative` is the file path relative to the run root. Directory segments are
    /// compared whole, so `node_modules_backup/a.js` is not excluded.
    pub fn should_process(&self, relative: &Path) -> bool {
        let in_excluded_dir = relative
            .parent()
            .map(|dir| {
                dir.components().any(|c| match c {
                    Component::Normal(name) => {
                        name.to_str().is_some_and(|n| self.excludes_dir(n))
                    }
                    _ => false,
                })
            })
            .unwrap_or(false);

        !in_excluded_dir && self.accepts_extension(relative)
    }

    #[allow(dead_code)]
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    #[allow(dead_code)]
    pub fn excluded_dirs(&self) -> impl Iterator<Item = &str> {
        self.excluded_dirs.iter().map(String::as_str)
    }
}
