//! Flows module - End-to-end runs built from backends
//!
//! Provides:
//! - clean: Walk a root, filter paths, rewrite files, summarize

pub mod clean;
