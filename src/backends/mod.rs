//! Backends module - File access and per-file operations
//!
//! Provides:
//! - fs: File listing and whole-file I/O behind the `FileStore` trait
//! - rewrite: In-place emoji removal for a single file

pub mod fs;
pub mod rewrite;
